use super::Error;

/// Error when a database driver operation fails.
///
/// This wraps errors raised by the underlying database library: failing to
/// open a connection, statement syntax errors, constraint violations. The
/// wrapped error is kept as the `source` and is never rewritten.
#[derive(Debug)]
pub(super) struct DriverOperationFailed {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverOperationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverOperationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a driver operation failure.
    ///
    /// This is the preferred way to convert driver-specific errors (rusqlite,
    /// I/O errors, etc.) into minorm errors.
    pub fn driver_operation_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::DriverOperationFailed(
            DriverOperationFailed {
                inner: Box::new(err),
            },
        ))
    }

    /// Returns `true` if this error is a driver operation failure.
    pub fn is_driver_operation_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DriverOperationFailed(_))
    }
}
