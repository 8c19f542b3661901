use super::Error;

/// Error when a result row cannot be bound to a model.
///
/// Rows are bound by position: the identifier first, then one column per data
/// field in declaration order. A row of a different width cannot be bound.
#[derive(Debug)]
pub(super) struct InvalidRecord {
    model: Box<str>,
    expected: usize,
    actual: usize,
}

impl std::error::Error for InvalidRecord {}

impl core::fmt::Display for InvalidRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid record: `{}` expects {} columns, row has {}",
            self.model, self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates an invalid record error.
    pub fn invalid_record(model: impl Into<String>, expected: usize, actual: usize) -> Error {
        Error::from(super::ErrorKind::InvalidRecord(InvalidRecord {
            model: model.into().into(),
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is an invalid record error.
    pub fn is_invalid_record(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRecord(_))
    }
}
