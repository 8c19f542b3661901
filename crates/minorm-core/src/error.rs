mod adhoc;
mod driver_operation_failed;
mod field_not_found;
mod invalid_connection_url;
mod invalid_record;
mod missing_primary_key;
mod record_not_found;
mod type_conversion;
mod unrenderable_value;
mod unsupported_type;

use adhoc::AdhocError;
use driver_operation_failed::DriverOperationFailed;
use field_not_found::FieldNotFound;
use invalid_connection_url::InvalidConnectionUrl;
use invalid_record::InvalidRecord;
use missing_primary_key::MissingPrimaryKey;
use record_not_found::RecordNotFound;
use type_conversion::TypeConversion;
use unrenderable_value::UnrenderableValue;
use unsupported_type::UnsupportedType;

use std::sync::Arc;

/// An error that can occur in minorm.
///
/// The error is a single pointer wide. Specific failures are identified with
/// the `is_*` predicates rather than by matching on a public enum, which
/// leaves room to add kinds without breaking callers.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => {
                    assert!(
                        inner.cause.is_none(),
                        "consequent error must not already have a cause"
                    );
                    inner.kind
                }
                // A shared consequent cannot be re-parented; keep its message.
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = err.inner.as_ref().and_then(|inner| inner.cause.as_ref()) {
            err = cause;
        }
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    /// Returns the kind of the root cause. Predicates look through context so
    /// that `err.context(..)` keeps answering `is_record_not_found()` etc.
    fn kind(&self) -> &ErrorKind {
        self.root()
            .inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    fn own_kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.own_kind() {
            ErrorKind::DriverOperationFailed(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.own_kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    DriverOperationFailed(DriverOperationFailed),
    FieldNotFound(FieldNotFound),
    InvalidConnectionUrl(InvalidConnectionUrl),
    InvalidRecord(InvalidRecord),
    MissingPrimaryKey(MissingPrimaryKey),
    RecordNotFound(RecordNotFound),
    TypeConversion(TypeConversion),
    UnrenderableValue(UnrenderableValue),
    UnsupportedType(UnsupportedType),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            DriverOperationFailed(err) => core::fmt::Display::fmt(err, f),
            FieldNotFound(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            InvalidRecord(err) => core::fmt::Display::fmt(err, f),
            MissingPrimaryKey(err) => core::fmt::Display::fmt(err, f),
            RecordNotFound(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            UnrenderableValue(err) => core::fmt::Display::fmt(err, f),
            UnsupportedType(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown minorm error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from_args(format_args!("{self}"))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}
