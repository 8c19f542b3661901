use super::Error;

/// Error when a column's value type has no SQL storage type.
///
/// Only surfaces while generating `CREATE TABLE`; reading and writing such
/// columns against an existing schema is unaffected.
#[derive(Debug)]
pub(super) struct UnsupportedType {
    column: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for UnsupportedType {}

impl core::fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported type: column `{}` has type {}, which has no SQL mapping",
            self.column, self.ty
        )
    }
}

impl Error {
    /// Creates an unsupported type error.
    pub fn unsupported_type(column: impl Into<String>, ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedType {
            column: column.into().into(),
            ty: ty.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}
