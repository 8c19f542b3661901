use super::Error;

/// Error when a write statement needs a value that is null.
///
/// Inserts require every data column to carry a value. Updates skip null
/// columns, so this only surfaces for an update when nothing is left to set.
#[derive(Debug)]
pub(super) struct UnrenderableValue {
    table: Box<str>,
    column: Option<Box<str>>,
}

impl std::error::Error for UnrenderableValue {}

impl core::fmt::Display for UnrenderableValue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.column {
            Some(column) => write!(f, "unrenderable value: `{}.{}` is null", self.table, column),
            None => write!(
                f,
                "unrenderable value: no non-null column to update in `{}`",
                self.table
            ),
        }
    }
}

impl Error {
    /// Creates an unrenderable value error for a null column.
    pub fn unrenderable_value(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnrenderableValue(UnrenderableValue {
            table: table.into().into(),
            column: Some(column.into().into()),
        }))
    }

    /// Creates an unrenderable value error for an update with an empty `SET` list.
    pub fn empty_update(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnrenderableValue(UnrenderableValue {
            table: table.into().into(),
            column: None,
        }))
    }

    /// Returns `true` if this error is an unrenderable value error.
    pub fn is_unrenderable_value(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnrenderableValue(_))
    }
}
