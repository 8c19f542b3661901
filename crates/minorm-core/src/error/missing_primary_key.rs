use super::Error;

/// Error when a model declares no identifier field.
#[derive(Debug)]
pub(super) struct MissingPrimaryKey {
    model: Box<str>,
}

impl std::error::Error for MissingPrimaryKey {}

impl core::fmt::Display for MissingPrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing primary key: model `{}` has no field marked as the identifier",
            self.model
        )
    }
}

impl Error {
    /// Creates a missing primary key error.
    pub fn missing_primary_key(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingPrimaryKey(MissingPrimaryKey {
            model: model.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing primary key error.
    pub fn is_missing_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingPrimaryKey(_))
    }
}
