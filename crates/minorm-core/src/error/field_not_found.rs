use super::Error;

/// Error when a model is asked to assign a field index it does not declare.
#[derive(Debug)]
pub(super) struct FieldNotFound {
    model: Box<str>,
    field: usize,
}

impl std::error::Error for FieldNotFound {}

impl core::fmt::Display for FieldNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field not found: model `{}` has no field at index {}",
            self.model, self.field
        )
    }
}

impl Error {
    /// Creates a field not found error.
    ///
    /// Raised when the identifier (or any other field) cannot be located on
    /// a materialized instance.
    pub fn field_not_found(model: impl Into<String>, field: usize) -> Error {
        Error::from(super::ErrorKind::FieldNotFound(FieldNotFound {
            model: model.into().into(),
            field,
        }))
    }

    /// Returns `true` if this error is a field not found error.
    pub fn is_field_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FieldNotFound(_))
    }
}
