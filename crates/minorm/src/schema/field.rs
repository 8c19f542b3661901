use minorm_core::stmt;

/// A field mapping as declared on the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The Rust field name
    pub name: String,

    /// Column name override from `#[column("...")]`
    pub column: Option<String>,

    /// The field's value type
    pub ty: stmt::Type,

    /// True if the field is an `Option`
    pub nullable: bool,

    /// True if the field is marked `#[key]`
    pub primary_key: bool,
}

impl Field {
    /// The column the field maps to: the override, or the field name.
    pub fn column_name(&self) -> &str {
        self.column.as_deref().unwrap_or(&self.name)
    }
}
