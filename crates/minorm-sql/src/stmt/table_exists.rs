use super::Statement;

/// Counts the catalog entries for a user table named `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableExists {
    pub name: String,
}

impl Statement {
    pub fn table_exists(name: impl Into<String>) -> Self {
        Statement::TableExists(TableExists { name: name.into() })
    }
}
