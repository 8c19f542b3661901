use super::Operation;

#[derive(Debug, Clone)]
pub struct TableExists {
    pub table: String,
}

impl From<TableExists> for Operation {
    fn from(value: TableExists) -> Self {
        Self::TableExists(value)
    }
}
