use super::Operation;

use crate::schema::db::Table;

#[derive(Debug, Clone)]
pub struct CreateTable {
    pub table: Table,
}

impl From<CreateTable> for Operation {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
