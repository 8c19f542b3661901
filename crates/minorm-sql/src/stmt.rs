mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod table_exists;
pub use table_exists::TableExists;

pub use minorm_core::stmt::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateTable(CreateTable),
    Insert(Insert),
    Query(Select),
    TableExists(TableExists),
    Update(Update),
}

impl From<minorm_core::stmt::Statement> for Statement {
    fn from(value: minorm_core::stmt::Statement) -> Self {
        match value {
            minorm_core::stmt::Statement::Insert(stmt) => Statement::Insert(stmt),
            minorm_core::stmt::Statement::Query(stmt) => Statement::Query(stmt),
            minorm_core::stmt::Statement::Update(stmt) => Statement::Update(stmt),
        }
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Statement::CreateTable(value)
    }
}

impl From<TableExists> for Statement {
    fn from(value: TableExists) -> Self {
        Statement::TableExists(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Query(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
