mod create_table;
pub use create_table::CreateTable;

mod query_sql;
pub use query_sql::QuerySql;

mod table_exists;
pub use table_exists::TableExists;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Create a table from its descriptor
    CreateTable(CreateTable),

    /// Execute a SQL query or write statement
    QuerySql(QuerySql),

    /// Count the catalog entries for a table. Responds with a single
    /// `I64` value.
    TableExists(TableExists),
}
