use super::Operation;

use crate::stmt;

#[derive(Debug, Clone)]
pub struct QuerySql {
    /// The SQL statement to execute
    pub stmt: stmt::Statement,

    /// The type of each returned column. `None` when the statement returns
    /// an affected-row count rather than rows.
    pub ret: Option<Vec<stmt::Type>>,
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
