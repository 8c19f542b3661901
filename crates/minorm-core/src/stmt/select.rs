use super::{Filter, Value};
use crate::schema::db::Table;

/// A `SELECT` over a single table.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,
    pub returning: Returning,
    pub filter: Option<Filter>,

    /// Maximum number of rows. The serializer picks the flavor's row-limit
    /// clause (`TOP n` or `LIMIT n`).
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// `*`: the primary key followed by the data columns.
    Star,

    /// `MAX(column)`
    Max(String),
}

impl Select {
    /// Selects every row of `table`.
    pub fn all(table: &Table) -> Select {
        Select {
            table: table.name.clone(),
            returning: Returning::Star,
            filter: None,
            limit: None,
        }
    }

    /// Selects the row whose primary key equals `key`. The key is bound.
    pub fn by_key(table: &Table, key: impl Into<Value>) -> Select {
        Select::all(table).filter(Filter::eq(&table.primary_key_column().name, key))
    }

    /// Selects the largest primary key value in `table`.
    pub fn max_key(table: &Table) -> Select {
        Select {
            returning: Returning::Max(table.primary_key_column().name.clone()),
            ..Select::all(table)
        }
    }

    pub fn filter(mut self, filter: Filter) -> Select {
        self.filter = Some(filter);
        self
    }

    /// Appends an optional caller-supplied predicate. Blank predicates are ignored.
    pub fn filter_sql(mut self, predicate: Option<&str>) -> Select {
        if let Some(filter) = predicate.and_then(Filter::sql) {
            self.filter = Some(filter);
        }
        self
    }

    /// Limits the query to its first row.
    pub fn first(mut self) -> Select {
        self.limit = Some(1);
        self
    }
}
