use crate::{
    stmt::{Value, ValueRecord},
    Error, Result,
};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, one record per row, in result-set order
    Values(Vec<ValueRecord>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(values: Vec<ValueRecord>) -> Self {
        Self {
            rows: Rows::Values(values),
        }
    }
}

impl Rows {
    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            Rows::Values(_) => Err(err!("expected a row count, got rows")),
        }
    }

    pub fn into_values(self) -> Result<Vec<ValueRecord>> {
        match self {
            Self::Values(values) => Ok(values),
            Self::Count(_) => Err(err!("expected rows, got a row count")),
        }
    }

    /// Returns the first column of the first row, for single-value queries
    /// such as `MAX(..)` or `COUNT(..)`.
    pub fn into_scalar(self) -> Result<Value> {
        let mut rows = self.into_values()?.into_iter();
        let Some(mut row) = rows.next() else {
            return Err(Error::record_not_found("scalar query returned no rows"));
        };
        if row.is_empty() {
            return Err(err!("scalar query returned an empty row"));
        }
        Ok(row.take(0))
    }
}
