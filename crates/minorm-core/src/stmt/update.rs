use super::{Filter, Value, ValueRecord};
use crate::{schema::db::Table, Error, Result};

/// An `UPDATE` of a single row, identified by its primary key.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,
    pub assignments: Vec<Assignment>,
    pub filter: Filter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

impl Update {
    /// Builds the update for an entity whose field values are `record`, given
    /// in declaration order (primary key included).
    ///
    /// Null values are skipped rather than written: the update only touches
    /// columns the entity has a value for.
    pub fn from_record(table: &Table, record: &ValueRecord) -> Result<Update> {
        if record.len() != table.columns.len() {
            return Err(Error::invalid_record(
                &table.name,
                table.columns.len(),
                record.len(),
            ));
        }

        let assignments: Vec<_> = table
            .data_columns()
            .filter(|column| !record[column.id.0].is_null())
            .map(|column| Assignment {
                column: column.name.clone(),
                value: record[column.id.0].clone(),
            })
            .collect();

        if assignments.is_empty() {
            return Err(Error::empty_update(&table.name));
        }

        let pk = table.primary_key_column();

        Ok(Update {
            table: table.name.clone(),
            assignments,
            filter: Filter::eq(&pk.name, record[pk.id.0].clone()),
        })
    }
}
