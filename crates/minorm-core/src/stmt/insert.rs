use super::ValueRecord;
use crate::{schema::db::Table, Error, Result};

/// An `INSERT` of a single row.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,

    /// Column names, in table order, excluding the primary key.
    pub columns: Vec<String>,

    /// One value per column.
    pub values: ValueRecord,
}

impl Insert {
    /// Builds the insert for an entity whose field values are `record`, given
    /// in declaration order (primary key included).
    ///
    /// The primary key is left to the database. Every other value must be
    /// non-null.
    pub fn from_record(table: &Table, record: &ValueRecord) -> Result<Insert> {
        if record.len() != table.columns.len() {
            return Err(Error::invalid_record(
                &table.name,
                table.columns.len(),
                record.len(),
            ));
        }

        let mut columns = vec![];
        let mut values = vec![];

        for column in table.data_columns() {
            let value = &record[column.id.0];

            if value.is_null() {
                return Err(Error::unrenderable_value(&table.name, &column.name));
            }

            columns.push(column.name.clone());
            values.push(value.clone());
        }

        Ok(Insert {
            table: table.name.clone(),
            columns,
            values: ValueRecord::from_vec(values),
        })
    }
}
