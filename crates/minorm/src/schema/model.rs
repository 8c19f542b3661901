use super::Field;
use crate::{Error, Result};

use minorm_core::schema::db::{Column, ColumnId, Table};

/// A model's metadata as known at macro compilation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Name of the model
    pub name: String,

    /// If the model specifies a table to map to, this is set.
    pub table: Option<String>,

    /// Fields in declaration order
    pub fields: Vec<Field>,
}

impl Model {
    /// Resolves the table the model maps to.
    ///
    /// When several fields are marked as the key the first one wins. No
    /// marked field at all is an error.
    pub fn resolve(&self) -> Result<Table> {
        let Some(primary_key) = self.fields.iter().position(|field| field.primary_key) else {
            return Err(Error::missing_primary_key(&self.name));
        };

        let columns = self
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| Column {
                id: ColumnId(index),
                name: field.column_name().to_string(),
                field: field.name.clone(),
                ty: field.ty,
                nullable: field.nullable,
                primary_key: index == primary_key,
            })
            .collect();

        Ok(Table {
            name: self.table.clone().unwrap_or_else(|| self.name.clone()),
            columns,
            primary_key: ColumnId(primary_key),
        })
    }
}
