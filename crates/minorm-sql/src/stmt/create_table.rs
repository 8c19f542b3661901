use super::{ColumnDef, Statement};

use minorm_core::{
    driver::Capability,
    schema::db::{self, Table},
    Error, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions, primary key first
    pub columns: Vec<ColumnDef>,
}

impl Statement {
    /// Builds the `CREATE TABLE` statement for `table`.
    ///
    /// The primary key is declared first so that `SELECT *` returns it
    /// ahead of the data columns, in declaration order.
    pub fn create_table(table: &Table, capability: &Capability) -> Result<Self> {
        let pk = table.primary_key_column();

        let key_ty = match db::Type::from_app(&pk.ty, &capability.storage_types) {
            Some(ty @ db::Type::Integer(_)) => ty,
            _ => {
                return Err(Error::unsupported_type(
                    format!("{}.{}", table.name, pk.name),
                    format!("{:?}", pk.ty),
                ))
            }
        };

        let mut columns = vec![ColumnDef {
            name: pk.name.clone(),
            ty: key_ty,
            primary_key: true,
        }];

        for column in table.data_columns() {
            let Some(ty) = db::Type::from_app(&column.ty, &capability.storage_types) else {
                return Err(Error::unsupported_type(
                    format!("{}.{}", table.name, column.name),
                    format!("{:?}", column.ty),
                ));
            };

            columns.push(ColumnDef {
                name: column.name.clone(),
                ty,
                primary_key: false,
            });
        }

        Ok(Statement::CreateTable(CreateTable {
            name: table.name.clone(),
            columns,
        }))
    }
}
