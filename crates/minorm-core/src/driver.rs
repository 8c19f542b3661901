mod capability;
pub use capability::{Capability, SqlFlavor, StorageTypes};

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, schema::db::Table, Result};

use std::{borrow::Cow, fmt::Debug};

/// A database the core can open connections to.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Returns the URL this driver connects to.
    fn url(&self) -> Cow<'_, str>;

    /// Describes the driver's capability, which informs schema generation.
    fn capability(&self) -> &'static Capability;

    /// Opens a connection. The connection is closed when dropped.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// An open connection, scoped to a single minorm operation.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> Result<Response>;

    /// Creates `table`, identifier column first.
    async fn create_table(&mut self, table: &Table) -> Result<()> {
        self.exec(
            operation::CreateTable {
                table: table.clone(),
            }
            .into(),
        )
        .await?;
        Ok(())
    }

    /// Returns `true` if the database has a user table named after `table`.
    async fn table_exists(&mut self, table: &Table) -> Result<bool> {
        let count = self
            .exec(
                operation::TableExists {
                    table: table.name.clone(),
                }
                .into(),
            )
            .await?
            .rows
            .into_scalar()?;

        Ok(count.to_i64().unwrap_or(0) > 0)
    }
}
