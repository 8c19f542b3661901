mod builder;
pub use builder::Builder;

mod config;
pub use config::Config;

use crate::{Model, Result};

use minorm_core::{
    driver::{operation::QuerySql, Connection as _, Driver, Rows},
    schema::db::Table,
    stmt::{Insert, Select, Statement, Type, Update, Value, ValueRecord},
    Error,
};
use minorm_sql::Serializer;

use std::sync::Arc;

/// A database handle and the entry point for every persistence operation.
///
/// Each operation opens its own connection through the driver and releases
/// it before returning. Cloning a `Db` is cheap; clones share the driver.
#[derive(Debug, Clone)]
pub struct Db {
    driver: Arc<dyn Driver>,

    /// Create missing tables on `persist`
    code_first: bool,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connect to the database at `url` with default settings.
    pub async fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url).await
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    pub fn is_code_first(&self) -> bool {
        self.code_first
    }

    /// Loads every row of `M`'s table, optionally filtered by a raw SQL
    /// predicate.
    ///
    /// The predicate is inserted into the `WHERE` clause as-is. It must not
    /// contain untrusted input.
    pub async fn find_all<M: Model>(&self, predicate: Option<&str>) -> Result<Vec<M>> {
        let table = M::schema().resolve()?;
        log::debug!("find_all; model={}; table={}", M::NAME, table.name);

        let select = Select::all(&table).filter_sql(predicate);
        let rows = self.query(&table, select).await?;

        rows.into_iter().map(M::load).collect()
    }

    /// Loads the row whose identifier is `id`.
    ///
    /// Fails with a record-not-found error when there is no such row.
    pub async fn find_by_id<M: Model>(&self, id: impl Into<Value>) -> Result<M> {
        let table = M::schema().resolve()?;
        let id = id.into();
        log::debug!("find_by_id; model={}; table={}; id={id:?}", M::NAME, table.name);

        let select = Select::by_key(&table, id.clone());
        let rows = self.query(&table, select).await?;

        match rows.into_iter().next() {
            Some(record) => M::load(record),
            None => Err(Error::record_not_found(format!(
                "table={}; {}={}",
                table.name,
                table.primary_key_column().name,
                display_key(&id)
            ))),
        }
    }

    /// Loads the first row, optionally filtered by a raw SQL predicate.
    /// Returns `None` when no row matches.
    pub async fn find_first<M: Model>(&self, predicate: Option<&str>) -> Result<Option<M>> {
        let table = M::schema().resolve()?;
        log::debug!("find_first; model={}; table={}", M::NAME, table.name);

        let select = Select::all(&table).filter_sql(predicate).first();
        let rows = self.query(&table, select).await?;

        rows.into_iter().next().map(M::load).transpose()
    }

    /// Saves `entity`: inserts it when its identifier is unset (null or not
    /// positive), updates it otherwise.
    ///
    /// After an insert the entity's identifier is set to the largest key in
    /// the table. This assumes no other writer inserts into the table
    /// concurrently.
    ///
    /// Returns `true` if at least one row was affected. Passing `None` does
    /// nothing and returns `false`.
    pub async fn persist<'a, M: Model + 'a>(
        &self,
        entity: impl Into<Option<&'a mut M>>,
    ) -> Result<bool> {
        let Some(entity) = entity.into() else {
            return Ok(false);
        };

        let table = M::schema().resolve()?;

        let record = entity.record();
        if record.len() != table.columns.len() {
            return Err(Error::invalid_record(
                M::NAME,
                table.columns.len(),
                record.len(),
            ));
        }

        if self.code_first {
            self.ensure_table(&table).await?;
        }

        let pk = table.primary_key_column();
        let key = &record[pk.id.0];

        let count = if key.is_null() || key.to_i64().is_some_and(|key| key <= 0) {
            log::debug!("persist; insert; model={}; table={}", M::NAME, table.name);

            let insert = Insert::from_record(&table, &record)?;
            let count = self.exec(insert.into()).await?;

            let max_key = self
                .exec_with_ret(Select::max_key(&table).into(), vec![pk.ty])
                .await?
                .into_scalar()?;
            log::debug!("persist; assigned key; table={}; key={max_key:?}", table.name);
            entity.assign(pk.id.0, max_key)?;

            count
        } else {
            log::debug!(
                "persist; update; model={}; table={}; key={}",
                M::NAME,
                table.name,
                display_key(key)
            );

            let update = Update::from_record(&table, &record)?;
            self.exec(update.into()).await?
        };

        Ok(count > 0)
    }

    /// Returns `true` if `M`'s table exists.
    pub async fn table_exists<M: Model>(&self) -> Result<bool> {
        let table = M::schema().resolve()?;
        let mut connection = self.driver.connect().await?;
        connection.table_exists(&table).await
    }

    /// Creates `M`'s table.
    pub async fn create_table<M: Model>(&self) -> Result<()> {
        let table = M::schema().resolve()?;
        log::debug!("create_table; model={}; table={}", M::NAME, table.name);
        let mut connection = self.driver.connect().await?;
        connection.create_table(&table).await
    }

    async fn ensure_table(&self, table: &Table) -> Result<()> {
        let mut connection = self.driver.connect().await?;

        if !connection.table_exists(table).await? {
            log::debug!("code first; creating table; table={}", table.name);
            connection.create_table(table).await?;
        }

        Ok(())
    }

    async fn query(&self, table: &Table, select: Select) -> Result<Vec<ValueRecord>> {
        let ret = table.row_columns().map(|column| column.ty).collect();
        self.exec_with_ret(select.into(), ret).await?.into_values()
    }

    /// Runs a write and returns the affected-row count.
    async fn exec(&self, stmt: Statement) -> Result<u64> {
        self.run(stmt, None).await?.into_count()
    }

    async fn exec_with_ret(&self, stmt: Statement, ret: Vec<Type>) -> Result<Rows> {
        self.run(stmt, Some(ret)).await
    }

    async fn run(&self, stmt: Statement, ret: Option<Vec<Type>>) -> Result<Rows> {
        if log::log_enabled!(log::Level::Trace) {
            let serializer = Serializer::for_capability(self.driver.capability());
            let sql = serializer.serialize_inline(&stmt.clone().into());
            log::trace!("exec; sql={sql}");
        }

        let mut connection = self.driver.connect().await?;
        let response = connection.exec(QuerySql { stmt, ret }.into()).await?;

        Ok(response.rows)
    }
}

fn display_key(key: &Value) -> String {
    match key {
        Value::String(key) => key.clone(),
        key => match key.to_i64() {
            Some(key) => key.to_string(),
            None => format!("{key:?}"),
        },
    }
}
