use minorm_core::{
    async_trait,
    driver::{Capability, Connection, Driver, Operation, Response, Rows},
    Result,
};
use minorm_sql::{Serializer, Statement};

use std::{
    borrow::Cow,
    sync::{Arc, Mutex},
};

#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Log of all operations executed through this driver
    /// Using Arc<Mutex> for thread-safe access from tests
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    fn capability(&self) -> &'static Capability {
        self.inner.capability()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(LoggingConnection {
            inner: self.inner.connect().await?,
            capability: self.inner.capability(),
            ops_log: self.ops_log_handle(),
        }))
    }
}

#[derive(Debug)]
pub struct DriverOp {
    pub operation: Operation,

    /// The statement text, with values inlined
    pub sql: String,

    pub response: Response,
}

/// A connection wrapper that logs all operations for testing purposes
#[derive(Debug)]
pub struct LoggingConnection {
    /// The underlying connection that actually executes operations
    inner: Box<dyn Connection>,

    capability: &'static Capability,

    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

#[async_trait]
impl Connection for LoggingConnection {
    async fn exec(&mut self, operation: Operation) -> Result<Response> {
        let sql = render(&operation, self.capability)?;

        let response = self.inner.exec(operation.clone()).await?;

        let driver_op = DriverOp {
            operation,
            sql,
            response: duplicate_response(&response),
        };

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(driver_op);

        Ok(response)
    }
}

fn render(operation: &Operation, capability: &Capability) -> Result<String> {
    let stmt = match operation {
        Operation::CreateTable(op) => Statement::create_table(&op.table, capability)?,
        Operation::QuerySql(op) => Statement::from(op.stmt.clone()),
        Operation::TableExists(op) => Statement::table_exists(op.table.clone()),
    };

    Ok(Serializer::for_capability(capability).serialize_inline(&stmt))
}

fn duplicate_response(response: &Response) -> Response {
    let rows = match &response.rows {
        Rows::Count(count) => Rows::Count(*count),
        Rows::Values(values) => Rows::Values(values.clone()),
    };

    Response { rows }
}
