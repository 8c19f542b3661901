mod value;
pub(crate) use value::Value;

use minorm_core::{
    async_trait,
    driver::{
        operation::{CreateTable, Operation, QuerySql, TableExists},
        Capability, Driver, Response,
    },
    stmt, Error, Result,
};
use minorm_sql as sql;
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration,
};
use url::Url;

/// How long a connection waits on a locked database before failing.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(1000);

#[derive(Debug)]
pub enum Sqlite {
    File { path: PathBuf, timeout: Duration },

    /// Every new in-memory connection is a new, empty database. All scopes
    /// share one connection instead.
    InMemory(Arc<Mutex<RusqliteConnection>>),
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL.
    ///
    /// Accepts `sqlite::memory:` and `sqlite:<path>`. A `timeout` query
    /// parameter sets the busy timeout in milliseconds.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        let mut timeout = DEFAULT_BUSY_TIMEOUT;

        for (key, value) in url.query_pairs() {
            match &*key {
                "timeout" => {
                    let millis = value.parse::<u64>().map_err(|_| {
                        Error::invalid_connection_url(format!(
                            "`timeout` must be a number of milliseconds; url={url_str}"
                        ))
                    })?;
                    timeout = Duration::from_millis(millis);
                }
                _ => {
                    return Err(Error::invalid_connection_url(format!(
                        "unknown parameter `{key}`; url={url_str}"
                    )))
                }
            }
        }

        match url.path() {
            ":memory:" => Self::in_memory(),
            "" => Err(Error::invalid_connection_url(format!(
                "missing database path; url={url_str}"
            ))),
            path => Ok(Self::File {
                path: PathBuf::from(path),
                timeout,
            }),
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self::InMemory(Arc::new(Mutex::new(connection))))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File {
            path: path.as_ref().to_path_buf(),
            timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory(_) => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File { path, .. } => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn connect(&self) -> Result<Box<dyn minorm_core::Connection>> {
        let connection = match self {
            Sqlite::File { path, timeout } => Connection::open(path, *timeout)?,
            Sqlite::InMemory(shared) => Connection::Shared(shared.clone()),
        };
        log::trace!("sqlite connect; url={}", self.url());
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub enum Connection {
    Owned(RusqliteConnection),
    Shared(Arc<Mutex<RusqliteConnection>>),
}

impl Connection {
    pub fn open<P: AsRef<Path>>(path: P, timeout: Duration) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        connection
            .busy_timeout(timeout)
            .map_err(Error::driver_operation_failed)?;
        Ok(Self::Owned(connection))
    }

    fn exec_sync(&mut self, op: Operation) -> Result<Response> {
        match self {
            Connection::Owned(connection) => exec(connection, op),
            Connection::Shared(shared) => {
                let connection = shared
                    .lock()
                    .map_err(|_| minorm_core::err!("in-memory sqlite connection is poisoned"))?;
                exec(&connection, op)
            }
        }
    }
}

#[async_trait]
impl minorm_core::driver::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        self.exec_sync(op)
    }
}

fn exec(connection: &RusqliteConnection, op: Operation) -> Result<Response> {
    match op {
        Operation::CreateTable(CreateTable { table }) => {
            let stmt = sql::Statement::create_table(&table, &Capability::SQLITE)?;
            let count = execute(connection, &stmt)?;
            log::debug!("created table; table={}", table.name);
            Ok(Response::count(count))
        }
        Operation::TableExists(TableExists { table }) => {
            let stmt = sql::Statement::table_exists(table);
            query(connection, &stmt, &[stmt::Type::I64])
        }
        Operation::QuerySql(QuerySql { stmt, ret }) => {
            let stmt = sql::Statement::from(stmt);
            match ret {
                Some(ret) => query(connection, &stmt, &ret),
                None => Ok(Response::count(execute(connection, &stmt)?)),
            }
        }
    }
}

fn serialize(stmt: &sql::Statement) -> (String, Vec<Value>) {
    let mut params = Vec::<stmt::Value>::new();
    let sql = sql::Serializer::sqlite().serialize(stmt, &mut params);
    log::debug!("sqlite exec; sql={sql}; params={}", params.len());
    (sql, params.into_iter().map(Value::from).collect())
}

fn execute(connection: &RusqliteConnection, stmt: &sql::Statement) -> Result<u64> {
    let (sql, params) = serialize(stmt);

    let count = connection
        .execute(&sql, rusqlite::params_from_iter(params.iter()))
        .map_err(Error::driver_operation_failed)?;

    log::debug!("sqlite rows affected; count={count}");
    Ok(count as u64)
}

fn query(
    connection: &RusqliteConnection,
    stmt: &sql::Statement,
    ret_tys: &[stmt::Type],
) -> Result<Response> {
    let (sql, params) = serialize(stmt);

    let mut prepared = connection
        .prepare_cached(&sql)
        .map_err(Error::driver_operation_failed)?;

    let width = prepared.column_count();
    if width != ret_tys.len() {
        return Err(Error::invalid_record(&sql, ret_tys.len(), width));
    }

    let mut rows = prepared
        .query(rusqlite::params_from_iter(params.iter()))
        .map_err(Error::driver_operation_failed)?;

    let mut ret = vec![];

    while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
        let mut items = Vec::with_capacity(width);

        for (index, ty) in ret_tys.iter().enumerate() {
            items.push(Value::from_sql(row, index, ty)?.into_inner());
        }

        ret.push(stmt::ValueRecord::from_vec(items));
    }

    log::debug!("sqlite rows returned; count={}", ret.len());
    Ok(Response::values(ret))
}
