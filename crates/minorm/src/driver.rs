use crate::Result;

pub use minorm_core::driver::{
    operation::{self, Operation},
    Capability, Driver, Response, Rows, SqlFlavor,
};

use minorm_core::Error;

use std::borrow::Cow;
use url::Url;

/// A built-in driver, selected by URL scheme.
#[derive(Debug)]
pub(crate) enum Connection {
    #[cfg(feature = "sqlite")]
    Sqlite(minorm_driver_sqlite::Sqlite),
}

impl Connection {
    pub(crate) async fn connect(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        match parsed.scheme() {
            "sqlite" => Self::connect_sqlite(url),
            scheme => Err(Error::invalid_connection_url(format!(
                "unsupported database; scheme={scheme}; url={url}"
            ))),
        }
    }

    #[cfg(feature = "sqlite")]
    fn connect_sqlite(url: &str) -> Result<Self> {
        let driver = minorm_driver_sqlite::Sqlite::new(url)?;
        Ok(Self::Sqlite(driver))
    }

    #[cfg(not(feature = "sqlite"))]
    fn connect_sqlite(_url: &str) -> Result<Self> {
        Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
    }
}

macro_rules! match_db {
    ($self:expr, $driver:pat => $e:expr) => {
        match *$self {
            #[cfg(feature = "sqlite")]
            Connection::Sqlite($driver) => $e,
        }
    };
}

#[minorm_core::async_trait]
impl Driver for Connection {
    fn url(&self) -> Cow<'_, str> {
        match_db!(self, ref driver => driver.url())
    }

    fn capability(&self) -> &'static Capability {
        match_db!(self, ref driver => driver.capability())
    }

    async fn connect(&self) -> Result<Box<dyn minorm_core::Connection>> {
        match_db!(self, ref driver => driver.connect().await)
    }
}
