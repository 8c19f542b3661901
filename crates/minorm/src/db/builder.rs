use super::Db;
use crate::{driver::Connection, Result};

use minorm_core::driver::Driver;

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    /// Create missing tables on `persist`
    code_first: bool,
}

impl Builder {
    /// When enabled, `persist` creates the entity's table if it does not
    /// exist yet.
    pub fn code_first(&mut self, enabled: bool) -> &mut Self {
        self.code_first = enabled;
        self
    }

    /// Connect to the database at `url` using one of the built-in drivers.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        let driver = Connection::connect(url).await?;
        Ok(self.build(driver))
    }

    pub fn build(&mut self, driver: impl Driver) -> Db {
        Db {
            driver: Arc::new(driver),
            code_first: self.code_first,
        }
    }
}
