use super::Db;
use crate::Result;

use serde::Deserialize;

/// Connection settings, for file or environment driven setup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Database URL, such as `sqlite::memory:` or `sqlite:app.db?timeout=500`
    pub url: String,

    /// Create missing tables on `persist`
    #[serde(default)]
    pub code_first: bool,
}

impl Config {
    pub fn new(url: impl Into<String>) -> Config {
        Config {
            url: url.into(),
            code_first: false,
        }
    }

    pub async fn connect(&self) -> Result<Db> {
        Db::builder()
            .code_first(self.code_first)
            .connect(&self.url)
            .await
    }
}
