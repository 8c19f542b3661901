mod exec_log;
pub use exec_log::ExecLog;

mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver};

pub mod models;

pub use std_util::*;

use minorm::Db;
use minorm_driver_sqlite::Sqlite;

/// A fresh in-memory SQLite database behind a [`LoggingDriver`].
pub fn setup(code_first: bool) -> (Db, ExecLog) {
    let _ = env_logger::builder().is_test(true).try_init();

    let sqlite = Sqlite::in_memory().expect("failed to open in-memory sqlite");
    let driver = LoggingDriver::new(Box::new(sqlite));
    let log = ExecLog::new(driver.ops_log_handle());

    let db = Db::builder().code_first(code_first).build(driver);
    (db, log)
}
