use crate::logging_driver::DriverOp;
use minorm_core::driver::Operation;
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Number of `CREATE TABLE` operations
    pub fn create_table_count(&self) -> usize {
        self.count(|op| matches!(op, Operation::CreateTable(_)))
    }

    /// Statement text of every logged operation, oldest first
    pub fn sql(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| op.sql.clone())
            .collect()
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the statement text of the oldest operation
    pub fn pop_sql(&mut self) -> Option<String> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            Some(ops.remove(0).sql)
        }
    }
}
