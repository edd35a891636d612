use log::{debug, warn};

use calculator_client::{Operation, OperationError};

use crate::history::History;

/// Executes operations, recording each success and its result
///
/// A failed operation leaves both the history and the last result untouched
#[derive(Debug, Default)]
pub struct Calculator {
    history: History,
    last_result: f64,
}

impl Calculator {
    pub fn new() -> Calculator {
        Default::default()
    }

    pub fn execute(&mut self, operation: Operation) -> Result<f64, OperationError> {
        let result = operation.compute().map_err(|e| {
            warn!("Rejected {:?}: {}", operation, e);
            e
        })?;

        self.history.add(operation);
        self.last_result = result;

        debug!("Executed {:?} = {}", operation, result);
        Ok(result)
    }

    pub fn history(&self) -> Result<Vec<String>, OperationError> {
        self.history.list()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn clear_history(&mut self) {
        if self.history.is_empty() {
            debug!("History already empty");
            return;
        }
        debug!("Clearing {} history entries", self.history.len());
        self.history.clear();
    }

    pub fn last_result(&self) -> f64 {
        self.last_result
    }
}
