use calculator_client::{Operation, OperationError};

/// Operations executed during the current session, oldest first
#[derive(Debug, Default)]
pub struct History {
    operations: Vec<Operation>,
}

impl History {
    pub fn new() -> History {
        Default::default()
    }

    pub fn add(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// Describes every stored operation in insertion order
    pub fn list(&self) -> Result<Vec<String>, OperationError> {
        self.operations.iter().map(Operation::describe).collect()
    }

    pub fn clear(&mut self) {
        self.operations.clear();
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
