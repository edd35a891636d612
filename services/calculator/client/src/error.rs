use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    #[display(fmt = "Division by zero is not allowed")]
    DivisionByZero,

    #[display(fmt = "Square root of a negative number")]
    NegativeRadicand,
}

impl std::error::Error for OperationError {}
