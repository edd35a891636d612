use derive_more::Display;

use calculator_client::OperationError;
use telemetry::IsErr;

#[derive(Debug, Display)]
pub enum CalculatorError {
    #[display(fmt = "{}", _0)]
    Operation(OperationError),

    #[display(fmt = "IO Error: {}", _0)]
    IOError(String),

    #[display(fmt = "Input Closed")]
    InputClosed,
}

impl std::error::Error for CalculatorError {}

impl IsErr for CalculatorError {
    fn is_err(&self) -> bool {
        matches!(self, CalculatorError::IOError(_))
    }
}

impl From<OperationError> for CalculatorError {
    fn from(e: OperationError) -> Self {
        CalculatorError::Operation(e)
    }
}

impl From<std::io::Error> for CalculatorError {
    fn from(e: std::io::Error) -> Self {
        CalculatorError::IOError(e.to_string())
    }
}
