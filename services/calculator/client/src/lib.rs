pub use error::OperationError;

mod error;

/// Formats a value to two decimal places, spelling out infinities
pub fn format_value(value: f64) -> String {
    if value.is_infinite() {
        let sign = if value < 0. { "-" } else { "" };
        return format!("{}Infinity", sign);
    }
    format!("{:.2}", value)
}

/// A single arithmetic request with its operands fixed at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Sum(f64, f64),
    Difference(f64, f64),
    Product(f64, f64),
    Quotient(f64, f64),
    Power(f64, f64),
    SquareRoot(f64),
}

impl Operation {
    pub fn compute(&self) -> Result<f64, OperationError> {
        match *self {
            Self::Sum(a, b) => Ok(a + b),
            Self::Difference(a, b) => Ok(a - b),
            Self::Product(a, b) => Ok(a * b),
            Self::Quotient(_, b) if b == 0.0 => Err(OperationError::DivisionByZero),
            Self::Quotient(a, b) => Ok(a / b),
            Self::Power(a, b) => Ok(a.powf(b)),
            Self::SquareRoot(a) if a < 0.0 => Err(OperationError::NegativeRadicand),
            Self::SquareRoot(a) => Ok(a.sqrt()),
        }
    }

    /// Renders `a <symbol> b = result`, or `√a = result` for a square root
    ///
    /// Recomputes the result, so an invalid operation yields the same error as `compute`
    pub fn describe(&self) -> Result<String, OperationError> {
        let result = self.compute()?;
        Ok(match *self {
            Self::SquareRoot(a) => format!(
                "{}{} = {}",
                self.symbol(),
                format_value(a),
                format_value(result)
            ),
            _ => {
                let (a, b) = self.operands();
                format!(
                    "{} {} {} = {}",
                    format_value(a),
                    self.symbol(),
                    format_value(b),
                    format_value(result)
                )
            }
        })
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Sum(..) => "+",
            Self::Difference(..) => "-",
            Self::Product(..) => "×",
            Self::Quotient(..) => "÷",
            Self::Power(..) => "^",
            Self::SquareRoot(_) => "√",
        }
    }

    pub fn operands(&self) -> (f64, f64) {
        match *self {
            Self::Sum(a, b)
            | Self::Difference(a, b)
            | Self::Product(a, b)
            | Self::Quotient(a, b)
            | Self::Power(a, b) => (a, b),
            Self::SquareRoot(a) => (a, 0.0),
        }
    }
}
