use std::io::{BufRead, Write};

use log::{debug, info};

use calculator_client::{format_value, Operation};
use telemetry::Measure;

use crate::calculator::Calculator;
use crate::config::UiConfig;
use crate::error::CalculatorError;
use crate::input::parse_number;
use crate::menu::{self, MenuOption};

lazy_static! {
    static ref EXECUTE_MEASURE: Measure = Measure::new("session", "execute");
}

const FIRST: &str = "Enter the first number: ";
const SECOND: &str = "Enter the second number: ";

enum Flow {
    Continue,
    Exit,
}

/// Interactive menu loop driving a [`Calculator`] over a line-based terminal
pub struct Session<'a, R, W> {
    calculator: Calculator,
    ui: &'a UiConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(ui: &'a UiConfig, input: R, output: W) -> Session<'a, R, W> {
        Session {
            calculator: Calculator::new(),
            ui,
            input,
            output,
        }
    }

    /// Runs until the user exits or the input is closed
    pub fn run(&mut self) -> Result<(), CalculatorError> {
        info!("Calculator session started");
        loop {
            write!(self.output, "{}", menu::render(self.ui.banner_width))?;
            write!(self.output, "Choose an option: ")?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };

            let option = match line.trim().parse::<MenuOption>() {
                Ok(option) => option,
                Err(_) => {
                    debug!("Unknown menu option {:?}", line.trim());
                    writeln!(self.output, "\nInvalid option!")?;
                    continue;
                }
            };

            match self.dispatch(option) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(CalculatorError::InputClosed) => break,
                Err(CalculatorError::Operation(e)) => writeln!(self.output, "\nError: {}", e)?,
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "Closing calculator...")?;
        self.output.flush()?;
        info!(
            "Calculator session ended with {} history entries",
            self.calculator.history_len()
        );
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<Flow, CalculatorError> {
        let operation = match option {
            MenuOption::Sum => Operation::Sum(self.read_number(FIRST)?, self.read_number(SECOND)?),
            MenuOption::Difference => {
                Operation::Difference(self.read_number(FIRST)?, self.read_number(SECOND)?)
            }
            MenuOption::Product => {
                Operation::Product(self.read_number(FIRST)?, self.read_number(SECOND)?)
            }
            MenuOption::Quotient => Operation::Quotient(
                self.read_number("Enter the dividend: ")?,
                self.read_number("Enter the divisor: ")?,
            ),
            MenuOption::Power => Operation::Power(
                self.read_number("Enter the base: ")?,
                self.read_number("Enter the exponent: ")?,
            ),
            MenuOption::SquareRoot => Operation::SquareRoot(self.read_number("Enter the number: ")?),
            MenuOption::ShowHistory => {
                self.print_history()?;
                return Ok(Flow::Continue);
            }
            MenuOption::ClearHistory => {
                self.calculator.clear_history();
                writeln!(self.output, "\nHistory cleared!")?;
                return Ok(Flow::Continue);
            }
            MenuOption::LastResult => {
                let last_result = format_value(self.calculator.last_result());
                writeln!(self.output, "\nLast result: {}", last_result)?;
                return Ok(Flow::Continue);
            }
            MenuOption::Exit => return Ok(Flow::Exit),
        };

        let calculator = &mut self.calculator;
        let result = EXECUTE_MEASURE.stats(|| {
            calculator
                .execute(operation)
                .map_err(CalculatorError::from)
        })?;

        writeln!(self.output, "\nResult: {}", format_value(result))?;
        Ok(Flow::Continue)
    }

    fn print_history(&mut self) -> Result<(), CalculatorError> {
        let entries = self.calculator.history()?;

        writeln!(self.output, "\n--- HISTORY ---")?;
        if entries.is_empty() {
            writeln!(self.output, "Empty history")?;
        }
        for (i, entry) in entries.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, entry)?;
        }
        Ok(())
    }

    /// Prompts until the user enters a valid number
    fn read_number(&mut self, prompt: &str) -> Result<f64, CalculatorError> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let line = self.read_line()?.ok_or(CalculatorError::InputClosed)?;
            match parse_number(&line) {
                Ok(v) => return Ok(v),
                Err(e) => {
                    debug!("Rejected operand: {}", e);
                    writeln!(self.output, "Error: Enter a valid number!")?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, CalculatorError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(script: &str) -> Result<String, Box<dyn std::error::Error>> {
        let ui = UiConfig::default();
        let mut output = Vec::new();
        Session::new(&ui, Cursor::new(script.as_bytes()), &mut output).run()?;
        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn test_sum_and_history() -> Result<(), Box<dyn std::error::Error>> {
        let output = run("1\n2\n3\n7\n9\n0\n")?;

        assert!(output.contains("Enter the first number: Enter the second number: "));
        assert!(output.contains("\nResult: 5.00\n"));
        assert!(output.contains("\n--- HISTORY ---\n1. 2.00 + 3.00 = 5.00\n"));
        assert!(output.contains("\nLast result: 5.00\n"));
        assert!(output.ends_with("Closing calculator...\n"));
        Ok(())
    }

    #[test]
    fn test_operation_error() -> Result<(), Box<dyn std::error::Error>> {
        let output = run("4\n5\n0\n6\n-4\n7\n9\n0\n")?;

        assert!(output.contains("\nError: Division by zero is not allowed\n"));
        assert!(output.contains("\nError: Square root of a negative number\n"));
        assert!(output.contains("\n--- HISTORY ---\nEmpty history\n"));
        assert!(output.contains("\nLast result: 0.00\n"));
        assert!(!output.contains("Result: "));
        Ok(())
    }

    #[test]
    fn test_invalid_input() -> Result<(), Box<dyn std::error::Error>> {
        let output = run("x\n5\ntwo\n2\n10\n0\n")?;

        assert!(output.contains("\nInvalid option!\n"));
        assert!(output.contains("Enter the base: Error: Enter a valid number!\nEnter the base: "));
        assert!(output.contains("\nResult: 1024.00\n"));
        Ok(())
    }

    #[test]
    fn test_clear_history() -> Result<(), Box<dyn std::error::Error>> {
        let output = run("6\n16\n3\n1.5\n2\n8\n7\n9\n")?;

        assert!(output.contains("\nResult: 4.00\n"));
        assert!(output.contains("\nResult: 3.00\n"));
        assert!(output.contains("\nHistory cleared!\n"));
        assert!(output.contains("\n--- HISTORY ---\nEmpty history\n"));
        assert!(output.contains("\nLast result: 3.00\n"));
        Ok(())
    }

    #[test]
    fn test_overflow() -> Result<(), Box<dyn std::error::Error>> {
        let output = run("5\n10\n400\n7\n9\n0\n")?;

        assert!(output.contains("\nResult: Infinity\n"));
        assert!(output.contains("\n1. 10.00 ^ 400.00 = Infinity\n"));
        assert!(output.contains("\nLast result: Infinity\n"));
        Ok(())
    }

    #[test]
    fn test_padded_option() -> Result<(), Box<dyn std::error::Error>> {
        let output = run(" 1 \n2\n2\n\t0\n")?;

        assert!(output.contains("\nResult: 4.00\n"));
        assert!(!output.contains("Invalid option!"));
        assert!(output.ends_with("Closing calculator...\n"));
        Ok(())
    }

    #[test]
    fn test_input_closed() -> Result<(), Box<dyn std::error::Error>> {
        let output = run("2\n7")?;

        assert!(output.ends_with("Enter the second number: Closing calculator...\n"));
        assert_eq!(run("")?.matches("CALCULATOR").count(), 1);
        Ok(())
    }

    #[test]
    fn test_banner_width() -> Result<(), Box<dyn std::error::Error>> {
        let ui = UiConfig { banner_width: 5 };
        let mut output = Vec::new();
        Session::new(&ui, Cursor::new("0\n"), &mut output).run()?;

        let output = String::from_utf8(output)?;
        assert!(output.starts_with("\n=====\nCALCULATOR\n=====\n1. Sum\n"));
        Ok(())
    }
}
