use nom::IResult;
use nom::{character::complete::multispace0, number::complete::double, sequence::delimited};

fn parse_operand(i: &str) -> IResult<&str, f64> {
    delimited(multispace0, double, multispace0)(i)
}

#[derive(Debug, Clone)]
pub struct ParseError(pub String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParseError: {}", self.0)
    }
}

impl std::error::Error for ParseError {}

/// Parses a single operand from a line of user input
pub fn parse_number(i: &str) -> Result<f64, ParseError> {
    match parse_operand(i) {
        Ok((remaining, v)) => {
            if !remaining.is_empty() {
                return Err(ParseError(format!("Unexpected token at \"{}\"", remaining)));
            }
            Ok(v)
        }
        Err(nom::Err::Error((i, _))) | Err(nom::Err::Failure((i, _))) => {
            Err(ParseError(format!("Unexpected token at \"{}\"", i)))
        }
        Err(_) => Err(ParseError("Parse Error".to_string())),
    }
}
