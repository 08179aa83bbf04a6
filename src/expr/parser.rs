use std::fmt;
use std::num::ParseFloatError;

use super::lexer::{Lexer, Location, Word};
use super::ops::*;
use super::Matcher;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
	MissingOperand(Location, String),
	InvalidNumber(Location, ParseFloatError),
}

impl fmt::Display for ParseError {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::MissingOperand(loc, op) => write!(f, "{}: {:?} requires an operand", loc, op),
			Self::InvalidNumber(loc, e) => write!(f, "{}: invalid number: {}", loc, e),
		}
	}
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

fn ordering_for(op: &str) -> Option<Ordering> {
	match op {
		"gt" => Some(Ordering::Greater),
		"ge" => Some(Ordering::GreaterOrEqual),
		"lt" => Some(Ordering::Less),
		"le" => Some(Ordering::LessOrEqual),
		_ => None,
	}
}

fn number(word: &Word<'_>) -> ParseResult<f64> {
	word.text.parse::<f64>().map_err(|e| ParseError::InvalidNumber(word.start, e))
}

/// Build the matcher for a pattern.
///
/// Anything which is not one of the keyword forms is matched literally
/// against the whole (trimmed) pattern.
pub fn parse(pattern: &str) -> ParseResult<Box<dyn Matcher>> {
	let words: Vec<Word<'_>> = Lexer::new(pattern).collect();
	let texts: Vec<&str> = words.iter().map(|w| w.text).collect();
	match &texts[..] {
		["null"] => return Ok(Box::new(IsNull)),
		["not", "null"] => return Ok(Box::new(NotNull)),
		["not", "blank"] => return Ok(Box::new(NotBlank)),
		["eq", operand] => return Ok(Box::new(Equals(operand.to_string()))),
		["nq", operand] => return Ok(Box::new(NotEquals(operand.to_string()))),
		[op] => if ordering_for(op).is_some() {
			let end = Location{col: words[0].start.col + op.chars().count()};
			return Err(ParseError::MissingOperand(end, op.to_string()));
		},
		[op, _] => if let Some(ordering) = ordering_for(op) {
			let rhs = number(&words[1])?;
			return Ok(Box::new(Compare{ordering, rhs}));
		},
		_ => (),
	}
	Ok(Box::new(Equals(pattern.trim().to_string())))
}
