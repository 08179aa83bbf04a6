//! Value matching expressions.
//!
//! Expected scalar values are not compared literally. They are patterns like
//! `gt 0`, `not null` or `eq 42`, compiled into a [`Matcher`] which then
//! judges the recorded value.
use std::error::Error;
use std::fmt;
use std::str::FromStr;

mod lexer;
mod ops;
mod parser;
mod result;

pub use lexer::Location;
pub use parser::ParseError;
pub use result::{MatchResult, ValueMismatch};

/// A compiled value pattern.
///
/// The `Display` output describes the expectation and ends up in the
/// `expected` field of a [`ValueMismatch`].
pub trait Matcher: fmt::Debug + fmt::Display + Send + Sync {
	fn matches(&self, actual: Option<&str>) -> bool;

	fn assert_value(&self, label: &str, actual: Option<&str>) -> MatchResult {
		if self.matches(actual) {
			Ok(())
		} else {
			Err(ValueMismatch::new(label, self.to_string(), actual))
		}
	}
}

/// Source of matchers.
///
/// Implement this to plug a different pattern syntax into the meter
/// assertions.
pub trait ValueMatcher {
	fn parse(&self, pattern: &str) -> Result<Box<dyn Matcher>, Box<dyn Error + Send + Sync>>;
}

/// The default pattern syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionParser;

impl ValueMatcher for ExpressionParser {
	fn parse(&self, pattern: &str) -> Result<Box<dyn Matcher>, Box<dyn Error + Send + Sync>> {
		Ok(parser::parse(pattern)?)
	}
}

impl<T: ValueMatcher + ?Sized> ValueMatcher for &T {
	fn parse(&self, pattern: &str) -> Result<Box<dyn Matcher>, Box<dyn Error + Send + Sync>> {
		(**self).parse(pattern)
	}
}

impl FromStr for Box<dyn Matcher> {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parser::parse(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_str() {
		let m: Box<dyn Matcher> = "ge 3".parse().unwrap();
		assert!(m.matches(Some("3")));
		assert_eq!(m.to_string(), "ge 3");
	}

	#[test]
	fn assert_value_reports_mismatch() {
		let m: Box<dyn Matcher> = "gt 10".parse().unwrap();
		match m.assert_value("single value", Some("3")) {
			Err(ValueMismatch{label, expected, actual}) => {
				assert_eq!(label, "single value");
				assert_eq!(expected, "gt 10");
				assert_eq!(actual.as_deref(), Some("3"));
			}
			other => panic!("unexpected result: {:?}", other),
		}
	}

	#[test]
	fn assert_value_accepts_match() {
		let m: Box<dyn Matcher> = "1".parse().unwrap();
		assert!(m.assert_value("single value", Some("1")).is_ok());
	}

	#[test]
	fn parser_rejects_bad_operand() {
		let err = ExpressionParser.parse("le x").unwrap_err();
		assert!(err.to_string().contains("invalid number"));
	}
}
