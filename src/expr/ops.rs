use std::fmt;

use super::Matcher;

fn parse_number(actual: Option<&str>) -> Option<f64> {
	actual.and_then(|s| s.trim().parse::<f64>().ok())
}

#[derive(Debug)]
pub(super) struct IsNull;

impl fmt::Display for IsNull {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		f.write_str("null")
	}
}

impl Matcher for IsNull {
	fn matches(&self, actual: Option<&str>) -> bool {
		actual.is_none()
	}
}

#[derive(Debug)]
pub(super) struct NotNull;

impl fmt::Display for NotNull {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		f.write_str("not null")
	}
}

impl Matcher for NotNull {
	fn matches(&self, actual: Option<&str>) -> bool {
		actual.is_some()
	}
}

#[derive(Debug)]
pub(super) struct NotBlank;

impl fmt::Display for NotBlank {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		f.write_str("not blank")
	}
}

impl Matcher for NotBlank {
	fn matches(&self, actual: Option<&str>) -> bool {
		match actual {
			Some(s) => !s.trim().is_empty(),
			None => false,
		}
	}
}

#[derive(Debug)]
pub(super) struct Equals(pub String);

impl fmt::Display for Equals {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		write!(f, "eq {}", self.0)
	}
}

impl Matcher for Equals {
	fn matches(&self, actual: Option<&str>) -> bool {
		match actual {
			Some(s) => s.trim() == self.0,
			None => false,
		}
	}
}

#[derive(Debug)]
pub(super) struct NotEquals(pub String);

impl fmt::Display for NotEquals {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		write!(f, "nq {}", self.0)
	}
}

impl Matcher for NotEquals {
	fn matches(&self, actual: Option<&str>) -> bool {
		match actual {
			Some(s) => s.trim() != self.0,
			None => true,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Ordering {
	Greater,
	GreaterOrEqual,
	Less,
	LessOrEqual,
}

impl Ordering {
	fn symbol(&self) -> &'static str {
		match self {
			Self::Greater => "gt",
			Self::GreaterOrEqual => "ge",
			Self::Less => "lt",
			Self::LessOrEqual => "le",
		}
	}
}

#[derive(Debug)]
pub(super) struct Compare {
	pub ordering: Ordering,
	pub rhs: f64,
}

impl fmt::Display for Compare {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} {}", self.ordering.symbol(), self.rhs)
	}
}

impl Matcher for Compare {
	fn matches(&self, actual: Option<&str>) -> bool {
		let lhs = match parse_number(actual) {
			Some(v) => v,
			None => return false,
		};
		match self.ordering {
			Ordering::Greater => lhs > self.rhs,
			Ordering::GreaterOrEqual => lhs >= self.rhs,
			Ordering::Less => lhs < self.rhs,
			Ordering::LessOrEqual => lhs <= self.rhs,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn equals_trims_actual() {
		let m = Equals("5".into());
		assert!(m.matches(Some(" 5 ")));
		assert!(!m.matches(Some("5.0")));
		assert!(!m.matches(None));
	}

	#[test]
	fn not_equals_accepts_absent() {
		let m = NotEquals("0".into());
		assert!(m.matches(None));
		assert!(m.matches(Some("1")));
		assert!(!m.matches(Some("0")));
	}

	#[test]
	fn compare_rejects_non_numbers() {
		let m = Compare{ordering: Ordering::GreaterOrEqual, rhs: 1.0};
		assert!(!m.matches(Some("abc")));
		assert!(!m.matches(None));
		assert!(m.matches(Some("1")));
		assert!(m.matches(Some("1.5")));
		assert!(!m.matches(Some("0.5")));
	}

	#[test]
	fn display_is_canonical_pattern() {
		assert_eq!(Compare{ordering: Ordering::Less, rhs: 2.5}.to_string(), "lt 2.5");
		assert_eq!(Equals("x".into()).to_string(), "eq x");
		assert_eq!(NotBlank.to_string(), "not blank");
	}
}
