use std::fmt;

/// A value did not satisfy its expected pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueMismatch {
	/// What was being compared, e.g. "single value"
	pub label: String,
	/// Description of the expectation
	pub expected: String,
	/// The offending value; `None` if absent
	pub actual: Option<String>,
}

impl ValueMismatch {
	pub fn new<L: Into<String>, E: Into<String>>(label: L, expected: E, actual: Option<&str>) -> Self {
		Self{
			label: label.into(),
			expected: expected.into(),
			actual: actual.map(|s| s.to_string()),
		}
	}
}

impl fmt::Display for ValueMismatch {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		match self.actual.as_ref() {
			Some(actual) => write!(f, "{} mismatch: expected {:?}, actual {:?}", self.label, self.expected, actual),
			None => write!(f, "{} mismatch: expected {:?}, actual value is absent", self.label, self.expected),
		}
	}
}

impl std::error::Error for ValueMismatch {}

pub type MatchResult = Result<(), ValueMismatch>;
