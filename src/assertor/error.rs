use std::error::Error;
use std::fmt;
use std::num::ParseIntError;

use crate::expr::ValueMismatch;
use crate::meter::{Meter, MeterId};

/// Failure while comparing the data of one expected meter with its actual
/// counterpart.
#[derive(Debug)]
pub enum CompareError {
	/// The expected meter has both a single value and histogram data, or
	/// neither.
	MalformedMeter(MeterId),
	/// The single value pattern could not be compiled.
	InvalidPattern{pattern: String, source: Box<dyn Error + Send + Sync>},
	HistogramSizeMismatch{expected: Meter, actual_size: usize},
	ValueMismatch(ValueMismatch),
	/// No bucket of the actual histogram holds a positive count.
	HistogramValueInvalid(MeterId),
	InvalidHistogramValue{value: String, source: ParseIntError},
}

impl From<ValueMismatch> for CompareError {
	fn from(other: ValueMismatch) -> Self {
		Self::ValueMismatch(other)
	}
}

impl fmt::Display for CompareError {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::MalformedMeter(id) => write!(
				f,
				"meter {} must have either a single value or histogram data",
				id,
			),
			Self::InvalidPattern{pattern, source} => write!(f, "invalid value pattern {:?}: {}", pattern, source),
			Self::HistogramSizeMismatch{expected, actual_size} => write!(
				f,
				"histogram of {} has {} buckets, expected {}",
				expected.meter_id, actual_size, expected.buckets().len(),
			),
			Self::ValueMismatch(e) => fmt::Display::fmt(e, f),
			Self::HistogramValueInvalid(id) => write!(f, "histogram of {} holds no positive count", id),
			Self::InvalidHistogramValue{value, source} => write!(f, "invalid histogram count {:?}: {}", value, source),
		}
	}
}

impl Error for CompareError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::InvalidPattern{source, ..} => Some(&**source),
			Self::ValueMismatch(e) => Some(e),
			Self::InvalidHistogramValue{source, ..} => Some(source),
			_ => None,
		}
	}
}

/// Failure of a meter item assertion.
#[derive(Debug)]
pub enum AssertError {
	/// No actual meter has the id of this expected meter.
	MeterNotFound(MeterId),
	/// The data of the meter with this id did not match.
	MeterAssertFailed{meter_id: MeterId, cause: CompareError},
}

impl AssertError {
	pub fn meter_id(&self) -> &MeterId {
		match self {
			Self::MeterNotFound(id) => id,
			Self::MeterAssertFailed{meter_id, ..} => meter_id,
		}
	}
}

impl fmt::Display for AssertError {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::MeterNotFound(id) => write!(f, "meter {} not found", id),
			Self::MeterAssertFailed{meter_id, cause} => write!(f, "meter {} assert failed: {}", meter_id, cause),
		}
	}
}

impl Error for AssertError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::MeterNotFound(_) => None,
			Self::MeterAssertFailed{cause, ..} => Some(cause),
		}
	}
}
