//! Assertions of expected meters against recorded ones.
use log::{debug, trace};

use crate::expr::{ExpressionParser, ValueMatcher, ValueMismatch};
use crate::meter::{Meter, MeterItem, Payload};

mod error;

pub use error::{AssertError, CompareError};

pub type AssertResult<T> = Result<T, AssertError>;
pub type CompareResult<T> = Result<T, CompareError>;

/// Find the meter of `actual` with the same id as `expected`.
///
/// If several meters share the id, the first one wins.
pub fn find_meter<'x>(actual: &'x MeterItem, expected: &Meter) -> Option<&'x Meter> {
	actual.iter().find(|m| m.meter_id == expected.meter_id)
}

/// Compares meter items, using `M` to interpret expected single values.
#[derive(Debug, Clone, Default)]
pub struct MeterAssert<M> {
	matcher: M,
}

impl<M: ValueMatcher> MeterAssert<M> {
	pub fn new(matcher: M) -> Self {
		Self{matcher}
	}

	/// Check that every meter of `expected` is present in `actual` with
	/// matching data.
	///
	/// Stops at the first failing meter. An item without meters asserts
	/// nothing.
	pub fn assert_equals(&self, expected: &MeterItem, actual: &MeterItem) -> AssertResult<()> {
		if expected.is_empty() {
			trace!("no meters expected, nothing to check");
			return Ok(());
		}

		for meter in expected.iter() {
			let actual_meter = match find_meter(actual, meter) {
				Some(m) => m,
				None => {
					debug!("meter {} not found among {} actual meters", meter.meter_id, actual.meters.len());
					return Err(AssertError::MeterNotFound(meter.meter_id.clone()));
				},
			};

			trace!("checking meter {}", meter.meter_id);
			if let Err(cause) = self.meter_data_equals(meter, actual_meter) {
				debug!("meter {} did not match: {}", meter.meter_id, cause);
				return Err(AssertError::MeterAssertFailed{
					meter_id: meter.meter_id.clone(),
					cause,
				});
			}
		}
		Ok(())
	}

	/// Compare the data of one expected meter with its actual counterpart.
	pub fn meter_data_equals(&self, expected: &Meter, actual: &Meter) -> CompareResult<()> {
		match expected.payload() {
			Some(Payload::Scalar(pattern)) => self.single_value_equals(pattern, actual),
			Some(Payload::Histogram{buckets, ..}) => histogram_equals(expected, buckets, actual),
			None => Err(CompareError::MalformedMeter(expected.meter_id.clone())),
		}
	}

	fn single_value_equals(&self, pattern: &str, actual: &Meter) -> CompareResult<()> {
		let matcher = self.matcher.parse(pattern).map_err(|source| CompareError::InvalidPattern{
			pattern: pattern.to_string(),
			source,
		})?;
		matcher.assert_value("single value", actual.single_value.as_deref())?;
		Ok(())
	}
}

fn histogram_equals(expected: &Meter, buckets: &[String], actual: &Meter) -> CompareResult<()> {
	let actual_buckets = actual.buckets();
	if buckets.len() != actual_buckets.len() {
		return Err(CompareError::HistogramSizeMismatch{
			expected: expected.clone(),
			actual_size: actual_buckets.len(),
		});
	}

	for (expected_bucket, actual_bucket) in buckets.iter().zip(actual_buckets.iter()) {
		if expected_bucket != actual_bucket {
			return Err(ValueMismatch::new("histogram bucket", expected_bucket.as_str(), Some(actual_bucket.as_str())).into());
		}
	}

	// only the recorded counts are checked, and only for having data at all
	for value in actual.values() {
		let count = value.parse::<i64>().map_err(|source| CompareError::InvalidHistogramValue{
			value: value.clone(),
			source,
		})?;
		if count > 0 {
			return Ok(());
		}
	}
	Err(CompareError::HistogramValueInvalid(actual.meter_id.clone()))
}

/// Assert `expected` against `actual` with the default pattern syntax.
pub fn assert_equals(expected: &MeterItem, actual: &MeterItem) -> AssertResult<()> {
	MeterAssert::new(ExpressionParser).assert_equals(expected, actual)
}
