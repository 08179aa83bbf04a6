use std::fmt;

use smartstring::alias::{String as SmartString};

use serde_derive::{Deserialize, Serialize};

mod tags;

pub use tags::TagSet;

/// Identity of a meter.
///
/// Only ever compared for equality; two ids are equal when name and all tags
/// are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct MeterId {
	/// Metric name, e.g. "thread_pool_active"
	pub name: SmartString,
	/// Labels attached to the metric
	#[serde(default)]
	pub tags: TagSet,
}

impl MeterId {
	pub fn new<T: Into<SmartString>>(name: T) -> Self {
		Self{
			name: name.into(),
			tags: TagSet::new(),
		}
	}

	pub fn with_tag<K: Into<SmartString>, V: Into<SmartString>>(mut self, name: K, value: V) -> Self {
		self.tags.insert(name, value);
		self
	}
}

impl fmt::Display for MeterId {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}{{{}}}", self.name, self.tags)
	}
}

/// A single meter sample, either a scalar or a histogram.
///
/// On the expected side, `single_value` holds a match expression; on the
/// actual side it holds the recorded value.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Meter {
	pub meter_id: MeterId,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub single_value: Option<String>,
	/// Bucket boundaries, positionally aligned with `histogram_values`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub histogram_buckets: Option<Vec<String>>,
	/// Per-bucket counts
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub histogram_values: Option<Vec<String>>,
}

/// Checked view on the payload of a [`Meter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Payload<'x> {
	Scalar(&'x str),
	Histogram{buckets: &'x [String], values: &'x [String]},
}

impl Meter {
	pub fn single<I: Into<MeterId>, T: Into<String>>(meter_id: I, value: T) -> Self {
		Self{
			meter_id: meter_id.into(),
			single_value: Some(value.into()),
			histogram_buckets: None,
			histogram_values: None,
		}
	}

	pub fn histogram<I, B, V>(meter_id: I, buckets: B, values: V) -> Self
		where
			I: Into<MeterId>,
			B: IntoIterator,
			B::Item: Into<String>,
			V: IntoIterator,
			V::Item: Into<String>,
	{
		Self{
			meter_id: meter_id.into(),
			single_value: None,
			histogram_buckets: Some(buckets.into_iter().map(Into::into).collect()),
			histogram_values: Some(values.into_iter().map(Into::into).collect()),
		}
	}

	/// Return the payload, or `None` if the meter carries both a single value
	/// and histogram data, or neither.
	pub fn payload(&self) -> Option<Payload<'_>> {
		match (self.single_value.as_ref(), self.histogram_buckets.as_ref(), self.histogram_values.as_ref()) {
			(Some(v), None, None) => Some(Payload::Scalar(v)),
			(None, Some(buckets), values) => Some(Payload::Histogram{
				buckets,
				values: values.map(|v| &v[..]).unwrap_or(&[]),
			}),
			(None, None, Some(values)) => Some(Payload::Histogram{
				buckets: &[],
				values,
			}),
			_ => None,
		}
	}

	/// Histogram bucket labels; empty for scalar meters.
	pub fn buckets(&self) -> &[String] {
		self.histogram_buckets.as_ref().map(|v| &v[..]).unwrap_or(&[])
	}

	/// Histogram counts; empty for scalar meters.
	pub fn values(&self) -> &[String] {
		self.histogram_values.as_ref().map(|v| &v[..]).unwrap_or(&[])
	}
}

impl From<&str> for MeterId {
	fn from(other: &str) -> Self {
		Self::new(other)
	}
}

/// All meters of one observation snapshot.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct MeterItem {
	#[serde(default)]
	pub meters: Vec<Meter>,
}

impl MeterItem {
	pub fn new(meters: Vec<Meter>) -> Self {
		Self{meters}
	}

	pub fn is_empty(&self) -> bool {
		self.meters.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Meter> {
		self.meters.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn meter_id_display() {
		let id = MeterId::new("jvm_threads").with_tag("state", "runnable").with_tag("app", "x");
		assert_eq!(id.to_string(), "jvm_threads{app=x,state=runnable}");
	}

	#[test]
	fn meter_id_equality_is_by_value() {
		let a = MeterId::new("cpu").with_tag("a", "1").with_tag("b", "2");
		let b = MeterId::new("cpu").with_tag("b", "2").with_tag("a", "1");
		assert_eq!(a, b);
		assert_ne!(a, MeterId::new("cpu"));
	}

	#[test]
	fn scalar_payload() {
		let m = Meter::single("cpu", "gt 0");
		assert_eq!(m.payload(), Some(Payload::Scalar("gt 0")));
	}

	#[test]
	fn histogram_payload() {
		let m = Meter::histogram("latency", vec!["0", "10"], vec!["1", "2"]);
		match m.payload() {
			Some(Payload::Histogram{buckets, values}) => {
				assert_eq!(buckets, &["0".to_string(), "10".to_string()][..]);
				assert_eq!(values.len(), 2);
			}
			other => panic!("unexpected payload: {:?}", other),
		}
	}

	#[test]
	fn histogram_without_values_has_empty_values() {
		let mut m = Meter::histogram("latency", vec!["0"], Vec::<String>::new());
		m.histogram_values = None;
		match m.payload() {
			Some(Payload::Histogram{buckets, values}) => {
				assert_eq!(buckets.len(), 1);
				assert!(values.is_empty());
			}
			other => panic!("unexpected payload: {:?}", other),
		}
	}

	#[test]
	fn payload_rejects_both() {
		let mut m = Meter::single("cpu", "1");
		m.histogram_buckets = Some(vec!["0".into()]);
		assert_eq!(m.payload(), None);
	}

	#[test]
	fn payload_rejects_neither() {
		let mut m = Meter::single("cpu", "1");
		m.single_value = None;
		assert_eq!(m.payload(), None);
	}

	#[test]
	fn deserialize_from_toml() {
		let src = r#"
[[meters]]
single_value = "gt 0"
[meters.meter_id]
name = "cpu"
[meters.meter_id.tags]
host = "db-1"

[[meters]]
histogram_buckets = ["0", "10"]
histogram_values = ["0", "3"]
[meters.meter_id]
name = "latency"
"#;
		let item: MeterItem = toml::from_str(src).unwrap();
		assert_eq!(item.meters.len(), 2);
		assert_eq!(item.meters[0].meter_id, MeterId::new("cpu").with_tag("host", "db-1"));
		assert_eq!(item.meters[0].single_value.as_deref(), Some("gt 0"));
		assert_eq!(item.meters[1].meter_id, MeterId::new("latency"));
		assert_eq!(item.meters[1].buckets().len(), 2);
	}

	#[test]
	fn deserialize_missing_meters() {
		let item: MeterItem = toml::from_str("").unwrap();
		assert!(item.is_empty());
	}
}
