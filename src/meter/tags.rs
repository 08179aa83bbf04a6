use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::iter::FromIterator;

use serde::{Deserialize as DeserializeTrait, Deserializer, Serialize as SerializeTrait, Serializer};
use smartstring::alias::String as SmartString;

/// Label set of a meter, kept sorted by label name.
///
/// Equality does not depend on the order in which the labels were declared.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TagSet(Vec<(SmartString, SmartString)>);

impl fmt::Debug for TagSet {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		let mut dbg = f.debug_map();
		for (ref k, ref v) in self.0.iter() {
			dbg.entry(k, v);
		}
		dbg.finish()
	}
}

impl fmt::Display for TagSet {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		for (i, (k, v)) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(",")?;
			}
			write!(f, "{}={}", k, v)?;
		}
		Ok(())
	}
}

impl TagSet {
	pub fn new() -> Self {
		Self(Vec::new())
	}

	#[inline]
	fn find<Q: ?Sized>(&self, name: &Q) -> Result<usize, usize>
		where
			SmartString: Borrow<Q>,
			Q: Ord
	{
		self.0.binary_search_by(|kv| { Ord::cmp(kv.0.borrow(), name) })
	}

	/// Set a label, returning the previous value if the label was present.
	pub fn insert<K: Into<SmartString>, V: Into<SmartString>>(&mut self, name: K, value: V) -> Option<SmartString> {
		let name = name.into();
		let mut value = value.into();
		match self.find(name.as_str()) {
			Ok(existing) => {
				std::mem::swap(&mut value, &mut self.0[existing].1);
				Some(value)
			}
			Err(target) => {
				self.0.insert(target, (name, value));
				None
			},
		}
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		match self.find(name) {
			Ok(existing) => Some(self.0[existing].1.as_str()),
			Err(_) => None,
		}
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

impl<K: Into<SmartString>, V: Into<SmartString>> FromIterator<(K, V)> for TagSet {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut result = Self::new();
		for (k, v) in iter {
			result.insert(k, v);
		}
		result
	}
}

impl<'de> DeserializeTrait<'de> for TagSet {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where D: Deserializer<'de>
	{
		let map = BTreeMap::<SmartString, SmartString>::deserialize(deserializer)?;
		Ok(map.into_iter().collect())
	}
}

impl SerializeTrait for TagSet {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where S: Serializer
	{
		serializer.collect_map(self.iter())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_insert_and_get() {
		let mut v = TagSet::new();
		v.insert("host", "db-1");
		assert_eq!(v.get("host").unwrap(), "db-1");
	}

	#[test]
	fn test_insert_returns_old_value() {
		let mut v = TagSet::new();
		v.insert("k1", "foo");
		assert_eq!(v.insert("k1", "bar").unwrap(), "foo");
		assert_eq!(v.get("k1").unwrap(), "bar");
		assert_eq!(v.len(), 1);
	}

	#[test]
	fn test_get_returns_none_on_nonexistant_key() {
		let v = TagSet::new();
		assert!(v.get("foobar").is_none());
		assert!(v.is_empty());
	}

	#[test]
	fn test_equality_ignores_insertion_order() {
		let a: TagSet = vec![("k1", "a"), ("k2", "b")].into_iter().collect();
		let b: TagSet = vec![("k2", "b"), ("k1", "a")].into_iter().collect();
		assert_eq!(a, b);
	}

	#[test]
	fn test_different_values_are_not_equal() {
		let a: TagSet = vec![("k1", "a")].into_iter().collect();
		let b: TagSet = vec![("k1", "b")].into_iter().collect();
		assert_ne!(a, b);
	}

	#[test]
	fn test_display_is_sorted() {
		let v: TagSet = vec![("zone", "eu"), ("app", "web")].into_iter().collect();
		assert_eq!(v.to_string(), "app=web,zone=eu");
	}
}
