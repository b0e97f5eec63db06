/*!
# Parsley: Parsed Results.
*/

use crate::{
	ParsleyError,
	Value,
};
use std::borrow::Cow;
use std::collections::btree_map;
use std::collections::BTreeMap;



#[derive(Debug, Clone, Default, PartialEq)]
/// # Parsed Arguments.
///
/// `ArgMap` is what [`Options::parse`](crate::Options::parse) hands back: a
/// mapping of named flags, the ordered positionals that preceded any `--`,
/// and the verbatim tail that followed it.
///
/// The accessors do no parsing of their own; they just look keys up — trying
/// each name in the order given, which doubles as ad-hoc alias resolution —
/// and read the stored [`Value`] leniently. The `want_*` getters insist the
/// key be present (and legible); the `*_or` getters fall back quietly.
///
/// ## Examples
///
/// ```
/// let args = parsley::parse(["--jobs", "4", "-v"]);
///
/// assert_eq!(args.int_or(&["jobs", "j"], 1), 4);
/// assert!(args.bool_or(&["verbose", "v"], false));
/// assert!(args.want_int(&["jobs"]).is_ok());
/// assert!(args.want_int(&["threads"]).is_err());
/// ```
pub struct ArgMap {
	/// # Named Flags.
	map: BTreeMap<String, Value>,

	/// # Pre-Separator Positionals.
	rest: Vec<Value>,

	/// # Post-Separator Tail.
	unparsed: Vec<String>,
}

/// ## Construction.
impl ArgMap {
	/// # New.
	pub(crate) const fn new(
		map: BTreeMap<String, Value>,
		rest: Vec<Value>,
		unparsed: Vec<String>,
	) -> Self {
		Self { map, rest, unparsed }
	}
}

/// ## Lookups.
impl ArgMap {
	#[must_use]
	/// # Value For a Key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.map.get(key)
	}

	#[must_use]
	/// # Value For the First Present Key.
	///
	/// Try each name in order and return the first hit, if any.
	pub fn find(&self, keys: &[&str]) -> Option<&Value> {
		keys.iter().find_map(|k| self.map.get(*k))
	}

	#[must_use]
	/// # Is a Key Set?
	pub fn contains(&self, key: &str) -> bool {
		self.map.contains_key(key)
	}

	#[must_use]
	/// # Number of Named Flags.
	pub fn len(&self) -> usize { self.map.len() }

	#[must_use]
	/// # No Named Flags?
	pub fn is_empty(&self) -> bool { self.map.is_empty() }

	/// # Iterate the Named Flags.
	pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
		self.map.iter()
	}

	#[must_use]
	/// # Positionals.
	///
	/// The tokens that fit no flag shape (and weren't claimed as values),
	/// in their original order, numeric-looking ones coerced.
	pub fn rest(&self) -> &[Value] { &self.rest }

	#[must_use]
	/// # Unparsed Tail.
	///
	/// Everything after the first standalone `--`, exactly as given. If you
	/// want these classified, feed them back through
	/// [`parse`](crate::parse).
	pub fn unparsed(&self) -> &[String] { &self.unparsed }

	#[must_use]
	/// # Consume Into the Raw Mapping.
	///
	/// The positionals and tail are dropped; grab them first if you need
	/// them.
	pub fn take(self) -> BTreeMap<String, Value> { self.map }
}

/// ## Required Getters.
impl ArgMap {
	/// # Boolean, Loudly.
	///
	/// ## Errors
	///
	/// Returns an error if none of the keys are present, or the stored value
	/// has no boolean reading.
	pub fn want_bool(&self, keys: &[&str]) -> Result<bool, ParsleyError> {
		let (key, value) = self.pick(keys)?;
		value.as_bool().ok_or_else(|| ParsleyError::WrongType(key.to_owned()))
	}

	/// # Integer, Loudly.
	///
	/// ## Errors
	///
	/// Returns an error if none of the keys are present, or the stored value
	/// has no integer reading.
	pub fn want_int(&self, keys: &[&str]) -> Result<i64, ParsleyError> {
		let (key, value) = self.pick(keys)?;
		value.as_int().ok_or_else(|| ParsleyError::WrongType(key.to_owned()))
	}

	/// # Float, Loudly.
	///
	/// ## Errors
	///
	/// Returns an error if none of the keys are present, or the stored value
	/// has no float reading.
	pub fn want_float(&self, keys: &[&str]) -> Result<f64, ParsleyError> {
		let (key, value) = self.pick(keys)?;
		value.as_float().ok_or_else(|| ParsleyError::WrongType(key.to_owned()))
	}

	/// # String, Loudly.
	///
	/// Any value stringifies, so presence is the only requirement.
	///
	/// ## Errors
	///
	/// Returns an error if none of the keys are present.
	pub fn want_str(&self, keys: &[&str]) -> Result<Cow<'_, str>, ParsleyError> {
		let (_, value) = self.pick(keys)?;
		Ok(value.stringify())
	}

	/// # First Hit.
	fn pick<'a, 'k>(&'a self, keys: &'k [&'k str])
	-> Result<(&'k str, &'a Value), ParsleyError> {
		for &key in keys {
			if let Some(v) = self.map.get(key) { return Ok((key, v)); }
		}
		Err(ParsleyError::Missing(keys.join(", ")))
	}
}

/// ## Fallback Getters.
impl ArgMap {
	#[must_use]
	/// # Boolean, Quietly.
	pub fn bool_or(&self, keys: &[&str], fallback: bool) -> bool {
		self.find(keys).and_then(Value::as_bool).unwrap_or(fallback)
	}

	#[must_use]
	/// # Integer, Quietly.
	pub fn int_or(&self, keys: &[&str], fallback: i64) -> i64 {
		self.find(keys).and_then(Value::as_int).unwrap_or(fallback)
	}

	#[must_use]
	/// # Float, Quietly.
	pub fn float_or(&self, keys: &[&str], fallback: f64) -> f64 {
		self.find(keys).and_then(Value::as_float).unwrap_or(fallback)
	}

	#[must_use]
	/// # String, Quietly.
	pub fn str_or<'a>(&'a self, keys: &[&str], fallback: &'a str) -> Cow<'a, str> {
		self.find(keys).map_or(Cow::Borrowed(fallback), Value::stringify)
	}
}

impl<'a> IntoIterator for &'a ArgMap {
	type Item = (&'a String, &'a Value);
	type IntoIter = btree_map::Iter<'a, String, Value>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter { self.iter() }
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::Options;

	/// # Helper: A Representative Map.
	fn demo() -> ArgMap {
		Options::new().parse([
			"--zoom=2", "--name", "bird", "--quiet", "--ratio", "1.5",
			"--hits", "0", "pos", "--", "tail",
		])
	}

	#[test]
	fn t_lookups() {
		let args = demo();
		assert_eq!(args.get("zoom"), Some(&Value::Int(2)));
		assert_eq!(args.get("nope"), None);
		assert_eq!(args.find(&["nope", "zoom"]), Some(&Value::Int(2)));
		assert!(args.contains("quiet"));
		assert!(! args.contains("loud"));
		assert_eq!(args.len(), 5);
		assert!(! args.is_empty());
		assert_eq!(args.rest(), &[Value::Str("pos".to_owned())]);
		assert_eq!(args.unparsed(), ["tail"]);

		let map = args.take();
		assert_eq!(map.get("name"), Some(&Value::Str("bird".to_owned())));
	}

	#[test]
	fn t_want() {
		let args = demo();
		assert_eq!(args.want_int(&["zoom", "zm", "z"]), Ok(2));
		assert_eq!(args.want_int(&["z", "zoom"]), Ok(2));
		assert_eq!(args.want_float(&["ratio"]), Ok(1.5));
		assert_eq!(args.want_float(&["zoom"]), Ok(2.0));
		assert_eq!(args.want_bool(&["quiet"]), Ok(true));
		assert_eq!(args.want_str(&["name"]).as_deref(), Ok("bird"));

		// Stringification covers the non-string variants.
		assert_eq!(args.want_str(&["quiet"]).as_deref(), Ok("true"));
		assert_eq!(args.want_str(&["zoom"]).as_deref(), Ok("2"));

		// Zero reads false; command lines are loose like that.
		assert_eq!(args.want_bool(&["hits"]), Ok(false));

		// Absence is loud…
		assert_eq!(
			args.want_int(&["threads", "t"]),
			Err(ParsleyError::Missing("threads, t".to_owned())),
		);

		// …and so is illegibility.
		assert_eq!(
			args.want_int(&["name"]),
			Err(ParsleyError::WrongType("name".to_owned())),
		);
	}

	#[test]
	fn t_fallbacks() {
		let args = demo();
		assert_eq!(args.int_or(&["zoom"], 100), 2);
		assert_eq!(args.int_or(&["threads"], 100), 100);
		assert!(args.bool_or(&["quiet", "q"], false));
		assert!(! args.bool_or(&["loud"], false));
		assert_eq!(args.float_or(&["ratio"], 2.0), 1.5);
		assert_eq!(args.str_or(&["name"], "anon"), "bird");
		assert_eq!(args.str_or(&["alias"], "anon"), "anon");

		// An unreadable value falls back too.
		assert_eq!(args.int_or(&["name"], 7), 7);
	}
}
