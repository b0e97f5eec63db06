/*!
# Parsley: Values
*/

use std::borrow::Cow;
use std::fmt;



#[derive(Debug, Clone, PartialEq)]
/// # A Parsed Value.
///
/// Every entry in an [`ArgMap`](crate::ArgMap) — and every positional — is
/// one of these four. The parser only ever produces booleans directly (bare
/// flags, negations) and strings, with [`Value::coerce`] upgrading
/// numeric-looking strings to the appropriate number on the way in.
///
/// The `as_*` readings are deliberately lenient, because command lines are:
/// `0` and `"false"` read as `false`, numbers interconvert, and anything can
/// be [stringified](Value::stringify).
pub enum Value {
	/// A boolean.
	Bool(bool),
	/// An integer.
	Int(i64),
	/// A float.
	Float(f64),
	/// A string.
	Str(String),
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(v) => write!(f, "{v}"),
			Self::Int(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
			Self::Str(v) => f.write_str(v),
		}
	}
}

impl From<bool> for Value {
	#[inline]
	fn from(src: bool) -> Self { Self::Bool(src) }
}

impl From<i64> for Value {
	#[inline]
	fn from(src: i64) -> Self { Self::Int(src) }
}

impl From<i32> for Value {
	#[inline]
	fn from(src: i32) -> Self { Self::Int(i64::from(src)) }
}

impl From<f64> for Value {
	#[inline]
	fn from(src: f64) -> Self { Self::Float(src) }
}

impl From<&str> for Value {
	#[inline]
	fn from(src: &str) -> Self { Self::Str(src.to_owned()) }
}

impl From<String> for Value {
	#[inline]
	fn from(src: String) -> Self { Self::Str(src) }
}

/// ## Coercion.
impl Value {
	#[must_use]
	/// # Coerce a Raw String.
	///
	/// Numeric-looking strings become numbers; everything else stays a
	/// string.
	pub(crate) fn coerce(raw: String) -> Self {
		match Self::numeric(&raw) {
			Some(v) => v,
			None => Self::Str(raw),
		}
	}

	/// # Numeric Reading.
	///
	/// Integral numerals read as [`Value::Int`]; numerals with a fraction
	/// and/or exponent — or integral ones too big for an `i64` — read as
	/// [`Value::Float`]; anything else is `None`.
	pub(crate) fn numeric(raw: &str) -> Option<Self> {
		let bytes = raw.as_bytes();
		if is_integer(bytes) {
			if let Ok(n) = raw.parse::<i64>() { return Some(Self::Int(n)); }
		}
		if is_number(bytes) {
			if let Ok(n) = raw.parse::<f64>() { return Some(Self::Float(n)); }
		}
		None
	}
}

/// ## Readings.
impl Value {
	#[must_use]
	/// # As a Boolean.
	///
	/// `Bool` reads as itself, numbers read `true` when non-zero, and the
	/// literal strings `"true"`/`"false"` read as their namesakes. Anything
	/// else is `None`.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(v) => Some(*v),
			Self::Int(v) => Some(*v != 0),
			Self::Float(v) => Some(*v != 0.0),
			Self::Str(s) => match s.as_str() {
				"true" => Some(true),
				"false" => Some(false),
				_ => None,
			},
		}
	}

	#[must_use]
	/// # As an Integer.
	///
	/// Floats truncate; booleans and strings are `None`.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(v) => Some(*v),
			Self::Float(v) => Some(*v as i64),
			_ => None,
		}
	}

	#[must_use]
	/// # As a Float.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Self::Float(v) => Some(*v),
			Self::Int(v) => Some(*v as f64),
			_ => None,
		}
	}

	#[must_use]
	/// # As a String Slice.
	///
	/// This is the strict reading; use [`Value::stringify`] to render the
	/// other variants too.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	#[must_use]
	/// # Stringify.
	///
	/// Borrow `Str` values as-are; render anything else through `Display`.
	pub fn stringify(&self) -> Cow<'_, str> {
		match self {
			Self::Str(s) => Cow::Borrowed(s),
			other => Cow::Owned(other.to_string()),
		}
	}
}



/// # Integer Shape?
///
/// An optional leading `-` followed by one or more ASCII digits, nothing
/// else.
pub(crate) const fn is_integer(txt: &[u8]) -> bool {
	let mut txt = txt;
	if let [b'-', rest @ ..] = txt { txt = rest; }
	if txt.is_empty() { return false; }
	while let [b'0'..=b'9', rest @ ..] = txt { txt = rest; }
	txt.is_empty()
}

/// # Number Shape?
///
/// The broader numeric shape: an optional leading `-`, whole digits, an
/// optional `.`-led fraction, and an optional `e`-led (lowercase, optionally
/// negative) exponent.
pub(crate) const fn is_number(txt: &[u8]) -> bool {
	let mut txt = txt;
	if let [b'-', rest @ ..] = txt { txt = rest; }

	// Whole digits.
	let mut any = false;
	while let [b'0'..=b'9', rest @ ..] = txt {
		any = true;
		txt = rest;
	}
	if ! any { return false; }

	// Fraction digits.
	if let [b'.', rest @ ..] = txt {
		txt = rest;
		any = false;
		while let [b'0'..=b'9', rest @ ..] = txt {
			any = true;
			txt = rest;
		}
		if ! any { return false; }
	}

	// Exponent digits.
	if let [b'e', rest @ ..] = txt {
		txt = rest;
		if let [b'-', rest2 @ ..] = txt { txt = rest2; }
		any = false;
		while let [b'0'..=b'9', rest @ ..] = txt {
			any = true;
			txt = rest;
		}
		if ! any { return false; }
	}

	txt.is_empty()
}
