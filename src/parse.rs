/*!
# Parsley: Options and the Scan.

This module contains the crate's one real decision-maker: a single
left-to-right scan over the raw argument list, with one cursor that advances
an extra notch whenever a token is consumed as the preceding key's value.

The scan is total. Every token lands somewhere — a key, a value, a
positional, or the verbatim tail — and nothing it encounters can make it
fail.
*/

use crate::{
	ArgMap,
	TokenKind,
	Value,
};
use crate::value::is_number;
use std::collections::{
	BTreeMap,
	BTreeSet,
};



#[derive(Debug, Clone, Default)]
/// # Parse Options.
///
/// `Options` holds the little configuration the scan honors — boolean-locked
/// keys, string-locked keys, alias groups, and defaults — and exposes the
/// scan itself via [`Options::parse`] / [`Options::parse_env`].
///
/// Everything is optional; `Options::new().parse(…)` is a perfectly good way
/// to parse a command line.
///
/// ## Examples
///
/// ```
/// use parsley::{Options, Value};
///
/// let args = Options::new()
///     .with_string("name")
///     .parse(["--name", "007"]);
///
/// // String-locked keys never get numberified.
/// assert_eq!(args.get("name"), Some(&Value::Str("007".to_owned())));
/// ```
pub struct Options {
	/// # Boolean-Locked Keys.
	booleans: BTreeSet<String>,

	/// # String-Locked Keys.
	strings: BTreeSet<String>,

	/// # Alias Groups.
	///
	/// Each group lists every spelling of one logical key; assignment through
	/// any member writes all of them.
	aliases: Vec<Vec<String>>,

	/// # Default Values.
	///
	/// Applied after the scan, only for keys it didn't touch.
	defaults: BTreeMap<String, Value>,
}

/// ## Construction.
impl Options {
	#[inline]
	#[must_use]
	/// # New (Empty) Options.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With a Boolean-Locked Key.
	///
	/// A boolean-locked key never consumes a following token as its value —
	/// except a literal `true`/`false`, which it swallows as the boolean it
	/// spells.
	///
	/// ## Examples
	///
	/// ```
	/// use parsley::{Options, Value};
	///
	/// let args = Options::new()
	///     .with_boolean("watch")
	///     .parse(["--watch", "src"]);
	///
	/// assert_eq!(args.get("watch"), Some(&Value::Bool(true)));
	/// assert_eq!(args.rest(), &[Value::Str("src".to_owned())]);
	/// ```
	pub fn with_boolean<S: Into<String>>(mut self, key: S) -> Self {
		self.booleans.insert(key.into());
		self
	}

	#[must_use]
	/// # With Boolean-Locked Keys.
	pub fn with_booleans<I, S>(self, keys: I) -> Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		keys.into_iter().fold(self, Self::with_boolean)
	}

	#[must_use]
	/// # With a String-Locked Key.
	///
	/// A string-locked key keeps its values exactly as typed — no numeric
	/// coercion — and resolves to an empty string (rather than `true`) when
	/// it appears bare.
	pub fn with_string<S: Into<String>>(mut self, key: S) -> Self {
		self.strings.insert(key.into());
		self
	}

	#[must_use]
	/// # With String-Locked Keys.
	pub fn with_strings<I, S>(self, keys: I) -> Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		keys.into_iter().fold(self, Self::with_string)
	}

	#[must_use]
	/// # With an Alias Group.
	///
	/// Gang `key` and `aliases` together: setting any one of them sets every
	/// one of them (each independently coerced, so a string-locked member
	/// keeps the raw text while its siblings go numeric).
	///
	/// ## Examples
	///
	/// ```
	/// use parsley::{Options, Value};
	///
	/// let args = Options::new()
	///     .with_alias("zoom", ["zm", "z"])
	///     .parse(["-z2"]);
	///
	/// assert_eq!(args.get("zoom"), Some(&Value::Int(2)));
	/// assert_eq!(args.get("zm"),   Some(&Value::Int(2)));
	/// assert_eq!(args.get("z"),    Some(&Value::Int(2)));
	/// ```
	pub fn with_alias<S, I, S2>(mut self, key: S, aliases: I) -> Self
	where S: Into<String>, I: IntoIterator<Item=S2>, S2: Into<String> {
		let mut group: Vec<String> = vec![key.into()];
		for alias in aliases {
			let alias = alias.into();
			if ! group.contains(&alias) { group.push(alias); }
		}

		// A group of one aliases nothing.
		if group.len() > 1 { self.aliases.push(group); }
		self
	}

	#[must_use]
	/// # With a Default Value.
	///
	/// Defaults are applied after the scan, for keys it left unset, and run
	/// through the same coercion and alias fan-out as anything else.
	pub fn with_default<S, V>(mut self, key: S, value: V) -> Self
	where S: Into<String>, V: Into<Value> {
		self.defaults.insert(key.into(), value.into());
		self
	}

	#[must_use]
	/// # With Default Values.
	pub fn with_defaults<I, S, V>(self, pairs: I) -> Self
	where I: IntoIterator<Item=(S, V)>, S: Into<String>, V: Into<Value> {
		pairs.into_iter().fold(self, |acc, (k, v)| acc.with_default(k, v))
	}
}

/// ## Parsing.
impl Options {
	#[must_use]
	/// # Parse!
	///
	/// Walk the tokens once and classify each as a flag, a flag's value, a
	/// positional, or (after a standalone `--`) the verbatim tail.
	///
	/// This never fails; tokens that fit no flag shape fall through as
	/// positionals.
	pub fn parse<I, S>(&self, args: I) -> ArgMap
	where I: IntoIterator<Item=S>, S: Into<String> {
		self.scan(args.into_iter().map(Into::into).collect())
	}

	#[must_use]
	/// # Parse the Environment.
	///
	/// Same as [`Options::parse`], seeded with the process arguments (minus
	/// the program path).
	pub fn parse_env(&self) -> ArgMap {
		self.parse(std::env::args().skip(1))
	}
}

/// ## The Scan.
impl Options {
	/// # Scan.
	///
	/// One pass, one cursor; lookahead branches advance the cursor an extra
	/// notch when they consume the following token.
	fn scan(&self, args: Vec<String>) -> ArgMap {
		let mut map: BTreeMap<String, Value> = BTreeMap::new();
		let mut rest: Vec<Value> = Vec::new();
		let mut unparsed: Vec<String> = Vec::new();

		let mut i: usize = 0;
		while i < args.len() {
			let arg = args[i].as_str();
			match TokenKind::from(arg) {
				// Everything after the separator is kept verbatim,
				// uninspected.
				TokenKind::Separator => {
					unparsed.extend_from_slice(&args[i + 1..]);
					break;
				},

				// --key=value
				TokenKind::LongV(eq) => {
					self.assign(&mut map, &arg[2..eq], Value::Str(arg[eq + 1..].to_owned()));
				},

				// --no-key
				TokenKind::LongNot => {
					self.assign(&mut map, &arg[5..], Value::Bool(false));
				},

				// --key; the next token might be its value.
				TokenKind::Long => {
					i += self.resolve(&mut map, &arg[2..], args.get(i + 1).map(String::as_str));
				},

				// -abc
				TokenKind::Short => {
					i += self.cluster(&mut map, arg, args.get(i + 1).map(String::as_str));
				},

				// Anything else is a positional.
				TokenKind::None => {
					rest.push(Value::coerce(arg.to_owned()));
				},
			}

			i += 1;
		}

		// Backfill defaults for keys the scan didn't touch.
		for (key, value) in &self.defaults {
			if ! map.contains_key(key) {
				self.assign(&mut map, key, value.clone());
			}
		}

		ArgMap::new(map, rest, unparsed)
	}

	/// # Resolve a Bare Key Against the Following Token.
	///
	/// A missing or dash-prefixed follower leaves the key a bare flag. A
	/// usable follower is consumed as the key's value — unless the key is
	/// boolean-locked, in which case only a literal `true`/`false` gets
	/// swallowed.
	///
	/// Returns the extra cursor advance: one when the follower was consumed,
	/// zero otherwise.
	fn resolve(
		&self,
		map: &mut BTreeMap<String, Value>,
		key: &str,
		next: Option<&str>,
	) -> usize {
		match next {
			// Nothing usable follows; the key stands alone.
			None => {
				self.assign(map, key, self.bare(key));
				0
			},
			Some(next) if next.starts_with('-') => {
				self.assign(map, key, self.bare(key));
				0
			},

			// Not boolean-locked: the follower is the value.
			Some(next) if ! self.booleans.contains(key) => {
				self.assign(map, key, Value::Str(next.to_owned()));
				1
			},

			// Boolean-locked keys only swallow spelled-out booleans.
			Some("true") => {
				self.assign(map, key, Value::Bool(true));
				1
			},
			Some("false") => {
				self.assign(map, key, Value::Bool(false));
				1
			},
			Some(_) => {
				self.assign(map, key, Value::Bool(true));
				0
			},
		}
	}

	/// # Walk a Short Cluster.
	///
	/// Each character is its own boolean flag until a suffix rule attaches
	/// the remainder of the token as a value instead. The rules overlap, and
	/// apply in this order:
	///
	/// 1. an ASCII letter followed by a number-shaped remainder takes the
	///    remainder as its value (`-n5`, `-a1.24`);
	/// 2. a character whose successor (within the cluster) is a non-word
	///    character takes the remainder as its value (`-a-`, `-a码农`);
	/// 3. otherwise the character is a bare flag and the walk continues.
	///
	/// A final character that survives to the end of the walk is resolved
	/// against the following token, exactly like a bare long key. Returns the
	/// extra cursor advance from that resolution.
	fn cluster(
		&self,
		map: &mut BTreeMap<String, Value>,
		arg: &str,
		next: Option<&str>,
	) -> usize {
		let letters = &arg[1..];
		let mut chars = letters.char_indices().peekable();

		while let Some((pos, ch)) = chars.next() {
			let end = pos + ch.len_utf8();
			let key = &letters[pos..end];
			let suffix = &letters[end..];

			// A numeric remainder belongs to this letter.
			if ch.is_ascii_alphabetic() && is_number(suffix.as_bytes()) {
				self.assign(map, key, Value::Str(suffix.to_owned()));
				return 0;
			}

			match chars.peek() {
				// A non-word follow-up ends the walk too, remainder and all.
				Some(&(_, peek)) if ! is_word(peek) => {
					self.assign(map, key, Value::Str(suffix.to_owned()));
					return 0;
				},

				// Mid-cluster characters stand alone.
				Some(_) => { self.assign(map, key, self.bare(key)); },

				// The last one might claim the following token.
				None => return self.resolve(map, key, next),
			}
		}

		0
	}

	/// # Bare-Flag Value.
	///
	/// `true`, unless the key is string-locked, in which case an empty
	/// string.
	fn bare(&self, key: &str) -> Value {
		if self.strings.contains(key) { Value::Str(String::new()) }
		else { Value::Bool(true) }
	}

	/// # Assign.
	///
	/// Write `value` under `key` and every other member of its alias group,
	/// coercing per member.
	fn assign(&self, map: &mut BTreeMap<String, Value>, key: &str, value: Value) {
		match self.group(key) {
			Some(group) => for member in group {
				map.insert(member.clone(), self.coerced(member, value.clone()));
			},
			None => { map.insert(key.to_owned(), self.coerced(key, value)); },
		}
	}

	/// # Alias Group For a Key.
	fn group(&self, key: &str) -> Option<&[String]> {
		self.aliases.iter()
			.find(|g| g.iter().any(|k| k == key))
			.map(Vec::as_slice)
	}

	/// # Coerce For a Key.
	///
	/// String values get the numeric reading unless the destination key is
	/// string-locked; non-string values pass through untouched.
	fn coerced(&self, key: &str, value: Value) -> Value {
		match value {
			Value::Str(s) if ! self.strings.contains(key) => Value::coerce(s),
			v => v,
		}
	}
}

/// # Word Character?
///
/// ASCII alphanumeric or underscore; everything else — punctuation, spaces,
/// non-ASCII — counts as non-word for cluster-splitting purposes.
const fn is_word(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || ch == '_'
}



#[must_use]
/// # Parse With Default Options.
///
/// Shorthand for `Options::new().parse(args)`: no locked keys, no aliases,
/// no defaults.
///
/// ## Examples
///
/// ```
/// use parsley::Value;
///
/// let args = parsley::parse(["--jobs", "4", "input.txt"]);
/// assert_eq!(args.get("jobs"), Some(&Value::Int(4)));
/// assert_eq!(args.rest(), &[Value::Str("input.txt".to_owned())]);
/// ```
pub fn parse<I, S>(args: I) -> ArgMap
where I: IntoIterator<Item=S>, S: Into<String> {
	Options::default().parse(args)
}

#[must_use]
/// # Parse the Environment With Default Options.
///
/// Shorthand for `Options::new().parse_env()`.
pub fn args() -> ArgMap {
	Options::default().parse_env()
}
