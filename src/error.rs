/*!
# Parsley: Errors.

The scan itself is total — any argument list in, some [`ArgMap`](crate::ArgMap)
out — so the only failures in this crate come from the `want_*` accessors,
which insist on presence and legibility.
*/

use std::error::Error;
use std::fmt;



#[derive(Debug, Clone, Eq, Hash, PartialEq)]
/// # Error Struct.
pub enum ParsleyError {
	/// None of the requested keys were present. The payload lists the names
	/// that were tried.
	Missing(String),
	/// A key was present, but its value couldn't be read as the requested
	/// type. The payload names the key.
	WrongType(String),
}

impl Error for ParsleyError {}

impl fmt::Display for ParsleyError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Missing(keys) => write!(f, "Missing required argument: {keys}."),
			Self::WrongType(key) => write!(f, "Wrong value type for argument: {key}."),
		}
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_display() {
		assert_eq!(
			ParsleyError::Missing("zoom, zm, z".to_owned()).to_string(),
			"Missing required argument: zoom, zm, z.",
		);
		assert_eq!(
			ParsleyError::WrongType("name".to_owned()).to_string(),
			"Wrong value type for argument: name.",
		);
	}
}
