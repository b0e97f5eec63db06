/*!
# Parsley

This crate provides a permissive, zero-ceremony CLI argument tokenizer in the
tradition of the classic "just hand me a map" shell-tool parsers, occupying
the opposite end of the spectrum from declarative full-service crates like
[clap](https://crates.io/crates/clap).

[`Options::parse`] walks the raw argument list exactly once and sorts every
token into one of three buckets:

* Named flags — `--key`, `--key=value`, `--no-key`, and clustered short forms
  like `-abc` or `-n5` — collected into a key/value mapping;
* Positionals — anything that doesn't look like a flag — kept in order;
* The unparsed tail — everything after a standalone `--` — kept verbatim.

There is no schema, no validation, and no failure mode: any token the
classifier can't make sense of simply falls through as a positional. Values
that look numeric are coerced (`"1"` becomes an integer, `"1.5"` a float)
unless a key is pinned as a string, keys can be ganged together into alias
groups, and absent keys can be backfilled with defaults. Interpretation is
left _entirely up to you_, via the typed accessors on [`ArgMap`].

## Example

```
use parsley::{Options, Value};

let args = Options::new()
    .with_alias("zoom", ["zm", "z"])
    .with_boolean("verbose")
    .with_default("jobs", 1)
    .parse(["--zoom=3", "--verbose", "build", "--", "raw stuff"]);

// Alias groups fan out; numeric-looking values get coerced.
assert_eq!(args.get("z"), Some(&Value::Int(3)));

// "build" wasn't eaten by --verbose because that key is boolean-locked.
assert!(args.bool_or(&["verbose"], false));
assert_eq!(args.rest(), &[Value::Str("build".to_owned())]);

// Defaults only fill in the blanks.
assert_eq!(args.int_or(&["jobs", "j"], 0), 1);

// The tail is preserved exactly as given.
assert_eq!(args.unparsed(), ["raw stuff"]);
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod argmap;
mod error;
mod parse;
mod token;
mod value;

pub use argmap::ArgMap;
pub use error::ParsleyError;
pub use parse::{
	args,
	Options,
	parse,
};
pub use token::TokenKind;
pub use value::Value;
