/*!
# Benchmark: `parsley::Options::parse`

For best results, this should be called with additional runtime arguments, like:
cargo bench --bench fm_parse -- --one val -tVal -k -v --apples /foo/bar /bar/baz
*/

use brunch::{
	Bench,
	benches,
};
use parsley::Options;

/// # A Representative Command Line.
fn argv() -> Vec<String> {
	[
		"-k",
		"--key=val",
		"-x",
		"out",
		"--quiet",
		"-t2",
		"/foo/bar",
		"--",
		"raw",
	].into_iter().map(String::from).collect()
}

/// # Same, With a Configuration to Honor.
fn configured() -> (Options, Vec<String>) {
	let opts = Options::new()
		.with_alias("key", ["k"])
		.with_boolean("quiet")
		.with_default("jobs", 1);
	(opts, argv())
}

benches!(
	Bench::new("parsley::parse()")
		.run_seeded_with(argv, |args| parsley::parse(args)),

	Bench::spacer(),

	Bench::new("parsley::Options::parse() (aliased)")
		.run_seeded_with(configured, |(opts, args)| opts.parse(args)),
);
