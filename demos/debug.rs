/*!
# Parsley: Debug

This example parses any arbitrary arguments fed to it and displays the
results, e.g.

cargo run --example debug -- --zoom=3 -av2 build --no-color -- raw tail
*/

fn main() {
	let args = parsley::Options::new()
		.with_alias("verbose", ["v"])
		.with_boolean("dry-run")
		.with_default("jobs", 1)
		.parse_env();

	println!("\x1b[2mFLAGS:\x1b[0m");
	for (key, value) in &args {
		println!("  {key} = {value:?}");
	}

	println!("\x1b[2mREST:\x1b[0m");
	for value in args.rest() {
		println!("  {value:?}");
	}

	println!("\x1b[2mUNPARSED:\x1b[0m");
	for raw in args.unparsed() {
		println!("  {raw}");
	}
}
