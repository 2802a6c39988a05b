use clap::Parser;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = casebook_query::Args::parse();
	casebook_query::run(args)
}
