#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;

use xlate_cli::args::CliArgs;
use xlate_cli::{driver, tracing_config};

const EXIT_DIAGNOSTICS: i32 = 2;

fn main() -> Result<()> {
    // Only installs a subscriber when XLATE_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let result = driver::run(&args)?;

    for diagnostic in &result.diagnostics {
        eprintln!("{diagnostic}");
    }
    if args.stats {
        eprintln!("{}", serde_json::to_string_pretty(&result.stats)?);
    }
    if result.has_errors() {
        std::process::exit(EXIT_DIAGNOSTICS);
    }

    print!("{}", result.render(args.format)?);
    Ok(())
}
