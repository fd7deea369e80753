mod cli;
mod error;
mod frames;
mod output;
mod record;
mod runner;

use std::io;

use crate::cli::Cli;
use crate::error::FrameCountError;
use crate::runner::run;
use clap::Parser;

fn main() {
    if let Err(err) = real_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), FrameCountError> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let summary = run(&cli, &mut io::stdout().lock())?;
    output::print_summary(&cli.output, &summary)?;

    if cli.check && !summary.stale.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
