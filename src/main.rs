//! CLI entry point for the altar content patch generator

use altarpatch::io::cli::{Cli, PatchRunner};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> altarpatch::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("altarpatch=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    PatchRunner::new(cli).process()?;
    Ok(())
}
