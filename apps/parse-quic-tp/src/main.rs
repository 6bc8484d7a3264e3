//! # parse-quic-tp prints QUIC transport parameters read from stdin, one per line.
mod cli;
mod error;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

pub fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    // stdout only carries the decoded parameters
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    cli.run()
}
