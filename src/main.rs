//! RustTrain - Workout Statistics Calculator
//!
//! Main entry point for the command-line tool.

use clap::Parser;
use rusttrain::cli::{self, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so summaries stay pipeable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting RustTrain v{}", env!("CARGO_PKG_VERSION"));

    let output = cli::run(Cli::parse())?;
    println!("{}", output.trim_end());

    Ok(())
}
