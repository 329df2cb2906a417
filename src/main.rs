/**
 * Calculates a grade point average from (grade, credits) pairs.
 *
 * Grades are read from the command line, a file or stdin. The result is printed to stdout with
 * three decimals. Diagnostics go to stderr, filtered by `RUST_LOG`.
 */
mod aggregator;
mod cli;
mod error;
mod gpa;
mod grade;
mod source;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{cli::Command, error::Error};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let command = Command::from(cli::Args::parse());
    match command.source()? {
        Some(source) => cli::run(source, std::io::stdout()).await,
        None => {
            eprintln!("{}", cli::USAGE);
            Ok(())
        }
    }
}
