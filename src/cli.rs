/**
 * The CLI interface for the GPA calculator.
 *
 * Grades come from exactly one source: the command line, a file or stdin. The source runs on a
 * blocking thread and feeds the aggregator through a bounded channel. Any error is fatal, a GPA
 * is only written once all input was consumed without one.
 */
use std::{io::Write, path::PathBuf};

use clap::Parser;
use tokio::sync::mpsc;
use tracing::debug;

use crate::{aggregator, error::Error, source::Source};

const CHANNEL_CAPACITY: usize = 100;

pub const USAGE: &str = "gpa - Calculate the gpa given a series of (grade, weight) pairs.

Usage:
\tgpa [(<grade> <credits>)...]
\tgpa [<file>]
";

#[derive(Parser, Debug)]
#[clap(
    name = "gpa",
    disable_help_flag = true,
    disable_version_flag = true,
    allow_hyphen_values = true
)]
pub struct Args {
    /// Grade/credit pairs, a file name, or `-` for stdin.
    #[clap(value_name = "INPUT", allow_hyphen_values = true)]
    pub inputs: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Stdin,
    File(PathBuf),
    Pairs(Vec<String>),
}

impl From<Args> for Command {
    fn from(args: Args) -> Self {
        let mut inputs = args.inputs;
        match inputs.len() {
            0 => Command::Stdin,
            1 => match inputs.remove(0) {
                arg if arg == "-h" || arg == "--help" => Command::Help,
                arg if arg == "-" => Command::Stdin,
                path => Command::File(PathBuf::from(path)),
            },
            _ => Command::Pairs(inputs),
        }
    }
}

impl Command {
    /// Picks the grade source. `None` for help, which reads nothing.
    pub fn source(self) -> Result<Option<Source>, Error> {
        match self {
            Command::Help => Ok(None),
            Command::Stdin => Ok(Some(Source::stdin())),
            Command::File(path) => Source::file(path).map(Some),
            Command::Pairs(pairs) => Source::args(pairs).map(Some),
        }
    }
}

pub async fn run<W: Write>(source: Source, mut writer: W) -> Result<(), Error> {
    let (tx_msg, rx_msg) = mpsc::channel(CHANNEL_CAPACITY);
    let rx_gpa = aggregator::run(rx_msg).await;

    let reader = tokio::task::spawn_blocking(move || source.produce(tx_msg));
    reader.await.map_err(Error::Join)?;

    let gpa = rx_gpa.await.map_err(Error::Recv)??;
    debug!(%gpa, "done");
    writeln!(writer, "{}", gpa).map_err(Error::Io)?;
    writer.flush().map_err(Error::Io)
}
