/**
 * Grade record producers.
 *
 * Every source yields `Result<GradeRecord, Error>` items and can be consumed once. Lines are read
 * lazily, a reader error is the last item of its sequence. Command line pairs are validated in
 * full before the first record is handed out.
 */
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::{aggregator::Message, error::Error, grade::GradeRecord};

type Records = Box<dyn Iterator<Item = Message> + Send>;

fn parse_credits(s: &str) -> Option<u32> {
    // `u32::from_str` accepts a leading '+', credits are plain digits only
    if s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// Pairs up `<grade> <credits>` tokens from the command line.
pub struct ArgRecords {
    records: std::vec::IntoIter<GradeRecord>,
}

impl ArgRecords {
    /// Fails on an odd token count or on any credits token that is not an integer. Grades are
    /// not looked up here.
    pub fn new(args: Vec<String>) -> Result<ArgRecords, Error> {
        if args.len() % 2 != 0 {
            return Err(Error::MalformedArguments(format!(
                "expected grade/credits pairs, got {} arguments",
                args.len()
            )));
        }
        let mut records = Vec::with_capacity(args.len() / 2);
        let mut args = args.into_iter();
        while let (Some(grade), Some(credits)) = (args.next(), args.next()) {
            let credits = parse_credits(&credits).ok_or_else(|| {
                Error::MalformedArguments(format!(
                    "invalid credits `{}` for grade `{}`",
                    credits, grade
                ))
            })?;
            records.push(GradeRecord::new(grade, credits));
        }
        Ok(ArgRecords {
            records: records.into_iter(),
        })
    }
}

impl Iterator for ArgRecords {
    type Item = Message;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(Ok)
    }
}

/// Reads one `<grade> <credits>` record per line. Blank lines are skipped, fields past the
/// second are ignored.
pub struct LineRecords<R> {
    lines: std::iter::Enumerate<io::Lines<R>>,
    done: bool,
}

impl<R: BufRead> LineRecords<R> {
    pub fn new(reader: R) -> LineRecords<R> {
        LineRecords {
            lines: reader.lines().enumerate(),
            done: false,
        }
    }
}

fn parse_line(line_no: usize, line: &str) -> Option<Message> {
    let mut fields = line.split_whitespace();
    let grade = fields.next()?;
    let record = fields
        .next()
        .and_then(parse_credits)
        .map(|credits| GradeRecord::new(grade, credits))
        .ok_or_else(|| Error::MalformedLine {
            line_no,
            line: line.to_string(),
        });
    Some(record)
}

impl<R: BufRead> Iterator for LineRecords<R> {
    type Item = Message;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for (idx, line) in self.lines.by_ref() {
            let res = match line {
                Ok(line) => match parse_line(idx + 1, &line) {
                    Some(res) => res,
                    None => continue,
                },
                Err(err) => Err(Error::Read(err)),
            };
            self.done = res.is_err();
            return Some(res);
        }
        None
    }
}

pub enum Source {
    Args(ArgRecords),
    Lines(LineRecords<Box<dyn BufRead + Send>>),
}

impl Source {
    pub fn args(args: Vec<String>) -> Result<Source, Error> {
        debug!(count = args.len(), "reading grades from arguments");
        ArgRecords::new(args).map(Source::Args)
    }

    pub fn stdin() -> Source {
        debug!("reading grades from stdin");
        Source::lines(BufReader::new(io::stdin()))
    }

    pub fn file<P: AsRef<Path>>(path: P) -> Result<Source, Error> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading grades from file");
        let open_error = |source: io::Error| Error::FileOpen {
            path: PathBuf::from(path),
            source,
        };
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => open_error(err),
        })?;
        // a directory opens fine on unix and only fails on the first read
        if file.metadata().map_err(open_error)?.is_dir() {
            return Err(open_error(io::Error::new(io::ErrorKind::Other, "is a directory")));
        }
        Ok(Source::lines(BufReader::new(file)))
    }

    pub fn lines<R: BufRead + Send + 'static>(reader: R) -> Source {
        Source::Lines(LineRecords::new(Box::new(reader)))
    }

    pub fn records(self) -> Records {
        match self {
            Source::Args(records) => Box::new(records),
            Source::Lines(records) => Box::new(records),
        }
    }

    /// Forwards all records into `tx` and closes it by dropping. Blocks, so it belongs on a
    /// blocking thread.
    pub fn produce(self, tx: mpsc::Sender<Message>) {
        for res in self.records() {
            trace!(?res, "produced");
            let last = res.is_err();
            if tx.blocking_send(res).is_err() {
                debug!("aggregator hung up, stopping reader");
                return;
            }
            if last {
                break;
            }
        }
        debug!("reader exhausted");
    }
}
