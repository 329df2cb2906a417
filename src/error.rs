use std::{fmt, path::PathBuf};
use tokio::{sync::oneshot::error::RecvError, task::JoinError};

#[derive(thiserror::Error)]
pub enum Error {
    #[error("unknown grade: `{0}`")]
    UnknownGrade(String),
    #[error("malformed arguments: {0}")]
    MalformedArguments(String),
    #[error("malformed line {line_no}: `{line}`")]
    MalformedLine { line_no: usize, line: String },
    #[error("file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("cannot open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("read error: `{0}`")]
    Read(std::io::Error),
    #[error("no credits to average over")]
    NoCredits,
    #[error("grade reader failed: `{0}`")]
    Join(JoinError),
    #[error("receive gpa error: `{0}`")]
    Recv(RecvError),
    #[error("IO error: `{0}`")]
    Io(std::io::Error),
}

// Used by default when the main function returns Err.
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self, f)?;
        Ok(())
    }
}
