use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalesError {
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        message: String,
    },
    #[error("invalid input: {message}")]
    Validation { message: String },
}

pub type Result<T> = std::result::Result<T, SalesError>;

impl SalesError {
    pub(crate) fn file_access(path: &Path, source: std::io::Error) -> Self {
        SalesError::FileAccess { path: path.to_path_buf(), source }
    }

    pub(crate) fn parse(path: &Path, line: u64, message: impl Into<String>) -> Self {
        SalesError::Parse { path: path.to_path_buf(), line, message: message.into() }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        SalesError::Validation { message: message.into() }
    }

    /// Sorts a csv error into an access failure or a parse failure.
    pub(crate) fn from_csv(path: &Path, line: u64, err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(line);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => SalesError::file_access(path, source),
            _ => SalesError::parse(path, line, message),
        }
    }
}
