use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("invalid glob pattern: {0}")]
    InvalidPattern(String),
}

impl DigestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DigestError::Io {
            path: path.into(),
            source,
        }
    }
}
