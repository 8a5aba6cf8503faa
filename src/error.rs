use std::path::PathBuf;

use thiserror::Error;

/// Contract violations reported by a digest engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    #[error("digest engine already finalized; call reset() before reuse")]
    AlreadyFinalized,

    #[error("input too large: message length exceeds 2^64 - 1 bits")]
    InputTooLarge,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("digest error: {0}")]
    Digest(#[from] DigestError),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid copy count: {0}. Must be between 1 and 50")]
    InvalidCopies(usize),

    #[error("Source file {} not found", .0.display())]
    MissingSource(PathBuf),

    #[error("Worker for process {0} panicked")]
    WorkerPanicked(usize),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
