extern crate thiserror;

use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Core(#[from] wordswap::Error),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] IoError),
}

impl From<wordswap::error::ImportError> for Error {
    fn from(error: wordswap::error::ImportError) -> Self {
        Error::Core(error.into())
    }
}

impl From<wordswap::error::PairError> for Error {
    fn from(error: wordswap::error::PairError) -> Self {
        Error::Core(error.into())
    }
}

/// Configuration error.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Refusing to {0} without --yes")]
    Unconfirmed(&'static str),

    #[error("No input text given")]
    NoInput,
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("File Error ({path}): {kind}")]
    File { path: PathBuf, kind: io::ErrorKind },

    #[error("Stdin Error: {0}")]
    Stdin(io::ErrorKind),

    #[error("Output Error: {0}")]
    Output(io::ErrorKind),
}

impl IoError {
    pub fn file<P: Into<PathBuf>>(path: P, error: &io::Error) -> Self {
        IoError::File {
            path: path.into(),
            kind: error.kind(),
        }
    }
}
