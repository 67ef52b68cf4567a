extern crate thiserror;

use thiserror::Error;

/// Error type.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Import(#[from] ImportError),

    #[error("{0}")]
    Pair(#[from] PairError),

    #[error("{0}")]
    Direction(#[from] DirectionError),

    #[error("Serialization Error: {0}")]
    Serialization(String),
}

/// Rejected dictionary import. The dictionary is left untouched.
#[derive(Debug, Error, PartialEq)]
pub enum ImportError {
    #[error("Malformed JSON: {0}")]
    Malformed(String),

    #[error("Expected a JSON array of word pairs")]
    NotAnArray,
}

/// Rejected dictionary edit. The dictionary is left untouched.
#[derive(Debug, Error, PartialEq)]
pub enum PairError {
    #[error("Source word is empty")]
    EmptySource,

    #[error("Target word is empty")]
    EmptyTarget,

    #[error("No word pair at position {index} (dictionary has {len})")]
    OutOfBounds { index: usize, len: usize },
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown direction: {0:?} (expected \"forward\" or \"reverse\")")]
pub struct DirectionError(pub String);
