pub mod case;
pub mod dictionary;
pub mod direction;
pub mod engine;
pub mod error;
pub mod index;
pub mod normalizer;
pub mod token;
pub mod tokenizer;
pub mod util;

pub use {
    dictionary::{Dictionary, WordPair},
    direction::Direction,
    engine::{translate, Translation, Translator},
    error::Error,
    index::Index,
    normalizer::normalize,
};
