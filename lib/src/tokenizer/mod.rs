mod standard;

pub use standard::Standard;

pub use crate::token::{Token, TokenKind, Tokens};

pub trait TextTokenizer {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens;
}

/// Splits `text` with the [`Standard`] tokenizer.
#[inline]
pub fn tokenize<T: AsRef<str>>(text: T) -> Tokens {
    Standard::new().tokenize(text)
}
