use std::{
    ops::Deref,
    slice::{Iter, IterMut},
};

/// Whether a token takes part in translation or is copied through as-is.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TokenKind {
    /// Maximal run of alphabetic characters.
    Word,

    /// Maximal run of anything else: whitespace, punctuation, digits, symbols.
    Separator,
}

#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Token {
    text: String,
    kind: TokenKind,

    /// Byte offset into the tokenized input.
    offset: usize,
}

impl Token {
    #[inline]
    pub fn new<S: Into<String>>(text: S, kind: TokenKind, offset: usize) -> Self {
        Self {
            text: text.into(),
            kind,
            offset,
        }
    }

    #[inline]
    pub fn word<S: Into<String>>(text: S, offset: usize) -> Self {
        Self::new(text, TokenKind::Word, offset)
    }

    #[inline]
    pub fn separator<S: Into<String>>(text: S, offset: usize) -> Self {
        Self::new(text, TokenKind::Separator, offset)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn inner(self) -> String {
        self.text
    }
}

impl Deref for Token {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.text
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Token> for String {
    fn from(value: Token) -> Self {
        value.text
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.0.push(token)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.0.len()
    }

    /// Number of word tokens.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.iter().filter(|token| token.is_word()).count()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Token> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, Token> {
        self.0.iter_mut()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|token| token.is_word())
            .map(Token::as_str)
    }

    /// Concatenates every token back into a single string.
    pub fn join(&self) -> String {
        let capacity = self.iter().map(|token| token.len()).sum();

        self.iter()
            .fold(String::with_capacity(capacity), |mut buffer, token| {
                buffer.push_str(token);
                buffer
            })
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(value: Vec<Token>) -> Self {
        Tokens(value)
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Tokens(iter.into_iter().collect())
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds [`Tokens`] from `word(..)` / `sep(..)` items, computing offsets
/// from the accumulated text.
///
/// ```
/// use wordswap::tokens;
///
/// let tokens = tokens![word("мир"), sep("!")];
/// assert_eq!(tokens.join(), "мир!");
/// assert_eq!(tokens.iter().nth(1).unwrap().offset(), "мир".len());
/// ```
#[macro_export]
macro_rules! tokens {
    (@token word, $text:expr, $offset:expr) => {
        $crate::token::Token::word($text, $offset)
    };
    (@token sep, $text:expr, $offset:expr) => {
        $crate::token::Token::separator($text, $offset)
    };
    ( $( $kind:ident ( $text:expr ) ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut tokens = $crate::token::Tokens::new();
        #[allow(unused_mut, unused_variables)]
        let mut offset = 0usize;
        $(
            let text: &str = $text;
            tokens.push($crate::tokens!(@token $kind, text, offset));
            offset += text.len();
        )*
        tokens
    }};
}
