use crate::tokenizer::{TextTokenizer, Token, TokenKind, Tokens};

#[inline]
fn kind_of(ch: char) -> TokenKind {
    if ch.is_alphabetic() {
        TokenKind::Word
    } else {
        TokenKind::Separator
    }
}

/// Lossless tokenizer: alternating runs of alphabetic and non-alphabetic
/// characters. Joining the output always yields the input back.
#[derive(Clone, Debug, Default)]
pub struct Standard;

impl Standard {
    pub fn new() -> Self {
        Self
    }
}

impl TextTokenizer for Standard {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens {
        let text = text.as_ref();
        let mut tokens = Tokens::new();

        let mut chars = text.char_indices();
        let Some((_, first)) = chars.next() else {
            return tokens;
        };

        let mut start = 0;
        let mut kind = kind_of(first);

        for (offset, ch) in chars {
            let next = kind_of(ch);
            if next != kind {
                tokens.push(Token::new(&text[start..offset], kind, start));
                start = offset;
                kind = next;
            }
        }

        tokens.push(Token::new(&text[start..], kind, start));
        tokens
    }
}
