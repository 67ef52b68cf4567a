use crate::normalizer::TextNormalizer;

/// Unicode-aware lowercase folding.
#[derive(Clone, Debug, Default)]
pub struct Lowercase;

impl Lowercase {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for Lowercase {
    fn normalize(&self, word: &mut String) {
        if word.chars().any(char::is_uppercase) {
            *word = word.to_lowercase();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::normalizer::{Lowercase, TextNormalizer};

    fn run(word: &str) -> String {
        let mut word = word.to_string();
        Lowercase::new().normalize(&mut word);
        word
    }

    #[test]
    fn test_normalizer_lowercase() {
        assert_eq!(run("ПРИВЕТ"), "привет");
        assert_eq!(run("TokeniZED"), "tokenized");
    }

    #[test]
    fn test_normalizer_all_lowercase() {
        assert_eq!(run("мир"), "мир");
    }

    #[test]
    fn test_normalizer_lowercase_yo() {
        assert_eq!(run("ЁЖ"), "ёж");
    }
}
