//! Capitalization transfer from a source token onto its replacement.

/// Capitalization pattern observed on a source token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CasePattern {
    /// Every cased character is uppercase, and there is at least one.
    Upper,

    /// First character is uppercase, the rest is anything.
    Capitalized,

    /// Anything else, treated as lowercase.
    Lower,
}

impl CasePattern {
    pub fn of(token: &str) -> Self {
        if token.to_uppercase() == token && token.to_lowercase() != token {
            return CasePattern::Upper;
        }

        match token.chars().next() {
            Some(first) if first.is_uppercase() => CasePattern::Capitalized,
            _ => CasePattern::Lower,
        }
    }

    pub fn apply(self, word: &str) -> String {
        match self {
            CasePattern::Upper => word.to_uppercase(),
            CasePattern::Capitalized => capitalize(word),
            CasePattern::Lower => word.to_owned(),
        }
    }
}

/// Uppercases the first character only; the rest is kept as-is.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Re-applies the capitalization of `original` onto `translated`.
///
/// An empty `translated` yields `original` unchanged.
pub fn apply_case(original: &str, translated: &str) -> String {
    if translated.is_empty() {
        return original.to_owned();
    }

    CasePattern::of(original).apply(translated)
}
