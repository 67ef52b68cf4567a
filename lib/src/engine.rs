use tracing::trace;

use crate::{
    case::apply_case,
    direction::Direction,
    index::Index,
    normalizer::NormalizerPipeline,
    token::Token,
    tokenizer::{Standard, TextTokenizer},
    util::Counter,
};

/// Output of a single translation request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Translation {
    pub output: String,
    translated: Counter<usize>,
    total: Counter<usize>,
}

impl Translation {
    /// Word tokens that were found in the index.
    #[inline]
    pub fn translated_count(&self) -> usize {
        self.translated.get()
    }

    /// Word tokens in the input, translated or not.
    #[inline]
    pub fn total_word_tokens(&self) -> usize {
        self.total.get()
    }

    /// Share of word tokens translated, in `0.0..=1.0`; zero without words.
    #[inline]
    pub fn coverage(&self) -> f64 {
        self.translated.ratio_of(self.total)
    }

    /// [`Translation::coverage`] as a whole percentage.
    #[inline]
    pub fn coverage_percent(&self) -> u32 {
        (self.coverage() * 100.0).round() as u32
    }
}

/// Word-by-word substitution over a fixed [`Index`].
#[derive(Clone, Debug)]
pub struct Translator<'i> {
    index: &'i Index,
    direction: Direction,
    tokenizer: Standard,
    pipeline: NormalizerPipeline,
}

impl<'i> Translator<'i> {
    pub fn new(index: &'i Index, direction: Direction) -> Self {
        Self {
            index,
            direction,
            tokenizer: Standard::new(),
            pipeline: NormalizerPipeline::for_direction(direction),
        }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Replacement for a single word, with the word's capitalization applied.
    ///
    /// Only the folded key is looked up; a miss leaves the word untranslated.
    pub fn lookup(&self, word: &str) -> Option<String> {
        let key = self.pipeline.run(word);

        self.index
            .lookup(self.direction, &key)
            .map(|found| apply_case(word, found))
    }

    pub fn translate(&self, text: &str) -> Translation {
        let mut translation = Translation::default();

        if text.trim().is_empty() {
            return translation;
        }

        let tokens = self.tokenizer.tokenize(text);
        translation.output.reserve(text.len());

        tokens.iter().for_each(|token| {
            let piece = self.translate_token(token, &mut translation);
            translation.output.push_str(&piece);
        });

        trace!(
            direction = %self.direction,
            translated = translation.translated_count(),
            total = translation.total_word_tokens(),
            "translated text"
        );

        translation
    }

    fn translate_token(&self, token: &Token, translation: &mut Translation) -> String {
        if !token.is_word() {
            return token.to_string();
        }

        translation.total.increment();

        match self.lookup(token) {
            Some(replacement) => {
                translation.translated.increment();
                replacement
            }
            None => token.to_string(),
        }
    }
}

/// Translates `text` in `direction` against `index`.
///
/// Separators and unknown words pass through verbatim, so the output of a
/// text with no known words is the text itself.
pub fn translate(text: &str, direction: Direction, index: &Index) -> Translation {
    Translator::new(index, direction).translate(text)
}
