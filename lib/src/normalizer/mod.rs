pub mod case;
pub mod lemmatize;

pub use {case::Lowercase, lemmatize::Lemmatizer};

use crate::direction::Direction;

pub trait TextNormalizerClone {
    fn clone_box(&self) -> Box<dyn TextNormalizer>;
}

impl<T> TextNormalizerClone for T
where
    T: 'static + TextNormalizer + Clone,
{
    fn clone_box(&self) -> Box<dyn TextNormalizer> {
        Box::new(self.clone())
    }
}

/// A single folding step applied to a word before index lookup.
pub trait TextNormalizer: TextNormalizerClone + std::fmt::Debug + Send + Sync {
    fn normalize(&self, word: &mut String);
}

impl Clone for Box<dyn TextNormalizer> {
    fn clone(&self) -> Box<dyn TextNormalizer> {
        self.clone_box()
    }
}

#[derive(Clone, Debug, Default)]
pub struct NormalizerPipeline(Vec<Box<dyn TextNormalizer>>);

impl NormalizerPipeline {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Lookup-key pipeline for the given direction: the forward direction
    /// folds inflected forms onto their lemma, the reverse one only folds case.
    pub fn for_direction(direction: Direction) -> Self {
        let mut pipeline = Self::new();
        pipeline.insert(Box::new(Lowercase::new()));

        if direction == Direction::Forward {
            pipeline.insert(Box::new(Lemmatizer::new()));
        }

        pipeline
    }

    pub fn insert(&mut self, normalizer: Box<dyn TextNormalizer>) -> &mut Self {
        self.0.push(normalizer);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn run(&self, word: &str) -> String {
        let mut word = word.to_owned();
        self.0.iter().for_each(|normalizer| {
            normalizer.normalize(&mut word);
        });
        word
    }
}

/// Folds `word` into the key used for forward-direction lookups:
/// lowercase, then resolve through the lemma table.
///
/// Total: words missing from the lemma table normalize to their lowercase form.
pub fn normalize(word: &str) -> String {
    let mut word = word.to_lowercase();
    Lemmatizer::new().normalize(&mut word);
    word
}
