//! The [`Index`] is the lookup view of a [`Dictionary`].
//!
//! It holds two case-folded maps:
//!
//! - `forward`: source word (and every inflected form the lemma table folds
//!   onto it) -> target word.
//! - `reverse`: target word -> source word.
//!
//! The index owns no state of its own. It is rebuilt in full from the
//! dictionary after every mutation and is never updated incrementally.

extern crate hashbrown;

use hashbrown::HashMap;
use tracing::debug;

use crate::{
    dictionary::{Dictionary, WordPair},
    direction::Direction,
    normalizer::lemmatize::inflections_of,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Index {
    forward: HashMap<String, String>,
    reverse: HashMap<String, String>,
}

impl Index {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index for `dictionary`.
    ///
    /// Direct pairs are registered first, so a pair always takes precedence
    /// over a lemma-derived key, wherever it sits in the list. Among
    /// lemma-derived keys the first registered one wins. Pairs with a blank
    /// source or target are skipped.
    pub fn rebuild(dictionary: &Dictionary) -> Self {
        let capacity = dictionary.len();
        let mut index = Self {
            forward: HashMap::with_capacity(capacity),
            reverse: HashMap::with_capacity(capacity),
        };

        let pairs = dictionary
            .iter()
            .filter(|pair| pair.is_valid())
            .collect::<Vec<_>>();

        pairs.iter().for_each(|pair| index.insert_pair(pair));

        let direct = index.forward.len();
        pairs.iter().for_each(|pair| index.insert_inflections(pair));

        debug!(
            pairs = pairs.len(),
            direct,
            inflected = index.forward.len() - direct,
            reverse = index.reverse.len(),
            "rebuilt index"
        );

        index
    }

    fn insert_pair(&mut self, pair: &WordPair) {
        let source = pair.source.trim();
        let target = pair.target.trim();

        self.forward
            .insert(source.to_lowercase(), target.to_string());
        self.reverse
            .insert(target.to_lowercase(), source.to_string());
    }

    fn insert_inflections(&mut self, pair: &WordPair) {
        let canonical = pair.source.trim().to_lowercase();
        let target = pair.target.trim();

        inflections_of(&canonical).iter().for_each(|inflected| {
            self.forward
                .entry_ref(*inflected)
                .or_insert_with(|| target.to_string());
        });
    }

    /// Looks up an already folded `key` in the half of the index that
    /// serves `direction`.
    #[inline]
    pub fn lookup(&self, direction: Direction, key: &str) -> Option<&str> {
        let map = match direction {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.reverse,
        };

        map.get(key).map(String::as_str)
    }

    /// Number of forward keys, lemma-derived keys included.
    #[inline]
    pub fn forward_len(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub fn reverse_len(&self) -> usize {
        self.reverse.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty() && self.reverse.is_empty()
    }
}

impl From<&Dictionary> for Index {
    #[inline]
    fn from(dictionary: &Dictionary) -> Self {
        Self::rebuild(dictionary)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        dictionary::{Dictionary, WordPair},
        direction::Direction,
        engine::translate,
        index::Index,
        normalizer::lemmatize::inflections_of,
    };

    fn dictionary(pairs: &[(&str, &str)]) -> Dictionary {
        let mut dictionary = Dictionary::new();
        pairs.iter().for_each(|(source, target)| {
            dictionary.insert(source, target).unwrap();
        });
        dictionary
    }

    #[test]
    fn test_index_direct_pairs() {
        let index = Index::rebuild(&dictionary(&[("Привет", "Lihek"), ("я", "sa")]));

        assert_eq!(index.lookup(Direction::Forward, "привет"), Some("Lihek"));
        assert_eq!(index.lookup(Direction::Reverse, "lihek"), Some("Привет"));
        assert_eq!(index.lookup(Direction::Reverse, "sa"), Some("я"));
        assert_eq!(index.lookup(Direction::Forward, "Привет"), None);
        assert_eq!(index.lookup(Direction::Forward, "lihek"), None);
    }

    #[test]
    fn test_index_registers_inflections() {
        let index = Index::rebuild(&dictionary(&[("мой", "doi")]));

        assert_eq!(index.lookup(Direction::Forward, "моя"), Some("doi"));
        assert_eq!(index.lookup(Direction::Forward, "моего"), Some("doi"));
        assert_eq!(index.forward_len(), 1 + inflections_of("мой").len());
        assert_eq!(index.reverse_len(), 1);
    }

    #[test]
    fn test_index_direct_pair_beats_inflection() {
        // "моя" is listed after "мой", yet its own pair wins the key.
        let index = Index::rebuild(&dictionary(&[("мой", "doi"), ("моя", "doia")]));

        assert_eq!(index.lookup(Direction::Forward, "моя"), Some("doia"));
        assert_eq!(index.lookup(Direction::Forward, "мою"), Some("doi"));

        // Translation folds "моя" onto "мой" before the lookup, so the key
        // is never queried from text.
        assert_eq!(translate("моя", Direction::Forward, &index).output, "doi");
    }

    #[test]
    fn test_index_reverse_last_source_wins() {
        let index = Index::rebuild(&dictionary(&[("он", "ta"), ("она", "ta")]));

        assert_eq!(index.lookup(Direction::Reverse, "ta"), Some("она"));
    }

    #[test]
    fn test_index_skips_blank_pairs() {
        let dictionary = [
            WordPair {
                source: "  ".into(),
                target: "x".into(),
            },
            WordPair {
                source: "мир".into(),
                target: "kaar".into(),
            },
        ]
        .into_iter()
        .collect::<Dictionary>();

        let index = Index::rebuild(&dictionary);

        assert_eq!(index.reverse_len(), 1);
        assert_eq!(index.lookup(Direction::Reverse, "x"), None);
    }

    #[test]
    fn test_index_rebuild_is_idempotent() {
        let dictionary = Dictionary::with_defaults();

        assert_eq!(Index::rebuild(&dictionary), Index::rebuild(&dictionary));
        assert_eq!(Index::rebuild(&dictionary), Index::from(&dictionary));
    }

    #[test]
    fn test_index_empty_dictionary() {
        let index = Index::rebuild(&Dictionary::new());

        assert!(index.is_empty());
        assert_eq!(index, Index::new());
    }
}
