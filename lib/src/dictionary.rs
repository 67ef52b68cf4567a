//! The user-editable list of word pairs.
//!
//! [`Dictionary`] is the single source of truth; every lookup structure is
//! derived from it (see [`Index`](crate::index::Index)). Sources are unique
//! under case-insensitive comparison, targets are not.

use std::slice::Iter;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, ImportError, PairError};

/// Accepted spellings of the source field in imported JSON.
const SOURCE_KEYS: [&str; 2] = ["ru", "source"];

/// Accepted spellings of the target field in imported JSON.
const TARGET_KEYS: [&str; 2] = ["lk", "target"];

/// Pairs a freshly created dictionary starts with.
pub const DEFAULT_PAIRS: [(&str, &str); 4] = [
    ("привет", "lihek"),
    ("мир", "kaar"),
    ("я", "sa"),
    ("ты", "tu"),
];

#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct WordPair {
    #[serde(rename = "ru", alias = "source")]
    pub source: String,

    #[serde(rename = "lk", alias = "target")]
    pub target: String,
}

impl WordPair {
    /// Trims both words and rejects the pair if either ends up empty.
    pub fn new<S: AsRef<str>, T: AsRef<str>>(source: S, target: T) -> Result<Self, PairError> {
        let source = source.as_ref().trim();
        let target = target.as_ref().trim();

        if source.is_empty() {
            return Err(PairError::EmptySource);
        }

        if target.is_empty() {
            return Err(PairError::EmptyTarget);
        }

        Ok(Self {
            source: source.to_string(),
            target: target.to_string(),
        })
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.source.trim().is_empty() && !self.target.trim().is_empty()
    }

    #[inline]
    fn has_source(&self, source: &str) -> bool {
        self.source.to_lowercase() == source.to_lowercase()
    }
}

/// Outcome of [`Dictionary::insert`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Insertion {
    /// A new pair was appended at `index`.
    Added { index: usize },

    /// The pair at `index` already had this source; its target was replaced.
    Updated { index: usize, previous: String },
}

/// Outcome of [`Dictionary::import_json`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Import {
    /// Blank payload, nothing happened.
    Skipped,

    /// The dictionary was replaced by `accepted` pairs; `rejected` entries
    /// were filtered out or merged into an earlier pair with the same source.
    Replaced { accepted: usize, rejected: usize },
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(Vec<WordPair>);

impl Dictionary {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary seeded with [`DEFAULT_PAIRS`].
    pub fn with_defaults() -> Self {
        DEFAULT_PAIRS
            .iter()
            .map(|(source, target)| WordPair {
                source: source.to_string(),
                target: target.to_string(),
            })
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, WordPair> {
        self.0.iter()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&WordPair> {
        self.0.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[WordPair] {
        &self.0
    }

    /// Position of the pair whose source matches `source`, ignoring case.
    pub fn position(&self, source: &str) -> Option<usize> {
        let source = source.trim();
        self.iter().position(|pair| pair.has_source(source))
    }

    pub fn find(&self, source: &str) -> Option<&WordPair> {
        self.position(source).and_then(|index| self.get(index))
    }

    /// Inserts a pair, or updates the target of the pair with the same
    /// source. Empty words are rejected before anything changes.
    pub fn insert<S: AsRef<str>, T: AsRef<str>>(
        &mut self,
        source: S,
        target: T,
    ) -> Result<Insertion, PairError> {
        let pair = WordPair::new(source, target)?;
        Ok(self.upsert(pair))
    }

    fn upsert(&mut self, pair: WordPair) -> Insertion {
        match self.position(&pair.source) {
            Some(index) => {
                let previous = std::mem::replace(&mut self.0[index].target, pair.target);
                Insertion::Updated { index, previous }
            }
            None => {
                self.0.push(pair);
                Insertion::Added {
                    index: self.len() - 1,
                }
            }
        }
    }

    pub fn remove(&mut self, index: usize) -> Result<WordPair, PairError> {
        if index >= self.len() {
            return Err(PairError::OutOfBounds {
                index,
                len: self.len(),
            });
        }

        Ok(self.0.remove(index))
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Replaces the whole dictionary with the pairs in `raw`, a JSON array
    /// of `{"ru", "lk"}` (or `{"source", "target"}`) objects.
    ///
    /// Entries with a missing or non-string field, or with a field that is
    /// empty after trimming, are dropped. A blank payload is a no-op; an
    /// unparsable or non-array payload is an error. On error the dictionary
    /// is unchanged.
    pub fn import_json(&mut self, raw: &str) -> Result<Import, ImportError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Import::Skipped);
        }

        let value: Value =
            serde_json::from_str(raw).map_err(|error| ImportError::Malformed(error.to_string()))?;

        let Value::Array(entries) = value else {
            return Err(ImportError::NotAnArray);
        };

        let total = entries.len();
        let mut imported = Dictionary::new();

        entries
            .iter()
            .filter_map(parse_entry)
            .for_each(|pair| {
                imported.upsert(pair);
            });

        let accepted = imported.len();
        *self = imported;

        debug!(accepted, total, "imported dictionary");

        Ok(Import::Replaced {
            accepted,
            rejected: total - accepted,
        })
    }

    /// Pretty-printed JSON array, readable back by [`Dictionary::import_json`].
    pub fn export_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|error| Error::Serialization(error.to_string()))
    }
}

fn field<'v>(entry: &'v Value, keys: &[&str]) -> Option<&'v str> {
    keys.iter().find_map(|key| entry.get(key)).and_then(Value::as_str)
}

fn parse_entry(entry: &Value) -> Option<WordPair> {
    let source = field(entry, &SOURCE_KEYS)?;
    let target = field(entry, &TARGET_KEYS)?;

    WordPair::new(source, target).ok()
}

impl FromIterator<WordPair> for Dictionary {
    /// Collects pairs with the same insert-or-update rule as
    /// [`Dictionary::insert`]; invalid pairs are skipped.
    fn from_iter<I: IntoIterator<Item = WordPair>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();

        iter.into_iter()
            .filter(WordPair::is_valid)
            .for_each(|pair| {
                dictionary.upsert(pair);
            });

        dictionary
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a WordPair;
    type IntoIter = Iter<'a, WordPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
