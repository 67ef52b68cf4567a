//! Hand-authored inflection table for the source language.
//!
//! Maps an inflected, lowercase surface form onto the canonical form used as
//! the dictionary key. The table is many-to-one and fixed at build time.

use std::sync::OnceLock;

use hashbrown::HashMap;

use crate::normalizer::TextNormalizer;

/// `(inflected, canonical)` pairs, grouped by canonical form.
pub const LEMMAS: &[(&str, &str)] = &[
    // мой
    ("моя", "мой"),
    ("моё", "мой"),
    ("мое", "мой"),
    ("мои", "мой"),
    ("моего", "мой"),
    ("моей", "мой"),
    ("моему", "мой"),
    ("моим", "мой"),
    ("моих", "мой"),
    ("мою", "мой"),
    ("моими", "мой"),
    // твой
    ("твоя", "твой"),
    ("твоё", "твой"),
    ("твое", "твой"),
    ("твои", "твой"),
    ("твоего", "твой"),
    ("твоей", "твой"),
    ("твоему", "твой"),
    ("твоим", "твой"),
    ("твоих", "твой"),
    ("твою", "твой"),
    // я
    ("меня", "я"),
    ("мне", "я"),
    ("мной", "я"),
    ("мною", "я"),
    // ты
    ("тебя", "ты"),
    ("тебе", "ты"),
    ("тобой", "ты"),
    ("тобою", "ты"),
    // он
    ("его", "он"),
    ("него", "он"),
    ("ему", "он"),
    ("нему", "он"),
    ("им", "он"),
    ("ним", "он"),
    ("нём", "он"),
    ("нем", "он"),
    // она
    ("её", "она"),
    ("ее", "она"),
    ("неё", "она"),
    ("нее", "она"),
    ("ей", "она"),
    ("ней", "она"),
    ("ею", "она"),
    ("нею", "она"),
    // мы
    ("нас", "мы"),
    ("нам", "мы"),
    ("нами", "мы"),
    // вы
    ("вас", "вы"),
    ("вам", "вы"),
    ("вами", "вы"),
    // они
    ("их", "они"),
    ("них", "они"),
    ("ими", "они"),
    ("ними", "они"),
    // мир
    ("мира", "мир"),
    ("миру", "мир"),
    ("миром", "мир"),
    ("мире", "мир"),
    ("миры", "мир"),
    ("миров", "мир"),
    ("мирам", "мир"),
    // привет
    ("привета", "привет"),
    ("приветы", "привет"),
    ("приветом", "привет"),
    ("приветов", "привет"),
    // друг
    ("друга", "друг"),
    ("другу", "друг"),
    ("другом", "друг"),
    ("друге", "друг"),
    ("друзья", "друг"),
    ("друзей", "друг"),
    ("друзьям", "друг"),
    // быть
    ("есть", "быть"),
    ("был", "быть"),
    ("была", "быть"),
    ("было", "быть"),
    ("были", "быть"),
    ("буду", "быть"),
    ("будет", "быть"),
    ("будем", "быть"),
];

/// Inflected form -> canonical form.
pub fn lemmas() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&str, &str>> = OnceLock::new();
    MAP.get_or_init(|| LEMMAS.iter().copied().collect())
}

/// Canonical form -> inflected forms, in table order.
pub fn inflections() -> &'static HashMap<&'static str, Vec<&'static str>> {
    static MAP: OnceLock<HashMap<&str, Vec<&str>>> = OnceLock::new();
    MAP.get_or_init(|| {
        LEMMAS
            .iter()
            .fold(HashMap::new(), |mut map, &(inflected, canonical)| {
                map.entry(canonical)
                    .or_insert_with(Vec::new)
                    .push(inflected);
                map
            })
    })
}

/// Inflected forms that fold onto `canonical`, or an empty slice.
#[inline]
pub fn inflections_of(canonical: &str) -> &'static [&'static str] {
    inflections()
        .get(canonical)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Resolves lowercase words through the lemma table.
///
/// Expects lowercase input; run [`Lowercase`](crate::normalizer::Lowercase)
/// first.
#[derive(Clone, Debug, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn lemmatize(&self, word: &str) -> Option<&'static str> {
        lemmas().get(word).copied()
    }
}

impl TextNormalizer for Lemmatizer {
    fn normalize(&self, word: &mut String) {
        if let Some(canonical) = self.lemmatize(word) {
            word.clear();
            word.push_str(canonical);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::normalizer::{
        lemmatize::{inflections_of, lemmas, LEMMAS},
        Lemmatizer,
    };

    #[test]
    fn test_lemma_table_keys_are_unique_and_lowercase() {
        let keys = LEMMAS.iter().map(|(k, _)| *k).collect::<HashSet<_>>();

        assert_eq!(keys.len(), LEMMAS.len());
        assert!(LEMMAS
            .iter()
            .all(|(k, v)| *k == k.to_lowercase() && *v == v.to_lowercase()));
        assert_eq!(lemmas().len(), LEMMAS.len());
    }

    #[test]
    fn test_lemma_table_is_not_chained() {
        // A canonical form never folds any further.
        assert!(LEMMAS.iter().all(|(_, v)| !lemmas().contains_key(v)));
    }

    #[test]
    fn test_lemmatize() {
        let lemmatizer = Lemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("моя"), Some("мой"));
        assert_eq!(lemmatizer.lemmatize("друзья"), Some("друг"));
        assert_eq!(lemmatizer.lemmatize("мой"), None);
        assert_eq!(lemmatizer.lemmatize("Моя"), None);
    }

    #[test]
    fn test_inflections_of() {
        let forms = inflections_of("мир");

        assert_eq!(forms.first(), Some(&"мира"));
        assert!(forms.contains(&"миром"));
        assert!(inflections_of("kaar").is_empty());
    }
}
