use wordswap::{
    dictionary::{Import, Insertion},
    Dictionary, Direction, Error, Index, Translation, WordPair,
};

/// Owns the dictionary together with the index derived from it.
///
/// Every mutation rebuilds the index before returning, so translations never
/// observe a stale view.
#[derive(Debug)]
pub struct WordswapFacade {
    dictionary: Dictionary,
    index: Index,
}

impl WordswapFacade {
    pub fn new(dictionary: Dictionary) -> Self {
        let index = Index::rebuild(&dictionary);
        Self { dictionary, index }
    }

    #[inline]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[inline]
    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn into_dictionary(self) -> Dictionary {
        self.dictionary
    }

    pub fn add(&mut self, source: &str, target: &str) -> Result<Insertion, Error> {
        let insertion = self.dictionary.insert(source, target)?;
        self.rebuild();
        Ok(insertion)
    }

    pub fn remove(&mut self, index: usize) -> Result<WordPair, Error> {
        let pair = self.dictionary.remove(index)?;
        self.rebuild();
        Ok(pair)
    }

    pub fn import(&mut self, raw: &str) -> Result<Import, Error> {
        let import = self.dictionary.import_json(raw)?;
        if import != Import::Skipped {
            self.rebuild();
        }
        Ok(import)
    }

    pub fn export(&self) -> Result<String, Error> {
        self.dictionary.export_json()
    }

    pub fn clear(&mut self) {
        self.dictionary.clear();
        self.rebuild();
    }

    pub fn translate(&self, text: &str, direction: Direction) -> Translation {
        wordswap::translate(text, direction, &self.index)
    }

    /// Translates `text`, then feeds the result back in the opposite
    /// direction. Returns both legs.
    pub fn swap(&self, text: &str, direction: Direction) -> (Translation, Translation) {
        let there = self.translate(text, direction);
        let back = self.translate(&there.output, direction.swap());
        (there, back)
    }

    fn rebuild(&mut self) {
        self.index = Index::rebuild(&self.dictionary);
    }
}

impl Default for WordswapFacade {
    fn default() -> Self {
        Self::new(Dictionary::with_defaults())
    }
}
