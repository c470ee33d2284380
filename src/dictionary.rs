use std::collections::{BTreeSet, HashSet};

/// A lookup of legal words. How the words are stored or loaded is up to the implementor.
///
/// Words passed to [contains](Dictionary::contains) are upper case.
pub trait Dictionary {
    /// # Returns
    ///
    /// Whether `word` is a legal word.
    fn contains(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl Dictionary for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Dictionary for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

/// A [dictionary](Dictionary) built from a list of tokens, stored and matched in upper case.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Parses a newline or whitespace separated token list.
    pub fn from_text(text: &str) -> WordList {
        text.split_whitespace().collect()
    }

    /// # Returns
    ///
    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// # Returns
    ///
    /// Whether the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> WordList {
        WordList {
            words: iter
                .into_iter()
                .map(|word| word.as_ref().to_uppercase())
                .collect(),
        }
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }
}
