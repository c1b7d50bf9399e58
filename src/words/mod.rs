//! Word dictionary abstraction
//!
//! A [`WordSet`] is an immutable collection of unique words sharing one
//! length, built once at startup and read-only afterwards. Also provides the
//! embedded default dictionary and file loading.

pub mod embedded;
pub mod loader;

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error returned when selecting from an empty word set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySetError;

impl fmt::Display for EmptySetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot select a word from an empty word set")
    }
}

impl std::error::Error for EmptySetError {}

/// An immutable set of unique words of identical length
///
/// Construction silently discards source words whose length does not match
/// the configured length, mirroring how the dictionary file is filtered.
/// Insertion order of the surviving words is the set's internal order.
#[derive(Debug, Clone)]
pub struct WordSet {
    word_len: usize,
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordSet {
    /// Build a set of words of length `word_len` from `source`
    ///
    /// Words of any other length are dropped without error; duplicates are
    /// kept once, at their first position.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::words::WordSet;
    ///
    /// let source = ["tiger", "cat", "title"].iter().map(|&w| Word::new(w).unwrap());
    /// let words = WordSet::new(5, source);
    /// assert_eq!(words.len(), 2);
    /// assert!(words.contains("TIGER"));
    /// assert!(!words.contains("CAT"));
    /// ```
    #[must_use]
    pub fn new(word_len: usize, source: impl IntoIterator<Item = Word>) -> Self {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for word in source {
            if word.len() == word_len && index.insert(word.text().to_string()) {
                words.push(word);
            }
        }

        Self {
            word_len,
            words,
            index,
        }
    }

    /// True iff `word` (case-normalized) is a member
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_uppercase())
    }

    /// All members starting with `letter`, sorted ascending
    ///
    /// Returns an empty vector if no member starts with `letter`.
    #[must_use]
    pub fn words_starting_with(&self, letter: char) -> Vec<&Word> {
        let letter = letter.to_ascii_uppercase() as u8;
        let mut matching: Vec<&Word> = self
            .words
            .iter()
            .filter(|w| w.first_letter() == letter)
            .collect();
        matching.sort();
        matching
    }

    /// The length shared by every member
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of members
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the set has no members
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Select one member uniformly at random
    ///
    /// Randomness is supplied by the caller so sessions can be seeded for
    /// deterministic tests.
    ///
    /// # Errors
    /// Returns `EmptySetError` if the set has no members.
    pub fn random_member<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, EmptySetError> {
        self.words.as_slice().choose(rng).ok_or(EmptySetError)
    }

    /// Iterate over the members in internal order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
