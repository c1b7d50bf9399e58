//! Game word representation
//!
//! A Word stores an uppercase ASCII word along with helpers for letter
//! counting used by feedback classification.

use rustc_hash::FxHashMap;
use std::fmt;

/// An uppercase word made of ASCII letters
///
/// Words are case-normalized on construction and immutable afterwards.
/// Length is not fixed here; a [`crate::words::WordSet`] enforces a uniform
/// length across its members.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is uppercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty, non-ASCII, or contains
    /// anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("cran3").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True if the word has no letters (never holds for a constructed Word)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// First letter of the word
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> u8 {
        self.text.as_bytes()[0]
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback classification with duplicate letters.
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.text.as_bytes() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.bytes(), b"CRANE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_mixed_case_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "CRANE");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  hello\n").unwrap();
        assert_eq!(word.text(), "HELLO");
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
        assert!(matches!(Word::new("   "), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cr an").is_err()); // Inner space
        assert!(Word::new("cran!").is_err()); // Punctuation
    }

    #[test]
    fn word_first_letter() {
        assert_eq!(Word::new("tiger").unwrap().first_letter(), b'T');
        assert_eq!(Word::new("apple").unwrap().first_letter(), b'A');
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'S'), Some(&1));
        assert_eq!(counts.get(&b'P'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'D'), Some(&1));
        assert_eq!(counts.get(&b'Z'), None);
    }

    #[test]
    fn word_letter_counts_all_unique() {
        let counts = Word::new("crane").unwrap().letter_counts();
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&count| count == 1));
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let a = Word::new("apple").unwrap();
        let b = Word::new("baker").unwrap();
        assert!(a < b);
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}
