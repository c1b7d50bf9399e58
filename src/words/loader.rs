//! Word list loading utilities
//!
//! Reads word lists from files or converts the embedded constants. Handles
//! both the clean one-word-per-line format and raw `#`-separated dumps.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Accepts one word per line; lines may also contain several words joined
/// by `#` (the raw dictionary dump format). Blank entries and entries that
/// fail word validation are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::words::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_raw(&content))
}

/// Parse words out of raw word list text
///
/// Splits on newlines and `#` separators, dropping blank and invalid
/// entries.
#[must_use]
pub fn parse_raw(content: &str) -> Vec<Word> {
    content
        .lines()
        .flat_map(|line| line.split('#'))
        .filter_map(|entry| {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_game::words::embedded::WORDS;
/// use wordle_game::words::loader::words_from_slice;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_raw_one_word_per_line() {
        let words = parse_raw("tiger\ntitle\n\ntimer\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["TIGER", "TITLE", "TIMER"]);
    }

    #[test]
    fn parse_raw_hash_separated_chunks() {
        let words = parse_raw("tiger#title#timer\ntable#apple");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["TIGER", "TITLE", "TIMER", "TABLE", "APPLE"]);
    }

    #[test]
    fn parse_raw_skips_blank_and_invalid_entries() {
        let words = parse_raw("tiger##\n#\ncr4ne\ntitle");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["TIGER", "TITLE"]);
    }

    #[test]
    fn parse_raw_keeps_mixed_lengths() {
        // Length filtering belongs to WordSet construction, not parsing
        let words = parse_raw("cat\ntiger\nelephant");
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "cr4ne", "", "slate"];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_embedded_into_word_set() {
        use crate::words::{WordSet, embedded::WORDS};

        let words = WordSet::new(5, words_from_slice(WORDS));
        assert_eq!(words.len(), WORDS.len());
        assert_eq!(words.word_len(), 5);
    }
}
