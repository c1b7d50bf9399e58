//! Template matching for hints
//!
//! Filters a [`WordSet`] against a positional template where `*` marks a
//! free position, and optionally narrows the candidates by required letters.

use crate::core::Word;
use crate::words::WordSet;
use std::fmt;

/// Wildcard marker in a template
pub const WILDCARD: u8 = b'*';

/// Error type for template operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    LengthMismatch { template: usize, word_len: usize },
    InvalidCharacter(char),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { template, word_len } => {
                write!(
                    f,
                    "Template length {template} does not match word length {word_len}"
                )
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Template may only contain letters and '*', got '{ch}'")
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// A positional pattern of fixed letters and wildcards
///
/// Each position is either an uppercase letter (which a matching word must
/// carry at that position) or `*` (unconstrained).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pattern: Vec<u8>,
}

impl Template {
    /// Parse a template string such as `T**ER`
    ///
    /// Letters are uppercased; any character other than a letter or `*` is
    /// rejected.
    ///
    /// # Errors
    /// Returns `TemplateError::InvalidCharacter` on the first offending
    /// character.
    pub fn parse(input: &str) -> Result<Self, TemplateError> {
        let mut pattern = Vec::with_capacity(input.len());
        for ch in input.trim().chars() {
            if ch == '*' {
                pattern.push(WILDCARD);
            } else if ch.is_ascii_alphabetic() {
                pattern.push(ch.to_ascii_uppercase() as u8);
            } else {
                return Err(TemplateError::InvalidCharacter(ch));
            }
        }
        Ok(Self { pattern })
    }

    /// Number of positions in the template
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// True if the template has no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Number of wildcard positions
    #[must_use]
    pub fn wildcards(&self) -> usize {
        self.pattern.iter().filter(|&&b| b == WILDCARD).count()
    }

    fn matches(&self, word: &Word) -> bool {
        self.pattern
            .iter()
            .zip(word.bytes())
            .all(|(&p, &w)| p == WILDCARD || p == w)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.pattern {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

/// All members of `words` matching `template`
///
/// A word matches when every non-wildcard position of the template equals
/// the word's letter at that position. Results come back in the set's
/// internal order.
///
/// # Errors
/// Returns `TemplateError::LengthMismatch` if the template length differs
/// from the set's word length.
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::matcher::{Template, match_template};
/// use wordle_game::words::WordSet;
///
/// let source = ["tiger", "timer", "title", "table"].iter().map(|&w| Word::new(w).unwrap());
/// let words = WordSet::new(5, source);
/// let template = Template::parse("T**ER").unwrap();
///
/// let matches = match_template(&words, &template).unwrap();
/// let texts: Vec<&str> = matches.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["TIGER", "TIMER"]);
/// ```
pub fn match_template<'a>(
    words: &'a WordSet,
    template: &Template,
) -> Result<Vec<&'a Word>, TemplateError> {
    if template.len() != words.word_len() {
        return Err(TemplateError::LengthMismatch {
            template: template.len(),
            word_len: words.word_len(),
        });
    }

    Ok(words.iter().filter(|w| template.matches(w)).collect())
}

/// Narrow `candidates` to words satisfying the required-letter count rule
///
/// A candidate is retained iff the number of its positions holding a letter
/// contained in `letters` equals `letters.len()`. Note this counts
/// position-wise membership rather than per-letter frequency: listing a
/// letter twice demands two positions that hit the membership test, not two
/// distinct letters.
#[must_use]
pub fn match_constraint<'a>(candidates: &[&'a Word], letters: &[u8]) -> Vec<&'a Word> {
    candidates
        .iter()
        .filter(|word| {
            let hits = word.bytes().iter().filter(|&b| letters.contains(b)).count();
            hits == letters.len()
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_set(words: &[&str]) -> WordSet {
        WordSet::new(5, words.iter().map(|&w| Word::new(w).unwrap()))
    }

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn parse_accepts_letters_and_wildcards() {
        let template = Template::parse("t**er").unwrap();
        assert_eq!(template.to_string(), "T**ER");
        assert_eq!(template.len(), 5);
        assert_eq!(template.wildcards(), 2);
    }

    #[test]
    fn parse_rejects_other_characters() {
        assert_eq!(
            Template::parse("T?*ER"),
            Err(TemplateError::InvalidCharacter('?'))
        );
        assert_eq!(
            Template::parse("T1*ER"),
            Err(TemplateError::InvalidCharacter('1'))
        );
    }

    #[test]
    fn match_template_fixed_positions() {
        let words = word_set(&["tiger", "timer", "title", "table", "totem"]);
        let template = Template::parse("T**ER").unwrap();

        let matches = match_template(&words, &template).unwrap();
        assert_eq!(texts(&matches), vec!["TIGER", "TIMER"]);
    }

    #[test]
    fn match_template_all_wildcards_matches_everything() {
        let words = word_set(&["tiger", "timer", "title"]);
        let template = Template::parse("*****").unwrap();

        let matches = match_template(&words, &template).unwrap();
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn match_template_no_wildcards_round_trip() {
        let words = word_set(&["tiger", "timer"]);

        let exact = Template::parse("TIGER").unwrap();
        let matches = match_template(&words, &exact).unwrap();
        assert_eq!(texts(&matches), vec!["TIGER"]);

        let missing = Template::parse("TITLE").unwrap();
        let matches = match_template(&words, &missing).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn match_template_length_mismatch() {
        let words = word_set(&["tiger"]);
        let template = Template::parse("T**E").unwrap();

        assert_eq!(
            match_template(&words, &template),
            Err(TemplateError::LengthMismatch {
                template: 4,
                word_len: 5
            })
        );
    }

    #[test]
    fn match_constraint_retains_exact_hit_counts() {
        let words = word_set(&["tiger", "title"]);
        let candidates: Vec<&Word> = words.iter().collect();

        // TIGER has exactly one position holding R; TITLE has none
        let constrained = match_constraint(&candidates, b"R");
        assert_eq!(texts(&constrained), vec!["TIGER"]);
    }

    #[test]
    fn match_constraint_counts_positions_not_letters() {
        let words = word_set(&["speed", "erase", "crane"]);
        let candidates: Vec<&Word> = words.iter().collect();

        // Listing E twice demands two positions holding E: SPEED and ERASE
        // qualify with two Es each, CRANE has only one.
        let constrained = match_constraint(&candidates, b"EE");
        assert_eq!(texts(&constrained), vec!["SPEED", "ERASE"]);
    }

    #[test]
    fn match_constraint_mixed_letters_share_the_count() {
        let words = word_set(&["tiger", "title"]);
        let candidates: Vec<&Word> = words.iter().collect();

        // Two required letters need two hits in total across either letter:
        // TIGER holds G and R (two hits), TITLE holds neither.
        let constrained = match_constraint(&candidates, b"GR");
        assert_eq!(texts(&constrained), vec!["TIGER"]);
    }

    #[test]
    fn match_constraint_empty_letters_requires_zero_hits() {
        let words = word_set(&["tiger", "title"]);
        let candidates: Vec<&Word> = words.iter().collect();

        // Zero required letters: every candidate trivially has zero hits
        let constrained = match_constraint(&candidates, b"");
        assert_eq!(constrained.len(), 2);
    }
}
