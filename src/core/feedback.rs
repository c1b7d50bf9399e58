//! Guess feedback classification
//!
//! Classifies every letter of a guess against a target word:
//! - `Exact`: right letter, right position
//! - `Present`: letter occurs in the target, wrong position
//! - `Absent`: letter does not occur (or its occurrences are used up)
//!
//! Duplicate letters follow the standard rules: a letter is only credited as
//! many times as it occurs in the target, and exact matches claim their
//! occurrence before any misplaced occurrence is considered.

use super::Word;
use std::fmt;

/// Classification of one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// Right letter in the right position
    Exact,
    /// Letter occurs in the target at a different position
    Present,
    /// Letter does not occur in the target (or all occurrences already credited)
    Absent,
}

/// Error type for feedback classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    LengthMismatch { guess: usize, target: usize },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, target } => {
                write!(
                    f,
                    "Guess length {guess} does not match target length {target}"
                )
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Per-position feedback for one guess
///
/// Holds each guess letter with its class, in guess order. Two invariants
/// hold by construction:
/// - every guess letter appears in exactly one class
/// - for any letter, the Exact + Present count never exceeds that letter's
///   occurrence count in the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    scores: Vec<(u8, LetterClass)>,
}

impl Feedback {
    /// Classify `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches and debit the target's
    ///    letter budget for each.
    /// 2. Second pass, left to right over the remaining positions: mark
    ///    `Present` while the budget for that letter is still positive,
    ///    debiting as it goes; otherwise `Absent`.
    ///
    /// Because all exact matches are debited up front, a later-position
    /// exact match never steals a shared letter's single misplaced credit
    /// from an earlier non-exact position.
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterClass, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::classify(&guess, &target).unwrap();
    ///
    /// // C(absent) R(absent) A(exact) N(absent) E(exact)
    /// assert_eq!(feedback.class_at(2), LetterClass::Exact);
    /// assert_eq!(feedback.class_at(4), LetterClass::Exact);
    /// assert_eq!(feedback.count_of(LetterClass::Absent), 3);
    /// ```
    pub fn classify(guess: &Word, target: &Word) -> Result<Self, FeedbackError> {
        if guess.len() != target.len() {
            return Err(FeedbackError::LengthMismatch {
                guess: guess.len(),
                target: target.len(),
            });
        }

        let mut remaining = target.letter_counts();
        let mut scores: Vec<(u8, LetterClass)> = guess
            .bytes()
            .iter()
            .map(|&ch| (ch, LetterClass::Absent))
            .collect();

        // First pass: exact matches claim their occurrence in the target
        for (i, (&gc, &tc)) in guess.bytes().iter().zip(target.bytes()).enumerate() {
            if gc == tc {
                scores[i].1 = LetterClass::Exact;
                if let Some(count) = remaining.get_mut(&gc) {
                    *count -= 1;
                }
            }
        }

        // Second pass: misplaced letters draw on whatever budget is left
        for score in &mut scores {
            if score.1 == LetterClass::Exact {
                continue;
            }
            if let Some(count) = remaining.get_mut(&score.0)
                && *count > 0
            {
                score.1 = LetterClass::Present;
                *count -= 1;
            }
        }

        Ok(Self { scores })
    }

    /// Number of positions (equals the guess length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True if the feedback covers no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Class of the letter at `position`
    ///
    /// # Panics
    /// Panics if `position >= len()`.
    #[inline]
    #[must_use]
    pub fn class_at(&self, position: usize) -> LetterClass {
        self.scores[position].1
    }

    /// Iterate over `(position, letter, class)` triples in guess order
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8, LetterClass)> + '_ {
        self.scores
            .iter()
            .enumerate()
            .map(|(i, &(ch, class))| (i, ch, class))
    }

    /// All position-tagged letters assigned to `class`, in guess order
    #[must_use]
    pub fn in_class(&self, class: LetterClass) -> Vec<(usize, u8)> {
        self.iter()
            .filter(|&(_, _, c)| c == class)
            .map(|(i, ch, _)| (i, ch))
            .collect()
    }

    /// Number of positions assigned to `class`
    #[must_use]
    pub fn count_of(&self, class: LetterClass) -> usize {
        self.scores.iter().filter(|&&(_, c)| c == class).count()
    }

    /// True if every position is an exact match (the guess is the target)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.scores.iter().all(|&(_, c)| c == LetterClass::Exact)
    }
}
