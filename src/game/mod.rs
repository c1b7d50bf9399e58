//! Game session state machine
//!
//! A [`Game`] owns one session: a secret target word, the guesses made so
//! far with their feedback, and the attempt counter. Guess validation
//! happens before the state machine moves, so a rejected guess never
//! consumes an attempt.

use crate::core::{Feedback, Word};
use crate::words::{EmptySetError, WordSet};
use rand::Rng;
use std::fmt;

/// Default number of attempts per session
pub const DEFAULT_GUESS_LIMIT: usize = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Awaiting the next guess
    InProgress,
    /// The target was guessed
    Won,
    /// The guess limit was exhausted
    Lost,
}

/// Why a guess was rejected
///
/// All variants are recoverable: the caller reports the reason and prompts
/// again without consuming an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    TooLong(String),
    TooShort(String),
    NotInDictionary(String),
    AlreadyGuessed(String),
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong(word) => write!(f, "{word} is too long"),
            Self::TooShort(word) => write!(f, "{word} is too short"),
            Self::NotInDictionary(word) => write!(f, "{word} is not a recognized word"),
            Self::AlreadyGuessed(word) => write!(f, "{word} has already been guessed"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GuessError {}

/// One game session against a borrowed word set
#[derive(Debug)]
pub struct Game<'a> {
    words: &'a WordSet,
    target: Word,
    history: Vec<(Word, Feedback)>,
    attempt: usize,
    guess_limit: usize,
    status: GameStatus,
}

impl<'a> Game<'a> {
    /// Start a session with a randomly selected target
    ///
    /// Randomness is injected so tests can seed the target selection.
    ///
    /// # Errors
    /// Returns `EmptySetError` if `words` has no members.
    pub fn new<R: Rng + ?Sized>(
        words: &'a WordSet,
        rng: &mut R,
        guess_limit: usize,
    ) -> Result<Self, EmptySetError> {
        let target = words.random_member(rng)?.clone();
        Ok(Self::with_target(words, target, guess_limit))
    }

    /// Start a session with a known target (deterministic sessions)
    #[must_use]
    pub fn with_target(words: &'a WordSet, target: Word, guess_limit: usize) -> Self {
        Self {
            words,
            target,
            history: Vec::new(),
            attempt: 1,
            guess_limit,
            status: GameStatus::InProgress,
        }
    }

    /// Submit a guess
    ///
    /// Validates the input first; any rejection leaves the session
    /// untouched. A valid guess is recorded with its feedback, then the
    /// session transitions: to `Won` on a full match, to `Lost` when the
    /// final attempt misses, otherwise the attempt counter advances.
    ///
    /// # Errors
    /// Returns `GuessError` describing why the guess was rejected.
    pub fn guess(&mut self, input: &str) -> Result<Feedback, GuessError> {
        if self.status != GameStatus::InProgress {
            return Err(GuessError::GameOver);
        }

        let normalized = input.trim().to_uppercase();
        let word_len = self.words.word_len();

        if normalized.len() > word_len {
            return Err(GuessError::TooLong(normalized));
        }
        if normalized.len() < word_len {
            return Err(GuessError::TooShort(normalized));
        }
        if !self.words.contains(&normalized) {
            return Err(GuessError::NotInDictionary(normalized));
        }
        if self.history.iter().any(|(w, _)| w.text() == normalized) {
            return Err(GuessError::AlreadyGuessed(normalized));
        }

        let word = Word::new(&normalized).map_err(|_| GuessError::NotInDictionary(normalized))?;
        let feedback =
            Feedback::classify(&word, &self.target).expect("guess length already validated");

        let won = word == self.target;
        self.history.push((word, feedback.clone()));

        if won {
            self.status = GameStatus::Won;
        } else if self.attempt >= self.guess_limit {
            self.status = GameStatus::Lost;
        } else {
            self.attempt += 1;
        }

        Ok(feedback)
    }

    /// The secret target word
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Current attempt number, starting at 1
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    /// Configured attempt limit
    #[must_use]
    pub const fn guess_limit(&self) -> usize {
        self.guess_limit
    }

    /// Session status
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Guesses made so far with their feedback, in order
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterClass;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word_set(words: &[&str]) -> WordSet {
        WordSet::new(5, words.iter().map(|&w| Word::new(w).unwrap()))
    }

    fn game<'a>(words: &'a WordSet, target: &str) -> Game<'a> {
        Game::with_target(words, Word::new(target).unwrap(), DEFAULT_GUESS_LIMIT)
    }

    #[test]
    fn new_selects_target_from_set() {
        let words = word_set(&["tiger", "title", "timer"]);
        let mut rng = StdRng::seed_from_u64(3);
        let game = Game::new(&words, &mut rng, DEFAULT_GUESS_LIMIT).unwrap();
        assert!(words.contains(game.target().text()));
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.attempt(), 1);
    }

    #[test]
    fn new_seeded_target_is_deterministic() {
        let words = word_set(&["tiger", "title", "timer", "table"]);
        let mut rng1 = StdRng::seed_from_u64(11);
        let mut rng2 = StdRng::seed_from_u64(11);
        let game1 = Game::new(&words, &mut rng1, DEFAULT_GUESS_LIMIT).unwrap();
        let game2 = Game::new(&words, &mut rng2, DEFAULT_GUESS_LIMIT).unwrap();
        assert_eq!(game1.target(), game2.target());
    }

    #[test]
    fn new_empty_set_fails() {
        let words = word_set(&[]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(Game::new(&words, &mut rng, DEFAULT_GUESS_LIMIT).is_err());
    }

    #[test]
    fn correct_guess_wins() {
        let words = word_set(&["tiger", "title"]);
        let mut game = game(&words, "tiger");

        let feedback = game.guess("tiger").unwrap();
        assert!(feedback.is_win());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn wrong_guess_advances_attempt() {
        let words = word_set(&["tiger", "title"]);
        let mut game = game(&words, "tiger");

        let feedback = game.guess("title").unwrap();
        assert!(!feedback.is_win());
        assert_eq!(feedback.class_at(0), LetterClass::Exact);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.attempt(), 2);
    }

    #[test]
    fn validation_errors_do_not_consume_attempts() {
        let words = word_set(&["tiger", "title"]);
        let mut game = game(&words, "tiger");

        assert_eq!(
            game.guess("elephant"),
            Err(GuessError::TooLong("ELEPHANT".to_string()))
        );
        assert_eq!(game.guess("cat"), Err(GuessError::TooShort("CAT".to_string())));
        assert_eq!(
            game.guess("zzzzz"),
            Err(GuessError::NotInDictionary("ZZZZZ".to_string()))
        );

        assert_eq!(game.attempt(), 1);
        assert!(game.history().is_empty());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn repeated_guess_rejected() {
        let words = word_set(&["tiger", "title"]);
        let mut game = game(&words, "tiger");

        game.guess("title").unwrap();
        assert_eq!(
            game.guess("title"),
            Err(GuessError::AlreadyGuessed("TITLE".to_string()))
        );
        assert_eq!(game.attempt(), 2);
    }

    #[test]
    fn exhausting_the_limit_loses() {
        let words = word_set(&["tiger", "title", "timer", "table", "total", "token", "topic"]);
        let mut game = game(&words, "tiger");

        for miss in ["title", "timer", "table", "total", "token", "topic"] {
            assert_eq!(game.status(), GameStatus::InProgress);
            game.guess(miss).unwrap();
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.history().len(), 6);
        assert_eq!(game.target().text(), "TIGER");
    }

    #[test]
    fn winning_on_final_attempt() {
        let words = word_set(&["tiger", "title", "timer"]);
        let mut game = Game::with_target(&words, Word::new("tiger").unwrap(), 2);

        game.guess("title").unwrap();
        game.guess("tiger").unwrap();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn guessing_after_terminal_state_rejected() {
        let words = word_set(&["tiger", "title"]);
        let mut game = game(&words, "tiger");

        game.guess("tiger").unwrap();
        assert_eq!(game.guess("title"), Err(GuessError::GameOver));
    }

    #[test]
    fn history_preserves_order_and_feedback() {
        let words = word_set(&["tiger", "title", "timer"]);
        let mut game = game(&words, "tiger");

        game.guess("title").unwrap();
        game.guess("timer").unwrap();

        let order: Vec<&str> = game.history().iter().map(|(w, _)| w.text()).collect();
        assert_eq!(order, vec!["TITLE", "TIMER"]);
        for (word, feedback) in game.history() {
            assert_eq!(feedback.len(), word.len());
        }
    }
}
