//! Wordle Game
//!
//! A command-line word-guessing game with template-based hint utilities.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, LetterClass, Word};
//!
//! // Classify a guess against the secret target
//! let guess = Word::new("speed").unwrap();
//! let target = Word::new("erase").unwrap();
//! let feedback = Feedback::classify(&guess, &target).unwrap();
//!
//! // Both Es earn misplaced credit because ERASE holds two Es
//! assert_eq!(feedback.count_of(LetterClass::Present), 3);
//! assert_eq!(feedback.count_of(LetterClass::Absent), 2);
//! ```

// Core domain types
pub mod core;

// Word dictionary
pub mod words;

// Template-based hint filtering
pub mod matcher;

// Game session state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
