//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear correctness rules.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, LetterClass};
pub use word::{Word, WordError};
