//! Terminal output formatting
//!
//! Rendering of guess feedback and dictionary statistics.

pub mod display;
pub mod formatters;

pub use display::{letter_frequencies, print_letter_stats};
pub use formatters::{colorize_feedback, feedback_sets};
