//! Formatting utilities for guess feedback

use crate::core::{Feedback, LetterClass, Word};
use colored::Colorize;
use rustc_hash::FxHashMap;

/// Render a guess with one colored letter per position
///
/// Exact matches are green, misplaced letters yellow, absent letters red.
#[must_use]
pub fn colorize_feedback(feedback: &Feedback) -> String {
    let mut result = String::new();
    for (_, ch, class) in feedback.iter() {
        let letter = (ch as char).to_string();
        let colored = match class {
            LetterClass::Exact => letter.green().bold(),
            LetterClass::Present => letter.yellow().bold(),
            LetterClass::Absent => letter.red(),
        };
        result.push_str(&colored.to_string());
    }
    result
}

/// Summarize feedback as three sorted sets
///
/// Produces `Green={..} - Orange={..} - Red={..}` with one entry per guess
/// letter. Letters that occur more than once in the guess carry their
/// occurrence number (E1, E2) so duplicates stay distinguishable.
#[must_use]
pub fn feedback_sets(word: &Word, feedback: &Feedback) -> String {
    let totals = word.letter_counts();
    let mut seen: FxHashMap<u8, u8> = FxHashMap::default();

    let mut green = Vec::new();
    let mut orange = Vec::new();
    let mut red = Vec::new();

    for (_, ch, class) in feedback.iter() {
        let occurrence = seen.entry(ch).or_insert(0);
        *occurrence += 1;

        let label = if totals.get(&ch).copied().unwrap_or(0) > 1 {
            format!("{}{}", ch as char, occurrence)
        } else {
            (ch as char).to_string()
        };

        match class {
            LetterClass::Exact => green.push(label),
            LetterClass::Present => orange.push(label),
            LetterClass::Absent => red.push(label),
        }
    }

    format!(
        "{} Green={} - Orange={} - Red={}",
        word.text(),
        set_notation(green),
        set_notation(orange),
        set_notation(red)
    )
}

fn set_notation(mut labels: Vec<String>) -> String {
    labels.sort();
    format!("{{{}}}", labels.join(", "))
}
