//! Interactive game mode
//!
//! Runs one game session on the terminal: prompts for a guess per attempt,
//! re-prompts on invalid input without consuming the attempt, and prints the
//! colored board after every valid guess.

use super::get_user_input;
use crate::game::{Game, GameStatus};
use crate::output::{colorize_feedback, feedback_sets};
use crate::words::WordSet;
use anyhow::Result;
use colored::Colorize;

/// Run an interactive game session against `words`
///
/// # Errors
/// Returns an error if the word set is empty or on I/O failure while
/// prompting.
pub fn run_play(words: &WordSet, guess_limit: usize) -> Result<()> {
    let mut rng = rand::rng();
    let mut game = Game::new(words, &mut rng, guess_limit)?;

    println!();
    println!(
        "Guess the {}-letter word. You have {} attempts.",
        words.word_len(),
        game.guess_limit()
    );
    println!();

    while game.status() == GameStatus::InProgress {
        let prompt = format!(
            "Attempt {}: Please enter a {}-letter word",
            game.attempt(),
            words.word_len()
        );
        let input = get_user_input(&prompt)?;

        match game.guess(&input) {
            Ok(_) => {
                println!();
                for (word, feedback) in game.history() {
                    println!(
                        "  {}   {}",
                        colorize_feedback(feedback),
                        feedback_sets(word, feedback)
                    );
                }
                println!();
            }
            Err(reason) => {
                println!("{reason}");
            }
        }
    }

    match game.status() {
        GameStatus::Won => {
            let message = format!(
                "Found in {} attempts. Well done. The word is {}",
                game.history().len(),
                game.target()
            );
            println!("{}", message.green().bold());
        }
        GameStatus::Lost => {
            let message = format!("Sorry you lose. The word is {}", game.target());
            println!("{}", message.red().bold());
        }
        GameStatus::InProgress => unreachable!("loop exits only on a terminal state"),
    }

    Ok(())
}
