//! Wordle Game - CLI
//!
//! Command-line word-guessing game plus a hint utility that filters
//! candidate words by a masked template.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{run_hint, run_play},
    game::DEFAULT_GUESS_LIMIT,
    words::{WordSet, embedded::WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Command-line Wordle-style word game with template-based hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a word list file (defaults to the embedded dictionary)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Word length for this session
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    word_length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play {
        /// Number of attempts before the game is lost
        #[arg(short = 'g', long, default_value_t = DEFAULT_GUESS_LIMIT)]
        guess_limit: usize,
    },

    /// Show letter statistics and filter candidates by a template
    Hint,
}

/// Build the session word set from the embedded list or a file
fn load_word_set(wordlist: Option<&str>, word_length: usize) -> Result<WordSet> {
    let source = match wordlist {
        Some(path) => {
            loader::load_from_file(path).with_context(|| format!("Failed to read {path}"))?
        }
        None => loader::words_from_slice(WORDS),
    };

    let words = WordSet::new(word_length, source);
    if words.is_empty() {
        bail!("Word list contains no words of length {word_length}");
    }
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_word_set(cli.wordlist.as_deref(), cli.word_length)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        guess_limit: DEFAULT_GUESS_LIMIT,
    });

    match command {
        Commands::Play { guess_limit } => run_play(&words, guess_limit),
        Commands::Hint => run_hint(&words),
    }
}
