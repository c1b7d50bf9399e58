//! Command implementations

pub mod hint;
pub mod play;

pub use hint::run_hint;
pub use play::run_play;

use std::io::{self, Write};

/// Prompt on stdout and read one trimmed line from stdin
///
/// # Errors
/// Returns an error if stdout cannot be flushed or stdin cannot be read.
pub(crate) fn get_user_input(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
