//! Interactive hint mode
//!
//! Shows the dictionary's letter-frequency histogram, then filters candidate
//! words by a masked template and, optionally, by known letters.

use super::get_user_input;
use crate::matcher::{Template, match_constraint, match_template};
use crate::output::print_letter_stats;
use crate::words::WordSet;
use anyhow::Result;

/// Run the interactive hint session against `words`
///
/// # Errors
/// Returns an error on I/O failure or when the entered template is invalid
/// or has the wrong length.
pub fn run_hint(words: &WordSet) -> Result<()> {
    print_letter_stats(words);
    println!();

    let template_input = get_user_input("Enter template (use '*' for unknown positions)")?;
    let template = Template::parse(&template_input)?;
    let candidates = match_template(words, &template)?;

    let letters_input = get_user_input(
        "Enter letters that could replace wildcards for extended hints (blank or 1 for none)",
    )?;
    let letters = parse_letters(&letters_input);

    if letters.is_empty() {
        print_candidates(&candidates.iter().map(|w| w.text()).collect::<Vec<_>>());
        return Ok(());
    }

    // Extended hints only make sense with fewer known letters than open
    // positions; otherwise the template itself is the better query.
    if letters.len() >= template.wildcards() {
        println!(
            "Need fewer letters than wildcards ({} given, {} wildcards)",
            letters.len(),
            template.wildcards()
        );
        return Ok(());
    }

    let constrained = match_constraint(&candidates, &letters);
    print_candidates(&constrained.iter().map(|w| w.text()).collect::<Vec<_>>());
    Ok(())
}

/// Interpret the extended-hint input; "1" and blank both mean none
fn parse_letters(input: &str) -> Vec<u8> {
    if input.is_empty() || input == "1" {
        return Vec::new();
    }
    input
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase() as u8)
        .collect()
}

fn print_candidates(candidates: &[&str]) {
    if candidates.is_empty() {
        println!("No matching words");
        return;
    }
    println!("{} matching words:", candidates.len());
    for word in candidates {
        println!("  {word}");
    }
}
