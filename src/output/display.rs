//! Dictionary statistics display

use crate::words::WordSet;
use std::collections::BTreeMap;

/// Count every letter occurrence across all members of `words`
///
/// Returns `(letter, count)` pairs in alphabetical order.
#[must_use]
pub fn letter_frequencies(words: &WordSet) -> Vec<(char, usize)> {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for word in words {
        for &b in word.bytes() {
            *counts.entry(b as char).or_insert(0) += 1;
        }
    }
    counts.into_iter().collect()
}

/// Print a letter-frequency histogram for the whole dictionary
///
/// One line per letter: occurrence count, share as a percentage, and a bar
/// of `*` scaled to the rounded percentage.
pub fn print_letter_stats(words: &WordSet) {
    let frequencies = letter_frequencies(words);
    let total: usize = frequencies.iter().map(|&(_, count)| count).sum();
    if total == 0 {
        return;
    }

    for (letter, count) in frequencies {
        let pct = (count as f64 / total as f64) * 100.0;
        let bar = "*".repeat(pct.round() as usize);
        println!("{letter}: {count:>4} {pct:>5.2}% {bar}");
    }
}
