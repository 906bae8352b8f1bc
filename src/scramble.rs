//! Case normalization and placement ordering for the word list.
//!
//! The ordering only changes the character of the finished puzzle: some words
//! are stored back to front and longer-sorting words get first pick of the
//! grid. It has no effect on whether the build is correct.

use rand::Rng;

/// Uppercases every word in place.
pub fn capitalize(words: &mut [String]) {
    for word in words.iter_mut() {
        *word = word.to_uppercase();
    }
}

/// Returns the characters of `word` in reverse order.
pub fn reversed(word: &str) -> String {
    word.chars().rev().collect()
}

/// Reverses a random selection of words, then sorts descending.
///
/// Draws a round count uniformly from `1..=len`. Each round draws a 1-based
/// index from the same range and reverses that word; an index that falls
/// outside the list is skipped. A word picked an even number of times ends up
/// unreversed.
pub fn scramble<R: Rng + ?Sized>(words: &mut [String], rng: &mut R) {
    let count = words.len();
    if count == 0 {
        return;
    }

    let rounds = rng.gen_range(1..=count);
    for _ in 0..rounds {
        let idx = rng.gen_range(1..=count) - 1;
        if let Some(word) = words.get_mut(idx) {
            *word = reversed(word);
        }
    }

    words.sort_unstable_by(|a, b| b.cmp(a));
}
