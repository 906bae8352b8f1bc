//! Word extraction from text files.
//!
//! A word is a maximal run of ASCII letters. Runs shorter than the caller's
//! minimum are dropped. Files that cannot be read are skipped and counted so
//! the caller can decide whether to mention them.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;

static LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-zA-Z]+").expect("letter-run pattern is valid"));

/// Words gathered from a set of files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collected {
    /// Extracted words, in file order and then text order.
    pub words: Vec<String>,
    /// Number of files that could not be read.
    pub skipped: usize,
}

/// Parses a `-N` threshold argument into `N`.
///
/// The argument must be a dash followed by one or more ASCII digits.
pub fn parse_min_length(arg: &str) -> Result<usize, ConfigError> {
    let invalid = || ConfigError::InvalidLength(arg.to_string());

    let digits = arg.strip_prefix('-').ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // all digits, so the only failure left is overflow
    digits.parse().map_err(|_| invalid())
}

/// Returns every run of letters in `text` at least `min_len` long.
///
/// A minimum of 0 behaves like 1: empty runs are never words.
pub fn extract(text: &str, min_len: usize) -> Vec<String> {
    LETTER_RUN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|run| run.len() >= min_len)
        .map(str::to_string)
        .collect()
}

/// Extracts words from every readable file in `paths`.
pub fn collect_files<P: AsRef<Path>>(paths: &[P], min_len: usize) -> Collected {
    let mut collected = Collected::default();

    for path in paths {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes);
                let words = extract(&text, min_len);
                log::debug!("{} words from {}", words.len(), path.display());
                collected.words.extend(words);
            }
            Err(e) => {
                log::debug!("skipping {}: {}", path.display(), e);
                collected.skipped += 1;
            }
        }
    }

    collected
}
