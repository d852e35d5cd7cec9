//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files and to inspect which
//! word lengths a dictionary can support.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and blank lines skipped. Case and content are left to the
/// game, which normalizes and filters entries itself.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Split text into trimmed, non-empty lines
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert embedded string slice to owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

/// Count non-empty entries per length in characters, as the game measures them
#[must_use]
pub fn length_histogram<S: AsRef<str>>(words: &[S]) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for word in words {
        let len = word.as_ref().to_uppercase().chars().count();
        if len > 0 {
            *histogram.entry(len).or_insert(0) += 1;
        }
    }
    histogram
}

/// Word lengths within `min..=max` that at least one word has, ascending
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::available_lengths;
///
/// let words = ["ox", "cat", "dog", "a", "encyclopedia"];
/// assert_eq!(available_lengths(&words, 2, 10), vec![2, 3]);
/// ```
#[must_use]
pub fn available_lengths<S: AsRef<str>>(words: &[S], min: usize, max: usize) -> Vec<usize> {
    length_histogram(words)
        .into_keys()
        .filter(|len| (min..=max).contains(len))
        .collect()
}
