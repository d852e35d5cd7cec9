//! Candidate-aware guesser
//!
//! Counts, for every unguessed letter, how many surviving candidates contain
//! it, and guesses the letter with the widest coverage.

use super::Guesser;
use crate::core::{Letter, Word};
use crate::game::GameState;
use rustc_hash::FxHashMap;

/// Guesses the unguessed letter present in the most remaining candidates
///
/// Ties go to the alphabetically first letter. Once no candidate holds an
/// unguessed letter, falls back to the first unguessed letter of the alphabet.
pub struct CandidateGuesser;

impl Guesser for CandidateGuesser {
    fn next_letter(&mut self, game: &GameState) -> Option<Letter> {
        let coverage = letter_coverage(game.candidates(), |l| game.has_guessed(l));

        let best = coverage
            .into_iter()
            .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then(b.cmp(a)))
            .map(|(letter, _)| letter);

        best.or_else(|| Letter::alphabet().find(|&l| !game.has_guessed(l)))
    }
}

/// Number of candidates containing each letter, skipping `excluded` letters
///
/// A word with a repeated letter counts once for that letter.
///
/// # Examples
/// ```
/// use evil_hangman::core::{Letter, Word};
/// use evil_hangman::players::letter_coverage;
///
/// let words = vec![Word::new("look").unwrap(), Word::new("book").unwrap()];
/// let coverage = letter_coverage(&words, |_| false);
/// assert_eq!(coverage.get(&Letter::new('o').unwrap()), Some(&2));
/// assert_eq!(coverage.get(&Letter::new('b').unwrap()), Some(&1));
/// ```
pub fn letter_coverage(
    candidates: &[Word],
    excluded: impl Fn(Letter) -> bool,
) -> FxHashMap<Letter, usize> {
    let mut counts: FxHashMap<Letter, usize> = FxHashMap::default();

    for word in candidates {
        let mut seen = [false; 26];
        for letter in word.bytes().iter().filter_map(|&b| Letter::new(b as char).ok()) {
            if seen[letter.index()] || excluded(letter) {
                continue;
            }
            seen[letter.index()] = true;
            *counts.entry(letter).or_insert(0) += 1;
        }
    }

    counts
}
