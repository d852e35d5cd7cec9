//! Revealed-word pattern
//!
//! A pattern holds one cell per position of the target word: either the blank
//! marker `_` or the uppercase letter revealed there. Patterns also serve as
//! the grouping key when candidates are split into word families.

use super::{Letter, Word};
use std::fmt;
use std::str::FromStr;

/// Marker for an unrevealed position
pub const BLANK: char = '_';

const BLANK_BYTE: u8 = b'_';

/// Revealed letters of the hidden word, blanks elsewhere
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<u8>);

impl Pattern {
    /// An all-blank pattern of the given length
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self(vec![BLANK_BYTE; len])
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The revealed letter at a position, or `None` for a blank
    ///
    /// # Panics
    /// Panics if `position >= len()`.
    #[must_use]
    pub fn cell(&self, position: usize) -> Option<Letter> {
        match self.0[position] {
            BLANK_BYTE => None,
            b => Letter::new(b as char).ok(),
        }
    }

    /// Every position has been revealed
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.0.contains(&BLANK_BYTE)
    }

    /// Count of blank positions
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.0.iter().filter(|&&b| b == BLANK_BYTE).count()
    }

    /// Check whether a letter is revealed anywhere
    #[must_use]
    pub fn reveals(&self, letter: Letter) -> bool {
        self.0.contains(&letter.byte())
    }

    /// The pattern `word` would produce if `letter` were revealed
    ///
    /// Positions holding `letter` in `word` show it; every other position keeps
    /// this pattern's cell.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Letter, Pattern, Word};
    ///
    /// let pattern: Pattern = "_PP__".parse().unwrap();
    /// let word = Word::new("apple").unwrap();
    /// let key = pattern.reveal_key(&word, Letter::new('e').unwrap());
    /// assert_eq!(key.to_string(), "_PP_E");
    /// ```
    #[must_use]
    pub fn reveal_key(&self, word: &Word, letter: Letter) -> Self {
        debug_assert_eq!(word.len(), self.len(), "word length must match pattern");

        let mut cells = self.0.clone();
        for position in word.positions_of(letter) {
            if let Some(cell) = cells.get_mut(position) {
                *cell = letter.byte();
            }
        }

        Self(cells)
    }

    /// Check that `word` would have produced exactly this pattern
    ///
    /// Revealed cells must match the word's letters, and no blank position may
    /// hold one of the `guessed` letters.
    #[must_use]
    pub fn is_consistent_with(&self, word: &Word, guessed: &[Letter]) -> bool {
        if word.len() != self.len() {
            return false;
        }

        word.text().chars().zip(&self.0).all(|(w, &p)| {
            if p == BLANK_BYTE {
                !guessed.iter().any(|l| l.as_char() == w)
            } else {
                w == p as char
            }
        })
    }

    /// The cells as characters, blanks included
    #[must_use]
    pub fn to_chars(&self) -> Vec<char> {
        self.0.iter().map(|&b| b as char).collect()
    }
}

impl FromStr for Pattern {
    type Err = String;

    /// Parse strings like `"__A_E"`; letters may be any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Pattern must not be empty".to_string());
        }

        s.chars()
            .map(|ch| match ch {
                BLANK => Ok(BLANK_BYTE),
                _ => Letter::new(ch)
                    .map(Letter::byte)
                    .map_err(|_| format!("Invalid pattern string: {s}")),
            })
            .collect::<Result<Vec<u8>, String>>()
            .map(Self)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn blank_pattern() {
        let pattern = Pattern::blank(4);
        assert_eq!(pattern.to_string(), "____");
        assert_eq!(pattern.len(), 4);
        assert_eq!(pattern.blanks(), 4);
        assert!(!pattern.is_complete());
        assert_eq!(pattern.cell(0), None);
    }

    #[test]
    fn reveal_key_marks_every_occurrence() {
        let key = Pattern::blank(5).reveal_key(&word("apple"), letter('p'));
        assert_eq!(key.to_string(), "_PP__");
        assert_eq!(key.cell(1), Some(letter('P')));
    }

    #[test]
    fn reveal_key_absent_letter_keeps_pattern() {
        let pattern: Pattern = "____E".parse().unwrap();
        let key = pattern.reveal_key(&word("stone"), letter('z'));
        assert_eq!(key, pattern);
    }

    #[test]
    fn reveal_key_keeps_prior_letters() {
        let pattern: Pattern = "S___E".parse().unwrap();
        let key = pattern.reveal_key(&word("stone"), letter('o'));
        assert_eq!(key.to_string(), "S_O_E");
    }

    #[test]
    fn complete_pattern() {
        let pattern: Pattern = "grape".parse().unwrap();
        assert!(pattern.is_complete());
        assert_eq!(pattern.blanks(), 0);
        assert!(pattern.reveals(letter('g')));
    }

    #[test]
    fn consistency_checks_blanks_and_letters() {
        let pattern: Pattern = "____E".parse().unwrap();
        let guessed = [letter('E'), letter('Z')];

        assert!(pattern.is_consistent_with(&word("stone"), &guessed));
        // E also hidden at a blank position
        assert!(!pattern.is_consistent_with(&word("eerie"), &guessed));
        // revealed cell mismatch
        assert!(!pattern.is_consistent_with(&word("stony"), &guessed));
        // wrong length
        assert!(!pattern.is_consistent_with(&word("stones"), &guessed));
    }

    #[test]
    fn parse_rejects_invalid() {
        assert!("".parse::<Pattern>().is_err());
        assert!("__-__".parse::<Pattern>().is_err());
        assert!("_1_".parse::<Pattern>().is_err());
    }

    #[test]
    fn to_chars_includes_blanks() {
        let pattern: Pattern = "_a_".parse().unwrap();
        assert_eq!(pattern.to_chars(), vec!['_', 'A', '_']);
    }
}
