//! Guessable letter representation
//!
//! A Letter is a single ASCII alphabetic character, always stored uppercase so
//! that `'a'` and `'A'` are the same guess.

use std::fmt;
use std::str::FromStr;

/// A single guessable letter (A-Z)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for invalid letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    Empty,
    TooLong(usize),
    NotAlphabetic(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No letter given"),
            Self::TooLong(len) => write!(f, "Expected one letter, got {len} characters"),
            Self::NotAlphabetic(ch) => write!(f, "'{ch}' is not a letter from A to Z"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Create a letter from a character, normalizing case
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` for anything outside `a-z`/`A-Z`.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Letter;
    ///
    /// assert_eq!(Letter::new('e').unwrap(), Letter::new('E').unwrap());
    /// assert!(Letter::new('3').is_err());
    /// ```
    pub const fn new(ch: char) -> Result<Self, LetterError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self((ch as u8).to_ascii_uppercase()))
        } else {
            Err(LetterError::NotAlphabetic(ch))
        }
    }

    /// Parse a line of user input that should hold exactly one letter
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `LetterError` if the input is empty, longer than one character,
    /// or not alphabetic.
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(LetterError::Empty),
            (Some(ch), None) => Self::new(ch),
            (Some(_), Some(_)) => Err(LetterError::TooLong(input.trim().chars().count())),
        }
    }

    /// The uppercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// The uppercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based index in the alphabet (A = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// All 26 letters in alphabetical order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl FromStr for Letter {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
