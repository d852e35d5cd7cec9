//! Dictionary word representation
//!
//! A Word is normally a non-empty run of ASCII letters, normalized to
//! uppercase. Dictionary entries are taken as given (uppercased), so they may
//! also hold characters no guess can ever reveal.

use super::Letter;
use std::fmt;

/// An uppercase dictionary word of any length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, contains non-ASCII characters,
    /// or contains anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "APPLE");
    ///
    /// assert!(Word::new("don't").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Take a dictionary entry as it is, uppercased
    ///
    /// Unlike [`Word::new`] nothing is rejected: apostrophes, hyphens and other
    /// characters stay in place and simply never match a guessed letter.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    ///
    /// let word = Word::from_entry("don't");
    /// assert_eq!(word.text(), "DON'T");
    /// assert_eq!(word.len(), 5);
    /// ```
    #[must_use]
    pub fn from_entry(text: impl AsRef<str>) -> Self {
        Self {
            text: text.as_ref().to_uppercase(),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// True only for an empty dictionary entry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Uppercase bytes of the word (one per character for ASCII words)
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.text.as_bytes().contains(&letter.byte())
    }

    /// Character positions where a letter appears, in ascending order
    pub fn positions_of(&self, letter: Letter) -> impl Iterator<Item = usize> + '_ {
        self.text
            .chars()
            .enumerate()
            .filter(move |&(_, ch)| ch == letter.as_char())
            .map(|(i, _)| i)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
