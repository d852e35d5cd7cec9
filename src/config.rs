//! Game configuration
//!
//! Lower bounds for the word length and guess budget a game may be started
//! with, which `GameConfig` enforces. The upper bounds only limit what the
//! prompts and command line accept.

use std::fmt;

/// Shortest word length a game may use
pub const MIN_WORD_LENGTH: usize = 2;
/// Longest word length offered by the prompts and command line
pub const MAX_WORD_LENGTH: usize = 40;
/// Smallest guess budget
pub const MIN_GUESSES: u32 = 1;
/// Largest guess budget offered by the prompts and command line
pub const MAX_GUESSES: u32 = 40;
/// Guess budget used when none is given
pub const DEFAULT_GUESSES: u32 = 6;

/// Validated settings for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    guess_limit: u32,
}

/// Error type for settings below their minimum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    WordLengthTooShort(usize),
    GuessLimitTooSmall(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordLengthTooShort(len) => {
                write!(f, "Word length must be at least {MIN_WORD_LENGTH}, got {len}")
            }
            Self::GuessLimitTooSmall(limit) => {
                write!(f, "Guess limit must be at least {MIN_GUESSES}, got {limit}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Create a configuration, checking both lower bounds
    ///
    /// # Errors
    /// Returns `ConfigError` if the word length is below 2 or the guess limit
    /// is zero.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::config::GameConfig;
    ///
    /// let config = GameConfig::new(5, 6).unwrap();
    /// assert_eq!(config.word_length(), 5);
    ///
    /// assert!(GameConfig::new(1, 6).is_err());
    /// assert!(GameConfig::new(5, 0).is_err());
    /// assert!(GameConfig::new(5, 50).is_ok());
    /// ```
    pub const fn new(word_length: usize, guess_limit: u32) -> Result<Self, ConfigError> {
        if word_length < MIN_WORD_LENGTH {
            return Err(ConfigError::WordLengthTooShort(word_length));
        }

        if guess_limit < MIN_GUESSES {
            return Err(ConfigError::GuessLimitTooSmall(guess_limit));
        }

        Ok(Self {
            word_length,
            guess_limit,
        })
    }

    /// Length of the hidden word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of missed guesses allowed
    #[inline]
    #[must_use]
    pub const fn guess_limit(&self) -> u32 {
        self.guess_limit
    }
}
