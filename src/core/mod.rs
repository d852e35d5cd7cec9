//! Core domain types for Hangman
//!
//! Letters, words and revealed patterns. These types carry no game state and
//! perform no I/O.

mod letter;
mod pattern;
mod word;

pub use letter::{Letter, LetterError};
pub use pattern::{BLANK, Pattern};
pub use word::{Word, WordError};
