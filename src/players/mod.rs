//! Automated Hangman players
//!
//! Guessers that play the engine without a human, used by the simulation
//! command.

mod candidate;
pub mod guesser;

pub use candidate::{CandidateGuesser, letter_coverage};
pub use guesser::{FrequencyGuesser, Guesser, GuesserType, RandomGuesser};
