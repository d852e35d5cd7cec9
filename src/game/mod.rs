//! Game engine
//!
//! The adversarial game state and its word-family partitioning.

mod engine;

pub use engine::{GameState, GuessOutcome, GuessRecord, Partition, Verdict, WordFamily};
