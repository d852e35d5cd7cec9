//! Letter-guessing strategies
//!
//! Defines the Guesser trait and concrete implementations used to play the
//! engine automatically.

use super::CandidateGuesser;
use crate::core::Letter;
use crate::game::GameState;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// English letters from most to least frequent
pub const ENGLISH_FREQUENCY_ORDER: &str = "ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// A strategy for choosing the next letter to guess
pub trait Guesser {
    /// Pick the next letter for the game
    ///
    /// Returns `None` when every letter has been guessed.
    fn next_letter(&mut self, game: &GameState) -> Option<Letter>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of a guesser while maintaining static dispatch.
pub enum GuesserType {
    /// Fixed English frequency order
    Frequency(FrequencyGuesser),
    /// Seeded random order
    Random(RandomGuesser),
    /// Letter found in the most remaining candidates
    Candidate(CandidateGuesser),
}

impl Guesser for GuesserType {
    fn next_letter(&mut self, game: &GameState) -> Option<Letter> {
        match self {
            Self::Frequency(g) => g.next_letter(game),
            Self::Random(g) => g.next_letter(game),
            Self::Candidate(g) => g.next_letter(game),
        }
    }
}

impl GuesserType {
    /// Names accepted by [`GuesserType::from_name`]
    pub const NAMES: [&'static str; 3] = ["frequency", "random", "candidate"];

    /// Create a guesser from a name string
    ///
    /// Supported names: "frequency", "random", "candidate". The seed only
    /// affects "random". Defaults to candidate if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, seed: u64) -> Self {
        match name {
            "frequency" => Self::Frequency(FrequencyGuesser),
            "random" => Self::Random(RandomGuesser::seeded(seed)),
            _ => Self::Candidate(CandidateGuesser),
        }
    }

    /// Canonical name of this guesser
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
            Self::Candidate(_) => "candidate",
        }
    }
}

/// Guesses letters in English frequency order
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_letter(&mut self, game: &GameState) -> Option<Letter> {
        ENGLISH_FREQUENCY_ORDER
            .chars()
            .filter_map(|c| Letter::new(c).ok())
            .find(|&letter| !game.has_guessed(letter))
    }
}

/// Guesses letters in a shuffled order fixed at creation
pub struct RandomGuesser {
    order: Vec<Letter>,
}

impl RandomGuesser {
    /// Shuffle the alphabet with a seeded generator
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        let mut order: Vec<Letter> = Letter::alphabet().collect();
        order.shuffle(&mut StdRng::seed_from_u64(seed));
        Self { order }
    }

    /// The shuffled guessing order
    #[must_use]
    pub fn order(&self) -> &[Letter] {
        &self.order
    }
}

impl Guesser for RandomGuesser {
    fn next_letter(&mut self, game: &GameState) -> Option<Letter> {
        self.order
            .iter()
            .copied()
            .find(|&letter| !game.has_guessed(letter))
    }
}
