//! Evil Hangman
//!
//! A Hangman host that never commits to a secret word. Every guess splits the
//! remaining dictionary words into families by the pattern the letter would
//! reveal, and the host keeps the family that is worst for the player.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::config::GameConfig;
//! use evil_hangman::core::Letter;
//! use evil_hangman::game::GameState;
//!
//! let config = GameConfig::new(5, 1).unwrap();
//! let mut game = GameState::new(&config, ["apple", "grape", "stone", "table"]);
//!
//! // Last guess: the host keeps every word without a Z
//! let outcome = game.guess(Letter::new('z').unwrap());
//! assert!(!outcome.succeeded());
//! assert!(game.is_over());
//! assert_eq!(game.final_answer().unwrap().text(), "APPLE");
//! ```

// Core domain types
pub mod core;

// Game settings
pub mod config;

// Adversarial engine
pub mod game;

// Automated guessers
pub mod players;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
