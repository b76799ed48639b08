//! Wordle Game
//!
//! The rules engine for a Wordle-style word game: scoring, command handling
//! and game lifecycle.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{GameConfig, Status, initialise_game};
//! use wordle_game::wordlists::MemorySource;
//!
//! let words = MemorySource::new("words", ["stare", "could", "share"]);
//! let mut game = initialise_game(GameConfig::new(words).with_secret_word("share")).unwrap();
//!
//! for input in ["s", "t", "a", "r", "e", "enter"] {
//!     game.process_command(input).unwrap();
//! }
//! assert_eq!(game.status(), Status::Playing);
//! assert_eq!(game.current_row(), 1);
//! ```

// Core domain types
pub mod core;

// Errors
pub mod error;

// Game state, lifecycle and command processing
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;

pub use error::{GameError, Result};
