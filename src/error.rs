//! Error taxonomy for the rules engine
//!
//! Only configuration and contract violations are errors. Irregular play
//! (full rows, unknown words, bad commands) is reported through popups.

use std::io;
use thiserror::Error;

/// Errors raised by game setup, reset and scoring
#[derive(Debug, Error)]
pub enum GameError {
    /// Bad game parameters or a secret word of the wrong length
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A word source produced no words of the required length
    #[error("no valid words of length {word_length} in {source_name}")]
    EmptyWordList {
        source_name: String,
        word_length: usize,
    },

    /// Scoring was called with empty or mismatched strings
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A word source could not be read
    #[error("failed to read word source {name}")]
    Source {
        name: String,
        #[source]
        error: io::Error,
    },
}

impl GameError {
    pub(crate) fn empty_list(source_name: impl Into<String>, word_length: usize) -> Self {
        Self::EmptyWordList {
            source_name: source_name.into(),
            word_length,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = GameError> = std::result::Result<T, E>;
