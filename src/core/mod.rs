//! Core domain types for Wordle
//!
//! Colours, grid cells and the scoring function. Everything here is pure
//! and independent of game state.

mod colour;
mod score;

pub use colour::{Cell, Colour, row_to_emoji};
pub use score::{is_winning, score_guess};
