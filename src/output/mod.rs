//! Terminal output formatting
//!
//! Board, keyboard and popup printing for the command-line driver.

pub mod display;
pub mod formatters;

pub use display::{write_board, write_keyboard, write_popup, write_status};
