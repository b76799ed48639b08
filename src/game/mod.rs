//! The game itself
//!
//! [`initialise_game`] builds a [`GameState`]; [`GameState::process_command`]
//! drives it one token at a time and [`GameState::reset`] starts a new round.

mod command;
mod lifecycle;
mod state;

pub use command::Command;
pub use lifecycle::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, GameConfig, initialise_game};
pub use state::{GameState, Popup, PopupMode, Status};
