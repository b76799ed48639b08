//! Formatting utilities for terminal output
//!
//! Plain-text building blocks; colouring happens in `display`.

use crate::core::Cell;
use crate::game::GameState;

/// QWERTY keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A grid cell as a three-character tile, e.g. `" A "`
#[must_use]
pub fn cell_label(cell: Cell) -> String {
    match cell {
        Cell::Empty => " _ ".to_string(),
        Cell::Letter(ch) => format!(" {} ", ch.to_uppercase()),
    }
}

/// Keyboard rows with each letter's active flag
#[must_use]
pub fn keyboard_state(game: &GameState) -> Vec<Vec<(char, bool)>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| row.chars().map(|ch| (ch, game.is_letter_active(ch))).collect())
        .collect()
}

/// Split a popup message into display lines
#[must_use]
pub fn popup_lines(message: &str) -> Vec<&str> {
    message.lines().filter(|line| !line.trim().is_empty()).collect()
}
