//! Game state for a single session
//!
//! The state is created by [`initialise_game`](super::initialise_game) and
//! mutated only through commands and resets.

use crate::core::{Cell, Colour};
use crate::wordlists::WordSource;
use rand::rngs::StdRng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Round status
///
/// `Playing` moves to `Won` or `Lost` once per round; only a reset returns
/// it to `Playing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Status {
    #[inline]
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !self.is_playing()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// How the presentation layer should show a popup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PopupMode {
    #[default]
    Text,
    /// Shareable emoji summary of the board
    Share,
}

impl PopupMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Share => "share",
        }
    }
}

/// A message queued for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub message: String,
    pub mode: PopupMode,
}

impl Popup {
    #[must_use]
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            mode: PopupMode::Text,
        }
    }
}

/// Everything about one in-progress game
#[derive(Debug)]
pub struct GameState {
    pub(super) secret_word: String,
    pub(super) word_length: usize,
    pub(super) max_guesses: usize,
    pub(super) grid: Vec<Vec<Cell>>,
    pub(super) colour_grid: Vec<Vec<Colour>>,
    pub(super) current_row: usize,
    pub(super) current_col: usize,
    pub(super) status: Status,
    pub(super) popup_queue: Vec<Popup>,
    pub(super) active_letters: FxHashMap<char, bool>,
    pub(super) allowed_words: FxHashSet<String>,
    pub(super) all_words_source: Box<dyn WordSource>,
    pub(super) wordle_words_source: Option<Box<dyn WordSource>>,
    pub(super) rng: StdRng,
}

/// All 26 letters marked active
pub(super) fn fresh_active_letters() -> FxHashMap<char, bool> {
    ('a'..='z').map(|ch| (ch, true)).collect()
}

impl GameState {
    /// Blank grid, colours, cursor, status, popups and keyboard
    pub(super) fn clear_board(&mut self) {
        self.grid = vec![vec![Cell::Empty; self.word_length]; self.max_guesses];
        self.colour_grid = vec![vec![Colour::Unset; self.word_length]; self.max_guesses];
        self.current_row = 0;
        self.current_col = 0;
        self.status = Status::Playing;
        self.popup_queue.clear();
        self.active_letters = fresh_active_letters();
    }

    pub(super) fn show_popup(&mut self, message: impl Into<String>) {
        self.popup_queue.push(Popup::text(message));
    }

    pub(super) fn show_popup_with_mode(&mut self, message: impl Into<String>, mode: PopupMode) {
        self.popup_queue.push(Popup {
            message: message.into(),
            mode,
        });
    }

    #[must_use]
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn grid(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    #[must_use]
    pub fn colour_grid(&self) -> &[Vec<Colour>] {
        &self.colour_grid
    }

    /// Row the cursor is on (equals `max_guesses` once the game is lost)
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.current_col
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Popups queued since the last drain
    #[must_use]
    pub fn popups(&self) -> &[Popup] {
        &self.popup_queue
    }

    /// Take every queued popup, leaving the queue empty
    pub fn drain_popups(&mut self) -> Vec<Popup> {
        std::mem::take(&mut self.popup_queue)
    }

    #[must_use]
    pub const fn active_letters(&self) -> &FxHashMap<char, bool> {
        &self.active_letters
    }

    /// False once the letter has scored gray in a submitted guess
    #[must_use]
    pub fn is_letter_active(&self, letter: char) -> bool {
        self.active_letters.get(&letter).copied().unwrap_or(true)
    }

    #[must_use]
    pub const fn allowed_words(&self) -> &FxHashSet<String> {
        &self.allowed_words
    }

    /// Letters typed into row `row`, empty cells skipped
    ///
    /// Returns an empty string for rows past the end of the grid.
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.grid
            .get(row)
            .map(|cells| cells.iter().filter_map(|cell| cell.letter()).collect())
            .unwrap_or_default()
    }

    /// Number of rows that have been scored
    #[must_use]
    pub fn submitted_rows(&self) -> usize {
        self.colour_grid
            .iter()
            .take_while(|row| row.iter().all(|&c| c != Colour::Unset))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_helpers() {
        assert!(Status::Playing.is_playing());
        assert!(Status::Won.is_over());
        assert!(Status::Lost.is_over());
        assert_eq!(Status::Lost.to_string(), "lost");
    }

    #[test]
    fn popup_defaults_to_text() {
        let popup = Popup::text("hi");
        assert_eq!(popup.mode, PopupMode::Text);
        assert_eq!(popup.mode.as_str(), "text");
        assert_eq!(PopupMode::Share.as_str(), "share");
    }

    #[test]
    fn fresh_letters_cover_alphabet() {
        let letters = fresh_active_letters();
        assert_eq!(letters.len(), 26);
        assert!(letters.values().all(|&active| active));
    }
}
