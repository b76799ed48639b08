//! Command processing
//!
//! Each call consumes one input token and applies it to the game. Gameplay
//! mistakes become popups; only reset failures and scoring contract
//! violations surface as errors.

use super::state::{GameState, PopupMode, Status};
use crate::core::{Cell, Colour, is_winning, row_to_emoji, score_guess};
use crate::error::Result;
use std::convert::Infallible;
use std::str::FromStr;
use tracing::{info, trace};

const ROW_FULL: &str = "Can't add more letters\nUse clear or delete to edit your guess.";
const INVALID_WORD: &str = "Invalid word\nUse clear or delete to edit your guess";
const INVALID_COMMAND: &str = "Invalid command";
const YOU_WON: &str = "You won!";
const RESTARTING: &str = "Restarting game";

/// A single player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type a letter into the next cell
    Letter(char),
    /// `delete` or `-`
    Delete,
    /// `clear` or `_`
    Clear,
    /// `enter` or `+`
    Enter,
    /// `restart` or `!`
    Restart,
    /// `share` or `@`
    Share,
    /// Anything else, normalized
    Unknown(String),
}

impl Command {
    /// Parse a raw token, ignoring case and surrounding whitespace
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Command;
    ///
    /// assert_eq!(Command::parse(" A "), Command::Letter('a'));
    /// assert_eq!(Command::parse("+"), Command::Enter);
    /// assert_eq!(Command::parse("Restart"), Command::Restart);
    /// assert_eq!(Command::parse("7"), Command::Unknown("7".to_string()));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();

        let mut chars = normalized.chars();
        if let (Some(ch), None) = (chars.next(), chars.next())
            && ch.is_alphabetic()
        {
            return Self::Letter(ch);
        }

        match normalized.as_str() {
            "delete" | "-" => Self::Delete,
            "clear" | "_" => Self::Clear,
            "enter" | "+" => Self::Enter,
            "restart" | "!" => Self::Restart,
            "share" | "@" => Self::Share,
            _ => Self::Unknown(normalized),
        }
    }

    /// Commands still accepted once the round is over
    #[must_use]
    pub const fn allowed_after_game_over(&self) -> bool {
        matches!(self, Self::Restart | Self::Share)
    }
}

impl FromStr for Command {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl GameState {
    /// Parse and apply one input token
    ///
    /// Returns `Ok(false)` when the game is over (including the call that
    /// ended it), `Ok(true)` otherwise.
    ///
    /// # Errors
    ///
    /// Propagates reset errors from `restart` and scoring errors, which only
    /// occur if the state's invariants have been broken.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::{GameConfig, Status, initialise_game};
    /// use wordle_game::wordlists::MemorySource;
    ///
    /// let config = GameConfig::new(MemorySource::new("words", ["stare"]))
    ///     .with_secret_word("stare");
    /// let mut game = initialise_game(config).unwrap();
    ///
    /// for letter in ["s", "t", "a", "r", "e"] {
    ///     assert!(game.process_command(letter).unwrap());
    /// }
    /// assert!(!game.process_command("enter").unwrap());
    /// assert_eq!(game.status(), Status::Won);
    /// ```
    pub fn process_command(&mut self, input: &str) -> Result<bool> {
        self.apply(Command::parse(input))
    }

    /// Apply an already-parsed command
    ///
    /// # Errors
    ///
    /// Same as [`GameState::process_command`].
    pub fn apply(&mut self, command: Command) -> Result<bool> {
        trace!(?command, row = self.current_row, col = self.current_col, "command");

        if self.status.is_over() && !command.allowed_after_game_over() {
            return Ok(false);
        }

        match command {
            Command::Letter(letter) => {
                self.type_letter(letter);
                Ok(true)
            }
            Command::Delete => {
                self.delete_letter();
                Ok(true)
            }
            Command::Clear => {
                self.clear_row();
                Ok(true)
            }
            Command::Enter => self.submit_guess(),
            Command::Restart => self.restart(),
            Command::Share => {
                let summary = self.share_summary();
                self.show_popup_with_mode(summary, PopupMode::Share);
                Ok(self.status.is_playing())
            }
            Command::Unknown(_) => {
                self.show_popup(INVALID_COMMAND);
                Ok(true)
            }
        }
    }

    /// Whether the current row spells a dictionary word
    ///
    /// False for incomplete rows and once the cursor has run past the grid.
    #[must_use]
    pub fn validate_guess(&self) -> bool {
        let Some(row) = self.grid.get(self.current_row) else {
            return false;
        };
        if row.iter().any(|cell| cell.is_empty()) {
            return false;
        }

        let guess = self.row_text(self.current_row).to_lowercase();
        guess.chars().count() == self.word_length && self.allowed_words.contains(&guess)
    }

    fn type_letter(&mut self, letter: char) {
        if self.current_col >= self.word_length {
            self.show_popup(ROW_FULL);
            return;
        }
        self.grid[self.current_row][self.current_col] = Cell::Letter(letter);
        self.current_col += 1;
    }

    fn delete_letter(&mut self) {
        if self.current_col > 0 {
            self.current_col -= 1;
            self.grid[self.current_row][self.current_col] = Cell::Empty;
        }
    }

    fn clear_row(&mut self) {
        self.grid[self.current_row].fill(Cell::Empty);
        self.current_col = 0;
    }

    fn submit_guess(&mut self) -> Result<bool> {
        if self.current_col < self.word_length || !self.validate_guess() {
            self.show_popup(INVALID_WORD);
            return Ok(true);
        }

        let guess = self.row_text(self.current_row);
        let colours = score_guess(&guess, &self.secret_word)?;

        for (letter, colour) in guess.chars().zip(&colours) {
            if *colour == Colour::Gray
                && let Some(active) = self.active_letters.get_mut(&letter)
            {
                *active = false;
            }
        }

        let won = is_winning(&colours);
        self.colour_grid[self.current_row] = colours;

        if won {
            self.status = Status::Won;
            info!(guesses = self.current_row + 1, "game won");
            self.show_popup(YOU_WON);
            return Ok(false);
        }

        self.current_row += 1;
        self.current_col = 0;

        if self.current_row >= self.max_guesses {
            self.status = Status::Lost;
            info!("game lost");
            self.show_popup(format!("You lose! The word was {}", self.secret_word));
            return Ok(false);
        }

        Ok(true)
    }

    fn restart(&mut self) -> Result<bool> {
        let previous = self.secret_word.clone();
        self.reset(None)?;

        self.show_popup(format!(
            "You have chosen to restart! The word was {previous}"
        ));
        self.show_popup(RESTARTING);
        Ok(true)
    }

    /// Emoji grid of the submitted rows, headed by the score
    ///
    /// The score is the number of guesses for a win, `X` for a loss and `?`
    /// while the round is still going.
    fn share_summary(&self) -> String {
        let score = match self.status {
            Status::Won => (self.current_row + 1).to_string(),
            Status::Lost => "X".to_string(),
            Status::Playing => "?".to_string(),
        };

        let mut summary = format!("Wordle {score}/{}", self.max_guesses);
        for row in &self.colour_grid[..self.submitted_rows()] {
            summary.push('\n');
            summary.push_str(&row_to_emoji(row));
        }
        summary
    }
}
