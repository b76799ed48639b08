//! Display functions for the game board

use super::formatters::{cell_label, keyboard_state, popup_lines};
use crate::core::Colour;
use crate::game::{GameState, Popup, PopupMode, Status};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

fn colour_tile(label: &str, colour: Colour) -> ColoredString {
    match colour {
        Colour::Green => label.black().on_green().bold(),
        Colour::Yellow => label.black().on_yellow().bold(),
        Colour::Gray => label.white().on_bright_black(),
        Colour::Unset => label.bright_white(),
    }
}

/// Write the letter grid, one row per line
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_board<W: Write>(out: &mut W, game: &GameState) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(game.word_length() * 3 + 2).cyan())?;
    for (cells, colours) in game.grid().iter().zip(game.colour_grid()) {
        write!(out, " ")?;
        for (&cell, &colour) in cells.iter().zip(colours) {
            write!(out, "{}", colour_tile(&cell_label(cell), colour))?;
        }
        writeln!(out)?;
    }
    writeln!(out, "{}", "─".repeat(game.word_length() * 3 + 2).cyan())
}

/// Write the keyboard with absent letters dimmed
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_keyboard<W: Write>(out: &mut W, game: &GameState) -> io::Result<()> {
    for (indent, row) in keyboard_state(game).iter().enumerate() {
        write!(out, "{}", " ".repeat(indent + 1))?;
        for &(letter, active) in row {
            let key = letter.to_ascii_uppercase().to_string();
            if active {
                write!(out, "{} ", key.bright_white().bold())?;
            } else {
                write!(out, "{} ", key.bright_black())?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write one popup
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_popup<W: Write>(out: &mut W, popup: &Popup) -> io::Result<()> {
    match popup.mode {
        PopupMode::Share => writeln!(out, "{}", popup.message),
        PopupMode::Text => {
            for line in popup_lines(&popup.message) {
                writeln!(out, "  {} {}", "»".bright_cyan(), line.bright_yellow())?;
            }
            Ok(())
        }
    }
}

/// Write a one-line status summary
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_status<W: Write>(out: &mut W, game: &GameState) -> io::Result<()> {
    let status = match game.status() {
        Status::Playing => format!(
            "Guess {}/{}",
            game.current_row() + 1,
            game.max_guesses()
        )
        .bright_cyan(),
        Status::Won => "Solved! Type 'restart' to play again".green().bold(),
        Status::Lost => "Out of guesses. Type 'restart' to play again".red().bold(),
    };
    writeln!(out, "{status}")
}
