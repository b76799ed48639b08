//! Line-oriented play mode
//!
//! Reads whitespace-separated tokens, feeds them to the game and prints the
//! board and any popups after each line.

use crate::game::{Command, GameState};
use crate::output::{write_board, write_keyboard, write_popup, write_status};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Tokens that end the session
const QUIT: [&str; 2] = ["quit", "exit"];

const HELP: &str = "Type letters or words, then 'enter' (+). 'delete' (-), 'clear' (_), \
'restart' (!), 'share' (@), 'quit'.\n\
Words that are also commands (enter, clear, share) must be typed letter by letter.";

/// Expand one input token into game commands
///
/// A whole word that is not a command alias is typed letter by letter.
/// Command words such as `clear` stay commands even when they are also
/// dictionary words.
///
/// # Examples
/// ```
/// use wordle_game::commands::play::expand_token;
/// use wordle_game::game::Command;
///
/// assert_eq!(expand_token("ab"), [Command::Letter('a'), Command::Letter('b')]);
/// assert_eq!(expand_token("enter"), [Command::Enter]);
/// ```
#[must_use]
pub fn expand_token(token: &str) -> Vec<Command> {
    match Command::parse(token) {
        Command::Unknown(word)
            if word.chars().count() > 1 && word.chars().all(char::is_alphabetic) =>
        {
            word.chars().map(Command::Letter).collect()
        }
        command => vec![command],
    }
}

fn render<W: Write>(out: &mut W, game: &mut GameState) -> Result<()> {
    for popup in game.drain_popups() {
        write_popup(out, &popup)?;
    }
    write_board(out, game)?;
    write_keyboard(out, game)?;
    write_status(out, game)?;
    out.flush()?;
    Ok(())
}

/// Run the interactive loop until EOF or `quit`
///
/// # Errors
///
/// Returns an error on I/O failure or if a restart cannot find a new secret.
pub fn run_play<R: BufRead, W: Write>(game: &mut GameState, input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{HELP}")?;
    render(out, game)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;

        for token in line.split_whitespace() {
            if QUIT.contains(&token.to_lowercase().as_str()) {
                return Ok(());
            }
            for command in expand_token(token) {
                game.apply(command).context("game command failed")?;
            }
        }

        render(out, game)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Status, initialise_game};
    use crate::wordlists::MemorySource;
    use std::io::Cursor;

    fn game() -> GameState {
        let config = GameConfig::new(MemorySource::new("t", ["stare", "could", "share"]))
            .with_secret_word("stare");
        initialise_game(config).unwrap()
    }

    #[test]
    fn expand_keeps_aliases() {
        assert_eq!(expand_token("clear"), [Command::Clear]);
        assert_eq!(expand_token("!"), [Command::Restart]);
        assert_eq!(expand_token("x"), [Command::Letter('x')]);
        assert_eq!(expand_token("a1"), [Command::Unknown("a1".to_string())]);
    }

    #[test]
    fn plays_a_winning_session() {
        let mut game = game();
        let mut out = Vec::new();
        run_play(&mut game, Cursor::new("could +\nSTARE enter\n"), &mut out).unwrap();

        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.current_row(), 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("You won!"));
        assert!(game.popups().is_empty());
    }

    #[test]
    fn command_words_are_spelled_out() {
        let config = GameConfig::new(MemorySource::new("t", ["share", "stare"]))
            .with_secret_word("share");
        let mut game = initialise_game(config).unwrap();
        let mut out = Vec::new();
        run_play(&mut game, Cursor::new("share\ns h a r e +\n"), &mut out).unwrap();

        assert_eq!(game.status(), Status::Won);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("must be typed letter by letter"));
        assert!(text.contains("Wordle ?/6"));
    }

    #[test]
    fn quit_stops_processing() {
        let mut game = game();
        let mut out = Vec::new();
        run_play(&mut game, Cursor::new("st quit are\n"), &mut out).unwrap();

        assert_eq!(game.current_col(), 2);
    }
}
