//! Word list loading utilities
//!
//! Normalizes raw source lines into the words a game can use.

use super::WordSource;
use crate::error::{GameError, Result};

/// Normalize raw lines into words of `word_length` letters
///
/// Each line is trimmed and lowercased; lines of any other length are
/// skipped. Order is preserved and duplicates are kept.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::filter_words;
///
/// let words = filter_words(["Crane", " slate ", "toolong", ""], 5);
/// assert_eq!(words, ["crane", "slate"]);
/// ```
pub fn filter_words<I, S>(lines: I, word_length: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let lower = line.as_ref().trim().to_lowercase();
            (lower.chars().count() == word_length).then_some(lower)
        })
        .collect()
}

/// Load the words of `word_length` letters from a source
///
/// # Errors
///
/// Returns `GameError::Source` if the source cannot be read, or
/// `GameError::EmptyWordList` if no line has the required length.
pub fn load_words(source: &dyn WordSource, word_length: usize) -> Result<Vec<String>> {
    let words = filter_words(source.read_lines()?, word_length);

    if words.is_empty() {
        return Err(GameError::empty_list(source.name(), word_length));
    }

    tracing::trace!(source = %source.name(), count = words.len(), "loaded word list");
    Ok(words)
}
