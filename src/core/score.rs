//! Guess scoring
//!
//! Computes the per-letter colours for a guess against the secret word,
//! following Wordle's rules for duplicate letters.

use super::Colour;
use crate::error::{GameError, Result};
use rustc_hash::FxHashMap;

/// Score `guess` against `secret`
///
/// Comparison is case-sensitive; callers pass lowercase words.
///
/// # Algorithm
/// 1. Count the letters of the secret into a pool
/// 2. First pass: mark exact position matches green and remove them from the pool
/// 3. Second pass, left to right: mark remaining letters yellow while the pool
///    still holds that letter, gray otherwise
///
/// # Errors
/// Returns `GameError::InvalidInput` if either word is empty or their lengths differ.
///
/// # Examples
/// ```
/// use wordle_game::core::{Colour, score_guess};
///
/// let colours = score_guess("hello", "below").unwrap();
/// assert_eq!(
///     colours,
///     [Colour::Gray, Colour::Green, Colour::Green, Colour::Gray, Colour::Yellow]
/// );
/// ```
pub fn score_guess(guess: &str, secret: &str) -> Result<Vec<Colour>> {
    if guess.is_empty() || secret.is_empty() {
        return Err(GameError::InvalidInput(
            "guess and secret word cannot be empty".to_string(),
        ));
    }

    let guess: Vec<char> = guess.chars().collect();
    let secret: Vec<char> = secret.chars().collect();

    if guess.len() != secret.len() {
        return Err(GameError::InvalidInput(format!(
            "guess has {} letters but the secret word has {}",
            guess.len(),
            secret.len()
        )));
    }

    let mut result = vec![Colour::Gray; guess.len()];
    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for &ch in &secret {
        *available.entry(ch).or_insert(0) += 1;
    }

    // First pass: greens
    for (i, (&g, &s)) in guess.iter().zip(&secret).enumerate() {
        if g == s {
            result[i] = Colour::Green;
            if let Some(count) = available.get_mut(&g) {
                *count -= 1;
            }
        }
    }

    // Second pass: yellows from whatever is left
    for (i, &g) in guess.iter().enumerate() {
        if result[i].is_green() {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            result[i] = Colour::Yellow;
            *count -= 1;
        }
    }

    Ok(result)
}

/// True when every letter scored green
#[must_use]
pub fn is_winning(colours: &[Colour]) -> bool {
    !colours.is_empty() && colours.iter().all(|c| c.is_green())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Colour::{Gray as X, Green as G, Yellow as Y};

    #[test]
    fn all_correct() {
        assert_eq!(score_guess("stare", "stare").unwrap(), [G, G, G, G, G]);
    }

    #[test]
    fn none_correct() {
        assert_eq!(score_guess("stare", "could").unwrap(), [X, X, X, X, X]);
    }

    #[test]
    fn some_correct() {
        assert_eq!(score_guess("stare", "share").unwrap(), [G, X, G, G, G]);
    }

    #[test]
    fn wrong_positions() {
        assert_eq!(score_guess("stare", "erats").unwrap(), [Y, Y, G, Y, Y]);
    }

    #[test]
    fn excess_duplicates_score_gray() {
        // Secret has one L, already consumed by the green at index 2
        assert_eq!(score_guess("hello", "below").unwrap(), [X, G, G, X, Y]);
    }

    #[test]
    fn green_takes_priority_over_earlier_yellow() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(score_guess("robot", "floor").unwrap(), [Y, Y, X, G, X]);
    }

    #[test]
    fn yellow_consumed_left_to_right() {
        // SPEED vs ERASE: both E's available as yellows
        assert_eq!(score_guess("speed", "erase").unwrap(), [Y, X, Y, Y, X]);
        // ABIDE's only E is taken by the green at the end
        assert_eq!(score_guess("eerie", "abide").unwrap(), [X, X, X, Y, G]);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(score_guess("STARE", "stare").unwrap(), [X, X, X, X, X]);
    }

    #[test]
    fn other_lengths() {
        assert_eq!(score_guess("ab", "ba").unwrap(), [Y, Y]);
        assert_eq!(score_guess("a", "a").unwrap(), [G]);
    }

    #[test]
    fn empty_input_rejected() {
        assert!(matches!(
            score_guess("", "stare"),
            Err(GameError::InvalidInput(_))
        ));
        assert!(matches!(
            score_guess("stare", ""),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn length_mismatch_rejected() {
        assert!(matches!(
            score_guess("star", "stare"),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn winning_requires_all_green() {
        assert!(is_winning(&[G, G, G]));
        assert!(!is_winning(&[G, Y, G]));
        assert!(!is_winning(&[]));
    }
}
