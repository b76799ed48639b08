//! Game construction and reset
//!
//! Loads the word lists, picks the secret word and lays out a fresh board.

use super::state::{GameState, Status, fresh_active_letters};
use crate::core::{Cell, Colour};
use crate::error::{GameError, Result};
use crate::wordlists::{WordSource, load_words};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

/// Default number of guesses per round
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Default number of letters per word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Configuration for a new game
#[derive(Debug)]
pub struct GameConfig {
    pub all_words: Box<dyn WordSource>,
    pub wordle_words: Option<Box<dyn WordSource>>,
    pub secret_word: Option<String>,
    pub max_guesses: usize,
    pub word_length: usize,
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Configuration validating guesses against `all_words`, with defaults
    /// for everything else
    #[must_use]
    pub fn new(all_words: impl WordSource + 'static) -> Self {
        Self {
            all_words: Box::new(all_words),
            wordle_words: None,
            secret_word: None,
            max_guesses: DEFAULT_MAX_GUESSES,
            word_length: DEFAULT_WORD_LENGTH,
            seed: None,
        }
    }

    /// Draw secret words from a separate list
    #[must_use]
    pub fn with_wordle_words(mut self, source: impl WordSource + 'static) -> Self {
        self.wordle_words = Some(Box::new(source));
        self
    }

    #[must_use]
    pub fn with_secret_word(mut self, word: impl Into<String>) -> Self {
        self.secret_word = Some(word.into());
        self
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub const fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    /// Seed the random secret selection
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Start a new game
///
/// # Errors
///
/// - `InvalidConfiguration` if `max_guesses` or `word_length` is zero, or a
///   supplied secret word has the wrong length
/// - `EmptyWordList` if either word source has no words of the right length
/// - `Source` if a word source cannot be read
///
/// # Examples
/// ```
/// use wordle_game::game::{GameConfig, Status, initialise_game};
/// use wordle_game::wordlists::MemorySource;
///
/// let config = GameConfig::new(MemorySource::new("words", ["stare", "could"]))
///     .with_secret_word("stare");
/// let game = initialise_game(config).unwrap();
///
/// assert_eq!(game.secret_word(), "stare");
/// assert_eq!(game.status(), Status::Playing);
/// ```
pub fn initialise_game(config: GameConfig) -> Result<GameState> {
    let GameConfig {
        all_words,
        wordle_words,
        secret_word,
        max_guesses,
        word_length,
        seed,
    } = config;

    if max_guesses < 1 {
        return Err(GameError::InvalidConfiguration(
            "max guesses must be 1 or more".to_string(),
        ));
    }
    if word_length < 1 {
        return Err(GameError::InvalidConfiguration(
            "word length must be 1 letter or more".to_string(),
        ));
    }

    let dictionary = load_words(all_words.as_ref(), word_length)?;
    let candidates = match &wordle_words {
        Some(source) => load_words(source.as_ref(), word_length)?,
        None => dictionary.clone(),
    };
    let allowed_words: FxHashSet<String> = dictionary.into_iter().collect();

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let secret_word = match secret_word {
        Some(word) => checked_secret(&word, word_length)?,
        None => candidates
            .choose(&mut rng)
            .cloned()
            .ok_or_else(|| GameError::empty_list(all_words.name(), word_length))?,
    };

    debug!(
        dictionary = allowed_words.len(),
        word_length, max_guesses, "initialised game"
    );
    trace!(secret = %secret_word, "secret word chosen");

    Ok(GameState {
        secret_word,
        word_length,
        max_guesses,
        grid: vec![vec![Cell::Empty; word_length]; max_guesses],
        colour_grid: vec![vec![Colour::Unset; word_length]; max_guesses],
        current_row: 0,
        current_col: 0,
        status: Status::Playing,
        popup_queue: Vec::new(),
        active_letters: fresh_active_letters(),
        allowed_words,
        all_words_source: all_words,
        wordle_words_source: wordle_words,
        rng,
    })
}

/// Lowercase a caller-supplied secret and check its length
fn checked_secret(word: &str, word_length: usize) -> Result<String> {
    let lower = word.to_lowercase();
    let len = lower.chars().count();
    if len != word_length {
        return Err(GameError::InvalidConfiguration(format!(
            "the secret word must have {word_length} letters, got {len}"
        )));
    }
    Ok(lower)
}

/// Pick uniformly among `words` other than `exclude`
fn choose_excluding<R: Rng + ?Sized>(
    words: &[String],
    exclude: &str,
    rng: &mut R,
) -> Option<String> {
    let remaining: Vec<&String> = words.iter().filter(|w| *w != exclude).collect();
    remaining.choose(rng).map(|w| (*w).clone())
}

impl GameState {
    /// Start a new round in place
    ///
    /// Without `secret_word`, a new secret different from the current one is
    /// drawn from the candidate list, falling back to the full dictionary when
    /// the candidate list has nothing else to offer. The dictionary and
    /// sources are kept; everything else returns to its initial state. On
    /// error the state is left untouched.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if `secret_word` has the wrong length
    /// - `EmptyWordList` if the candidate list is empty, or if no word other
    ///   than the current secret exists in either list
    /// - `Source` if a word source cannot be read
    pub fn reset(&mut self, secret_word: Option<&str>) -> Result<()> {
        let secret_word = match secret_word {
            Some(word) => checked_secret(word, self.word_length)?,
            None => self.replacement_secret()?,
        };

        trace!(secret = %secret_word, "secret word chosen");
        self.secret_word = secret_word;
        self.clear_board();
        debug!("game reset");
        Ok(())
    }

    fn replacement_secret(&mut self) -> Result<String> {
        let candidate_source = self
            .wordle_words_source
            .as_deref()
            .unwrap_or(self.all_words_source.as_ref());
        let candidates = load_words(candidate_source, self.word_length)?;

        if let Some(word) = choose_excluding(&candidates, &self.secret_word, &mut self.rng) {
            return Ok(word);
        }

        debug!("candidate list exhausted, falling back to the full dictionary");
        let all_words = load_words(self.all_words_source.as_ref(), self.word_length)?;
        choose_excluding(&all_words, &self.secret_word, &mut self.rng)
            .ok_or_else(|| GameError::empty_list(self.all_words_source.name(), self.word_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::MemorySource;

    fn words(list: &[&str]) -> MemorySource {
        MemorySource::new("test", list.iter().copied())
    }

    #[test]
    fn default_shape() {
        let game = initialise_game(GameConfig::new(words(&["stare", "could"]))).unwrap();

        assert_eq!(game.word_length(), 5);
        assert_eq!(game.max_guesses(), 6);
        assert_eq!(game.grid().len(), 6);
        assert_eq!(game.colour_grid().len(), 6);
        assert!(game.grid().iter().all(|row| row == &[Cell::Empty; 5]));
        assert!(game.colour_grid().iter().all(|row| row == &[Colour::Unset; 5]));
        assert_eq!((game.current_row(), game.current_col()), (0, 0));
        assert_eq!(game.status(), Status::Playing);
        assert!(game.popups().is_empty());
        assert!(('a'..='z').all(|ch| game.is_letter_active(ch)));
    }

    #[test]
    fn custom_shape() {
        let config = GameConfig::new(words(&["cat", "dog", "horse"]))
            .with_word_length(3)
            .with_max_guesses(2);
        let game = initialise_game(config).unwrap();

        assert_eq!(game.grid().len(), 2);
        assert!(game.grid().iter().all(|row| row.len() == 3));
        assert!(["cat", "dog"].contains(&game.secret_word()));
        assert_eq!(game.allowed_words().len(), 2);
    }

    #[test]
    fn zero_max_guesses_rejected() {
        let config = GameConfig::new(words(&["stare"])).with_max_guesses(0);
        assert!(matches!(
            initialise_game(config),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn zero_word_length_rejected() {
        let config = GameConfig::new(words(&["stare"])).with_word_length(0);
        assert!(matches!(
            initialise_game(config),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn empty_dictionary_rejected() {
        let config = GameConfig::new(words(&[]));
        assert!(matches!(
            initialise_game(config),
            Err(GameError::EmptyWordList { .. })
        ));
    }

    #[test]
    fn empty_candidate_list_rejected() {
        let config = GameConfig::new(words(&["stare"])).with_wordle_words(words(&["toolong"]));
        assert!(matches!(
            initialise_game(config),
            Err(GameError::EmptyWordList { .. })
        ));
    }

    #[test]
    fn secret_wrong_length_rejected() {
        let config = GameConfig::new(words(&["stare"])).with_secret_word("toolong");
        assert!(matches!(
            initialise_game(config),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn secret_length_measured_after_lowercasing() {
        let config = GameConfig::new(words(&["stare", "zzzzz"])).with_secret_word("İSTAN");
        assert!(matches!(
            initialise_game(config),
            Err(GameError::InvalidConfiguration(_))
        ));

        // the only word grows to six chars once lowercased
        let config = GameConfig::new(words(&["İSTAN"]));
        assert!(matches!(
            initialise_game(config),
            Err(GameError::EmptyWordList { .. })
        ));
    }

    #[test]
    fn secret_lowercased_without_membership_check() {
        let config = GameConfig::new(words(&["stare"])).with_secret_word("ZZZZZ");
        let game = initialise_game(config).unwrap();
        assert_eq!(game.secret_word(), "zzzzz");
    }

    #[test]
    fn secret_drawn_from_candidates() {
        let config = GameConfig::new(words(&["stare", "could", "share"]))
            .with_wordle_words(words(&["Could"]));
        let game = initialise_game(config).unwrap();
        assert_eq!(game.secret_word(), "could");
    }

    #[test]
    fn seeded_games_pick_the_same_secret() {
        let list = ["stare", "could", "share", "crane", "slate", "below"];
        let a = initialise_game(GameConfig::new(words(&list)).with_seed(7)).unwrap();
        let b = initialise_game(GameConfig::new(words(&list)).with_seed(7)).unwrap();
        assert_eq!(a.secret_word(), b.secret_word());
    }

    #[test]
    fn reset_picks_a_different_word() {
        let config = GameConfig::new(words(&["stare", "could"])).with_secret_word("stare");
        let mut game = initialise_game(config).unwrap();

        game.reset(None).unwrap();
        assert_eq!(game.secret_word(), "could");

        game.reset(None).unwrap();
        assert_eq!(game.secret_word(), "stare");
    }

    #[test]
    fn reset_falls_back_to_dictionary() {
        let config = GameConfig::new(words(&["stare", "could"]))
            .with_wordle_words(words(&["stare"]))
            .with_secret_word("stare");
        let mut game = initialise_game(config).unwrap();

        game.reset(None).unwrap();
        assert_eq!(game.secret_word(), "could");
    }

    #[test]
    fn reset_with_no_alternative_fails_and_keeps_state() {
        let config = GameConfig::new(words(&["stare"])).with_secret_word("stare");
        let mut game = initialise_game(config).unwrap();
        game.show_popup("kept");

        assert!(matches!(
            game.reset(None),
            Err(GameError::EmptyWordList { .. })
        ));
        assert_eq!(game.secret_word(), "stare");
        assert_eq!(game.popups().len(), 1);
    }

    #[test]
    fn reset_with_explicit_secret() {
        let mut game = initialise_game(GameConfig::new(words(&["stare"]))).unwrap();

        game.reset(Some("CRANE")).unwrap();
        assert_eq!(game.secret_word(), "crane");

        assert!(matches!(
            game.reset(Some("cat")),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert_eq!(game.secret_word(), "crane");
    }

    #[test]
    fn reset_clears_board() {
        let config = GameConfig::new(words(&["stare", "could"])).with_secret_word("stare");
        let mut game = initialise_game(config).unwrap();
        game.grid[0][0] = Cell::Letter('x');
        game.current_col = 1;
        game.status = Status::Lost;
        game.active_letters.insert('x', false);
        game.show_popup("old");

        game.reset(None).unwrap();

        assert_eq!(game.grid()[0][0], Cell::Empty);
        assert_eq!(game.current_col(), 0);
        assert_eq!(game.status(), Status::Playing);
        assert!(game.is_letter_active('x'));
        assert!(game.popups().is_empty());
        assert_eq!(game.allowed_words().len(), 2);
    }
}
