//! Wordle - CLI
//!
//! Plays a game of Wordle in the terminal, one line of commands at a time.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::run_play,
    game::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, GameConfig, initialise_game},
    logging::init_tracing,
    wordlists::{EmbeddedSource, FileSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Play Wordle in the terminal",
    version,
    author
)]
struct Cli {
    /// Dictionary of accepted guesses, one word per line (default: built-in list)
    #[arg(short, long)]
    all_words: Option<PathBuf>,

    /// Words the secret is drawn from (default: built-in answers, or the
    /// dictionary when --all-words is given)
    #[arg(short, long)]
    wordle_words: Option<PathBuf>,

    /// Use this secret word instead of a random one
    #[arg(short, long)]
    secret: Option<String>,

    /// Number of guesses allowed
    #[arg(short = 'g', long, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Letters per word
    #[arg(short = 'l', long, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Seed for secret word selection
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Build the game configuration from command-line flags
fn build_config(cli: Cli) -> GameConfig {
    let mut config = match cli.all_words {
        Some(path) => GameConfig::new(FileSource::new(path)),
        None => GameConfig::new(EmbeddedSource::dictionary())
            .with_wordle_words(EmbeddedSource::answers()),
    };

    if let Some(path) = cli.wordle_words {
        config = config.with_wordle_words(FileSource::new(path));
    }
    if let Some(secret) = cli.secret {
        config = config.with_secret_word(secret);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    config
        .with_max_guesses(cli.max_guesses)
        .with_word_length(cli.word_length)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut game = initialise_game(build_config(cli)).context("failed to start game")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(&mut game, stdin.lock(), &mut stdout)
}
