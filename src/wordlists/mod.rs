//! Word lists for the game
//!
//! Sources the game reads its dictionary and secret words from, plus the
//! built-in lists compiled into the binary.

pub mod loader;
mod source;

// Generated by build.rs from data/answers.txt and data/dictionary.txt
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));

pub use loader::{filter_words, load_words};
pub use source::{EmbeddedSource, FileSource, MemorySource, WordSource};
