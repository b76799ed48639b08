//! Word list sources
//!
//! A source is anything that yields lines of candidate words. The game keeps
//! its sources so it can re-read them on reset.

use crate::error::{GameError, Result};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// A read-only, line-oriented word list
pub trait WordSource: fmt::Debug {
    /// Human-readable name used in errors and logs
    fn name(&self) -> String;

    /// Read every raw line from the source
    ///
    /// # Errors
    /// Returns `GameError::Source` if the underlying storage cannot be read.
    fn read_lines(&self) -> Result<Vec<String>>;
}

/// Word list stored in a text file, one word per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|error| GameError::Source {
            name: self.name(),
            error,
        })?;

        Ok(content.lines().map(str::to_owned).collect())
    }
}

/// Word list held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySource {
    name: String,
    lines: Vec<String>,
}

impl MemorySource {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for MemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

/// Word list compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedSource {
    name: &'static str,
    words: &'static [&'static str],
}

impl EmbeddedSource {
    #[must_use]
    pub const fn new(name: &'static str, words: &'static [&'static str]) -> Self {
        Self { name, words }
    }

    /// The built-in validation dictionary
    #[must_use]
    pub const fn dictionary() -> Self {
        Self::new("embedded dictionary", super::DICTIONARY)
    }

    /// The built-in secret-word list
    #[must_use]
    pub const fn answers() -> Self {
        Self::new("embedded answers", super::ANSWERS)
    }
}

impl WordSource for EmbeddedSource {
    fn name(&self) -> String {
        self.name.to_string()
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.words.iter().map(|&w| w.to_owned()).collect())
    }
}
