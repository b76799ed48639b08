//! Letter colours and grid cells
//!
//! A colour is the feedback for one guessed letter:
//! - Green: letter in the correct position
//! - Yellow: letter in the word, wrong position
//! - Gray: letter absent (or all its occurrences already used up)
//! - Unset: row not yet submitted

use std::fmt;

/// Feedback colour for a single grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Colour {
    #[default]
    Unset,
    Green,
    Yellow,
    Gray,
}

impl Colour {
    /// Single-character code: `w` unset, `g` green, `y` yellow, `-` gray
    #[inline]
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Unset => 'w',
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Gray => '-',
        }
    }

    /// Emoji square for share summaries
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬛',
            Self::Unset => '⬜',
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_green(self) -> bool {
        matches!(self, Self::Green)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Render a row of colours as emoji squares
#[must_use]
pub fn row_to_emoji(row: &[Colour]) -> String {
    row.iter().map(|c| c.to_emoji()).collect()
}

/// One cell of the letter grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Letter(char),
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Letter(ch) => Some(ch),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, " "),
            Self::Letter(ch) => write!(f, "{ch}"),
        }
    }
}
