use crate::engine::Orientation;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a word reads forwards or backwards once placed in the grid.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// The word was placed as given.
    Forward,
    /// The word was reversed before it was placed.
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Backward => f.write_str("backward"),
        }
    }
}

/// Where and how a single word was committed to the grid.
#[derive(Debug, Eq, PartialEq, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// The letters exactly as written into the grid, i.e. already reversed if the direction is
    /// [`Direction::Backward`].
    pub word: String,
    /// The row of the first letter.
    pub row: usize,
    /// The column of the first letter.
    pub column: usize,
    pub orientation: Orientation,
    pub direction: Direction,
}

impl Placement {
    /// Returns the `(row, column)` of each letter of the placed word, in the order the letters
    /// were written.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row_step, column_step) = self.orientation.delta();
        (0..self.word.chars().count())
            .map(move |i| (self.row + i * row_step, self.column + i * column_step))
    }
}

/// Indicates that an error occurred while trying to generate a word search.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum WordSearchError {
    /// The word is longer than the grid is wide, so it can't be placed horizontally or
    /// diagonally.
    #[error("grid width {width} is too narrow for the word {word:?} ({length} letters)")]
    WordTooWide {
        word: String,
        length: usize,
        width: usize,
    },
    /// The word is longer than the grid is tall, so it can't be placed vertically or
    /// diagonally.
    #[error("grid height {height} is too short for the word {word:?} ({length} letters)")]
    WordTooTall {
        word: String,
        length: usize,
        height: usize,
    },
    /// No free location was found for the word within the attempt limit. Try a larger grid.
    #[error("unable to find any location for the word {word:?} after {attempts} attempts, try increasing the grid size")]
    PlacementExhausted { word: String, attempts: u32 },
    /// The language code has no registered alphabet.
    #[error("unsupported language: {0:?}")]
    UnsupportedLanguage(String),
    /// A size was requested for a word list that holds no words.
    #[error("the word list is empty")]
    EmptyWordList,
    /// A grid was built from parts whose cell count doesn't match its dimensions.
    #[error("a {width}x{height} grid can't hold {num_cells} cells")]
    InvalidGrid {
        width: usize,
        height: usize,
        num_cells: usize,
    },
}
