use crate::grid::Grid;
use crate::random::*;
use crate::results::*;
use crate::words::{reverse_word, word_length};
use log::{debug, trace};
use rand::Rng;
use std::fmt;
use std::result::Result;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of random locations tried for a single word before giving up on it.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// The smallest starting column for any word.
pub const MIN_COLUMN_INDEX: usize = 0;

/// The smallest starting row for any word.
pub const MIN_ROW_INDEX: usize = 0;

/// The line along which a word's letters are laid out, starting from its first letter.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Down and to the right.
    Diagonal,
}

impl Orientation {
    /// Every orientation, in a fixed order.
    pub const ALL: [Orientation; 3] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Diagonal,
    ];

    /// The `(row, column)` step between consecutive letters.
    #[inline]
    pub fn delta(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Diagonal => (1, 1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::Diagonal => "diagonal",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::ALL
            .into_iter()
            .find(|orientation| orientation.as_str() == s)
            .ok_or_else(|| format!("unknown orientation: {}", s))
    }
}

/// Returns the largest starting column at which the word still fits inside the grid
/// horizontally.
///
/// Fails if the word is wider than the grid.
pub fn max_column_index(grid: &Grid, word: &str) -> Result<usize, WordSearchError> {
    let length = word_length(word);
    if length > grid.width() {
        return Err(WordSearchError::WordTooWide {
            word: word.to_string(),
            length,
            width: grid.width(),
        });
    }
    Ok(grid.width() - length)
}

/// Returns the largest starting row at which the word still fits inside the grid vertically.
///
/// Fails if the word is taller than the grid.
pub fn max_row_index(grid: &Grid, word: &str) -> Result<usize, WordSearchError> {
    let length = word_length(word);
    if length > grid.height() {
        return Err(WordSearchError::WordTooTall {
            word: word.to_string(),
            length,
            height: grid.height(),
        });
    }
    Ok(grid.height() - length)
}

/// Returns `true` iff the word can be written starting at the given location without changing
/// any letter that is already in the grid.
///
/// A cell that already holds the same letter as the word at that position is a legal overlap.
///
/// # Panics
///
/// Panics if the word's span leaves the grid. Use [`max_row_index`] and [`max_column_index`]
/// to pick valid starting locations.
pub fn can_place_word(
    grid: &Grid,
    word: &str,
    row: usize,
    column: usize,
    orientation: Orientation,
) -> bool {
    let (row_step, column_step) = orientation.delta();
    word.chars().enumerate().all(|(i, letter)| {
        match grid.get(row + i * row_step, column + i * column_step) {
            Some(existing) => existing == letter,
            None => true,
        }
    })
}

/// Writes the word into the grid starting at the given location.
///
/// This does not check for collisions: call [`can_place_word`] first.
///
/// # Panics
///
/// Panics if the word's span leaves the grid.
pub fn place_word(
    grid: &mut Grid,
    word: &str,
    row: usize,
    column: usize,
    orientation: Orientation,
) {
    let (row_step, column_step) = orientation.delta();
    for (i, letter) in word.chars().enumerate() {
        grid.set(row + i * row_step, column + i * column_step, letter);
    }
}

/// Places the word at a random location, orientation and direction where it doesn't conflict
/// with the letters already in the grid.
///
/// Each attempt draws a new random location. `attempt_counter` is the number of attempts that
/// have already been made for this word (normally 0); once it exceeds
/// [`MAX_PLACEMENT_ATTEMPTS`] this fails with [`WordSearchError::PlacementExhausted`], which
/// means the grid is too small or too crowded for the word.
///
/// ```
/// use word_search_generator::*;
///
/// let mut grid = Grid::new(10, 10);
/// let placement = place_word_random(&mut grid, "KITTEN", 0, &mut rand::thread_rng())?;
///
/// assert_eq!(grid.letters().count(), 6);
/// assert_eq!(placement.cells().count(), 6);
/// # Ok::<(), WordSearchError>(())
/// ```
pub fn place_word_random<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &str,
    attempt_counter: u32,
    rng: &mut R,
) -> Result<Placement, WordSearchError> {
    let mut attempt = attempt_counter;
    if attempt > MAX_PLACEMENT_ATTEMPTS {
        return Err(WordSearchError::PlacementExhausted {
            word: word.to_string(),
            attempts: attempt,
        });
    }
    let max_row = max_row_index(grid, word)?;
    let max_column = max_column_index(grid, word)?;
    let backward = reverse_word(word);

    while attempt <= MAX_PLACEMENT_ATTEMPTS {
        let direction = if random_bool(rng) {
            Direction::Backward
        } else {
            Direction::Forward
        };
        let row = random_int_inclusive(rng, MIN_ROW_INDEX, max_row);
        let column = random_int_inclusive(rng, MIN_COLUMN_INDEX, max_column);
        let orientation = random_orientation(rng);
        let variant = match direction {
            Direction::Forward => word,
            Direction::Backward => backward.as_str(),
        };

        if can_place_word(grid, variant, row, column, orientation) {
            place_word(grid, variant, row, column, orientation);
            debug!(
                "Placed {} {} {} at ({}, {}) after {} attempt(s)",
                word,
                orientation,
                direction,
                row,
                column,
                attempt - attempt_counter + 1
            );
            return Ok(Placement {
                word: variant.to_string(),
                row,
                column,
                orientation,
                direction,
            });
        }
        trace!(
            "Collision placing {} {} at ({}, {})",
            variant,
            orientation,
            row,
            column
        );
        attempt += 1;
    }

    Err(WordSearchError::PlacementExhausted {
        word: word.to_string(),
        attempts: attempt,
    })
}
