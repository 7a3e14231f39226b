use crate::results::WordSearchError;
use std::fmt;
use std::result::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an empty cell is printed when it isn't rendered as a space.
pub const EMPTY_CELL_SYMBOL: char = '0';

/// A fixed-size grid of letters.
///
/// Each cell is either empty (`None`) or holds a single letter. The width and height are set at
/// construction and never change. Cloning a grid produces a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates a grid with the given dimensions, with every cell empty.
    ///
    /// ```
    /// use word_search_generator::Grid;
    ///
    /// let grid = Grid::new(3, 2);
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.height(), 2);
    /// assert_eq!(grid.num_empty_cells(), 6);
    /// ```
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Creates a grid from its cells, listed row by row.
    ///
    /// Fails if there aren't exactly `width * height` cells.
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<Option<char>>,
    ) -> Result<Grid, WordSearchError> {
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(WordSearchError::InvalidGrid {
                width,
                height,
                num_cells: cells.len(),
            });
        }
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    /// The number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the letter at the given location, or `None` if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if the location is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.cells[self.index_of(row, column)]
    }

    /// Writes a letter into the given location, replacing whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if the location is outside the grid.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, letter: char) {
        let index = self.index_of(row, column);
        self.cells[index] = Some(letter);
    }

    /// Returns `true` iff the given location is inside the grid.
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.height && column < self.width
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> + '_ {
        // `chunks` panics on a zero chunk size.
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Iterates over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.cells.iter().copied()
    }

    /// Iterates over every letter in the grid, skipping empty cells.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }

    /// Returns the number of cells that don't hold a letter yet.
    pub fn num_empty_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Fills every empty cell using the given function. Cells that already hold a letter are
    /// left untouched.
    pub fn fill_empty_with<F>(&mut self, mut next_letter: F)
    where
        F: FnMut() -> char,
    {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_none()) {
            *cell = Some(next_letter());
        }
    }

    /// Renders the grid as text, one string per row, with cells separated by a single space.
    ///
    /// Empty cells are printed as a space if `space_empty_cells` is true, otherwise as
    /// [`EMPTY_CELL_SYMBOL`].
    pub fn to_lines(&self, space_empty_cells: bool) -> Vec<String> {
        let empty = if space_empty_cells {
            ' '
        } else {
            EMPTY_CELL_SYMBOL
        };
        self.rows()
            .map(|row| {
                let mut line = String::with_capacity(row.len() * 2);
                for (index, cell) in row.iter().enumerate() {
                    if index > 0 {
                        line.push(' ');
                    }
                    line.push(cell.unwrap_or(empty));
                }
                line
            })
            .collect()
    }

    fn index_of(&self, row: usize, column: usize) -> usize {
        assert!(
            self.contains(row, column),
            "Location ({}, {}) is outside the {}x{} grid",
            row,
            column,
            self.width,
            self.height
        );
        row * self.width + column
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.to_lines(true).iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// The serialized form of a [`Grid`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = WordSearchError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::from_cells(raw.width, raw.height, raw.cells)
    }
}

/// Renders the grid as printable lines. See [`Grid::to_lines`].
pub fn print_grid(grid: &Grid, space_empty_cells: bool) -> Vec<String> {
    grid.to_lines(space_empty_cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4, 3);

        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 4));
        assert!(grid.cells().all(|cell| cell.is_none()));
        assert_eq!(grid.num_empty_cells(), 12);
    }

    #[test]
    fn set_and_get() {
        let mut grid = Grid::new(4, 3);

        grid.set(2, 1, 'Q');

        assert_eq!(grid.get(2, 1), Some('Q'));
        assert_eq!(grid.get(1, 2), None);
        assert_eq!(grid.num_empty_cells(), 11);
        assert_eq!(grid.letters().collect::<Vec<char>>(), vec!['Q']);
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds_panics() {
        let grid = Grid::new(4, 3);

        grid.get(3, 0);
    }

    #[test]
    fn fill_empty_with_keeps_letters() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, 'A');

        grid.fill_empty_with(|| 'Z');

        assert_eq!(grid.to_lines(false), vec!["A Z", "Z Z"]);
    }

    #[test]
    fn to_lines_renders_empty_cells() {
        let mut grid = Grid::new(3, 2);
        grid.set(0, 1, 'B');
        grid.set(1, 2, 'C');

        assert_eq!(grid.to_lines(false), vec!["0 B 0", "0 0 C"]);
        assert_eq!(grid.to_lines(true), vec!["  B  ", "    C"]);
    }

    #[test]
    fn display_uses_spaces() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, 'A');
        grid.set(1, 1, 'B');

        assert_eq!(grid.to_string(), "A  \n  B");
    }

    #[test]
    fn from_cells_checks_cell_count() {
        assert_eq!(
            Grid::from_cells(2, 2, vec![Some('A'), None, None, Some('B')])
                .map(|grid| grid.to_lines(false)),
            Ok(vec!["A 0".to_string(), "0 B".to_string()])
        );
        assert_eq!(
            Grid::from_cells(5, 5, Vec::new()),
            Err(WordSearchError::InvalidGrid {
                width: 5,
                height: 5,
                num_cells: 0,
            })
        );
        assert!(Grid::from_cells(usize::MAX, 2, Vec::new()).is_err());
    }

    #[test]
    fn zero_width_grid_has_no_rows() {
        let grid = Grid::new(0, 2);

        assert_eq!(grid.rows().count(), 0);
        assert!(grid.to_lines(true).is_empty());
    }
}
