#![cfg_attr(feature = "unstable", feature(test))]

//! Generates word search puzzles.
//!
//! Words are hidden in a grid of letters, reading forwards or backwards along a row, a column
//! or a diagonal. Longer words are placed first, and words may cross wherever they share a
//! letter.
//!
//! ```
//! use word_search_generator::*;
//!
//! let grid = create_puzzle(12, 12, "en", &["monkey", "spider monkey", "ant"])?;
//! let puzzle = hide_words(&grid, "en")?;
//!
//! for line in print_grid(&puzzle, false) {
//!     println!("{}", line);
//! }
//! # Ok::<(), WordSearchError>(())
//! ```

mod alphabet;
mod engine;
mod grid;
mod puzzle;
mod random;
mod results;
mod words;

pub use alphabet::supported_languages;
pub use alphabet::Alphabet;
pub use engine::*;
pub use grid::*;
pub use puzzle::*;
pub use random::*;
pub use results::*;
pub use words::*;
