use crate::alphabet::Alphabet;
use crate::engine::place_word_random;
use crate::grid::Grid;
use crate::results::{Placement, WordSearchError};
use crate::words::{clean_words_list, sort_words_by_length};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::result::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Builds a word search of the given size containing every word in the list. Cells that aren't
/// part of a word are left empty; use [`hide_words`] to fill them.
///
/// Words are cleaned with [`crate::clean_word`] and placed longest first.
///
/// Fails if the language isn't supported, if any word is longer than the grid's width or
/// height, or if any word can't be fit in among the others. No partial grid is returned.
///
/// ```
/// use word_search_generator::*;
///
/// let grid = create_puzzle(10, 10, "en", &["cat", "sea lion"])?;
///
/// assert!(grid.letters().count() <= 10);
/// assert!(grid.letters().all(|letter| "CATSEALION".contains(letter)));
/// # Ok::<(), WordSearchError>(())
/// ```
pub fn create_puzzle<S: AsRef<str>>(
    width: usize,
    height: usize,
    language_code: &str,
    words: &[S],
) -> Result<Grid, WordSearchError> {
    create_puzzle_with_rng(width, height, language_code, words, &mut rand::thread_rng())
}

/// The same as [`create_puzzle`], but draws all randomness from the given source.
pub fn create_puzzle_with_rng<S: AsRef<str>, R: Rng + ?Sized>(
    width: usize,
    height: usize,
    language_code: &str,
    words: &[S],
    rng: &mut R,
) -> Result<Grid, WordSearchError> {
    Alphabet::for_language(language_code)?;
    let words = sort_words_by_length(&clean_words_list(words));

    let mut grid = Grid::new(width, height);
    let placements = place_words(&mut grid, &words, rng)?;
    info!(
        "Created a {}x{} puzzle with {} words",
        width,
        height,
        placements.len()
    );
    Ok(grid)
}

/// Places each cleaned word in order, skipping blank ones. Stops at the first failure.
pub(crate) fn place_words<R: Rng + ?Sized>(
    grid: &mut Grid,
    words: &[String],
    rng: &mut R,
) -> Result<Vec<Placement>, WordSearchError> {
    let mut placements = Vec::with_capacity(words.len());
    for word in words.iter() {
        if word.is_empty() {
            warn!("Skipping a word with no letters");
            continue;
        }
        placements.push(place_word_random(grid, word, 0, rng)?);
    }
    Ok(placements)
}

/// Returns a copy of the grid with every empty cell filled by a random letter from the
/// language's alphabet. Letters already in the grid are kept.
pub fn hide_words(grid: &Grid, language_code: &str) -> Result<Grid, WordSearchError> {
    hide_words_with_rng(grid, language_code, &mut rand::thread_rng())
}

/// The same as [`hide_words`], but draws all randomness from the given source.
pub fn hide_words_with_rng<R: Rng + ?Sized>(
    grid: &Grid,
    language_code: &str,
    rng: &mut R,
) -> Result<Grid, WordSearchError> {
    let alphabet = Alphabet::for_language(language_code)?;
    let mut hidden = grid.clone();
    let num_filled = hidden.num_empty_cells();
    hidden.fill_empty_with(|| alphabet.random_letter(rng));
    info!(
        "Filled {} empty cells with {} letters",
        num_filled,
        alphabet.code()
    );
    Ok(hidden)
}

/// Describes a single puzzle to generate.
///
/// ```
/// use word_search_generator::*;
///
/// let config = PuzzleConfig::new(12, 12, vec!["monkey".to_string(), "ant".to_string()])
///     .with_language("es")
///     .with_seed(42);
/// let grid = config.generate()?;
///
/// assert_eq!(grid.num_empty_cells(), 0);
/// assert_eq!(config.generate()?, grid);
/// # Ok::<(), WordSearchError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PuzzleConfig {
    pub width: usize,
    pub height: usize,
    /// The language code of the alphabet used for the fill letters.
    pub language: String,
    pub words: Vec<String>,
    /// If set, the puzzle is generated from a random source seeded with this value, so the same
    /// config always produces the same grid.
    pub seed: Option<u64>,
    /// Whether to fill the empty cells with random letters once the words are placed.
    pub hide_words: bool,
}

impl PuzzleConfig {
    /// Creates an English config with no seed that fills the empty cells.
    pub fn new(width: usize, height: usize, words: Vec<String>) -> PuzzleConfig {
        PuzzleConfig {
            width,
            height,
            language: "en".to_string(),
            words,
            seed: None,
            hide_words: true,
        }
    }

    pub fn with_language(mut self, language: &str) -> PuzzleConfig {
        self.language = language.to_string();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> PuzzleConfig {
        self.seed = Some(seed);
        self
    }

    pub fn with_hidden_words(mut self, hide_words: bool) -> PuzzleConfig {
        self.hide_words = hide_words;
        self
    }

    /// Generates the puzzle described by this config.
    pub fn generate(&self) -> Result<Grid, WordSearchError> {
        match self.seed {
            Some(seed) => self.generate_with_rng(&mut StdRng::seed_from_u64(seed)),
            None => self.generate_with_rng(&mut rand::thread_rng()),
        }
    }

    fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, WordSearchError> {
        let grid =
            create_puzzle_with_rng(self.width, self.height, &self.language, &self.words, rng)?;
        if self.hide_words {
            return hide_words_with_rng(&grid, &self.language, rng);
        }
        Ok(grid)
    }
}

/// Generates each of the described puzzles in parallel.
///
/// Results are returned in the same order as the configs. One puzzle failing doesn't affect the
/// others.
pub fn create_puzzles(configs: &[PuzzleConfig]) -> Vec<Result<Grid, WordSearchError>> {
    configs.par_iter().map(PuzzleConfig::generate).collect()
}
