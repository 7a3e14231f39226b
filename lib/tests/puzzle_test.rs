#[macro_use]
extern crate assert_matches;

use rand::rngs::StdRng;
use rand::SeedableRng;
use word_search_generator::*;

const ANIMALS: [&str; 23] = [
    "fish",
    "dog",
    "cat",
    "hippopotomus",
    "lion",
    "tiger",
    "alligator",
    "crocodile",
    "monkey",
    "giraffe",
    "gazelle",
    "orangutan",
    "lemur",
    "shark",
    "whale",
    "shrimp",
    "seal",
    "sea lion",
    "bear",
    "salmon",
    "crab",
    "lizard",
    "spider",
];

#[test]
fn create_puzzle_only_uses_word_letters() -> Result<(), WordSearchError> {
    let grid = create_puzzle(20, 20, "en", &ANIMALS)?;

    let word_letters = clean_words_list(&ANIMALS).concat();
    assert!(grid.letters().all(|letter| word_letters.contains(letter)));
    assert!(grid.num_empty_cells() > 0);
    Ok(())
}

#[test]
fn create_puzzle_places_each_word() -> Result<(), WordSearchError> {
    let mut rng = StdRng::seed_from_u64(2018);

    let grid = create_puzzle_with_rng(20, 20, "en", &ANIMALS, &mut rng)?;

    let total_letters: usize = clean_words_list(&ANIMALS)
        .iter()
        .map(|word| word.chars().count())
        .sum();
    let num_letters = grid.letters().count();
    // Words may share cells where they cross.
    assert!(num_letters <= total_letters);
    assert!(num_letters >= "HIPPOPOTOMUS".len());
    Ok(())
}

#[test]
fn create_puzzle_is_reproducible_with_seed() -> Result<(), WordSearchError> {
    let first =
        create_puzzle_with_rng(15, 15, "en", &ANIMALS[..10], &mut StdRng::seed_from_u64(8))?;
    let second =
        create_puzzle_with_rng(15, 15, "en", &ANIMALS[..10], &mut StdRng::seed_from_u64(8))?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn create_puzzle_word_too_long_fails() {
    assert_matches!(
        create_puzzle(10, 20, "en", &ANIMALS),
        Err(WordSearchError::WordTooWide { word, .. }) if word == "HIPPOPOTOMUS"
    );
    assert_matches!(
        create_puzzle(20, 10, "en", &ANIMALS),
        Err(WordSearchError::WordTooTall { word, .. }) if word == "HIPPOPOTOMUS"
    );
}

#[test]
fn create_puzzle_crowded_grid_fails() {
    assert_matches!(
        create_puzzle(2, 2, "en", &["ab", "cd", "ef", "gh"]),
        Err(WordSearchError::PlacementExhausted { attempts, .. })
            if attempts > MAX_PLACEMENT_ATTEMPTS
    );
}

#[test]
fn create_puzzle_unsupported_language_fails() {
    assert_matches!(
        create_puzzle(20, 20, "xx", &ANIMALS),
        Err(WordSearchError::UnsupportedLanguage(code)) if code == "xx"
    );
}

#[test]
fn hide_words_fills_every_cell() -> Result<(), WordSearchError> {
    let grid = create_puzzle(20, 20, "en", &ANIMALS)?;

    let hidden = hide_words(&grid, "en")?;

    assert_eq!(hidden.num_empty_cells(), 0);
    assert!(hidden
        .letters()
        .all(|letter| letter.is_ascii_uppercase()));
    for (original, filled) in grid.cells().zip(hidden.cells()) {
        if original.is_some() {
            assert_eq!(original, filled);
        }
    }
    Ok(())
}

#[test]
fn hide_words_spanish_alphabet() -> Result<(), WordSearchError> {
    let grid = create_puzzle(8, 8, "es", &["niño", "año"])?;

    let hidden = hide_words(&grid, "es")?;

    let alphabet = Alphabet::for_language("es")?;
    assert!(hidden
        .letters()
        .all(|letter| alphabet.letters().contains(&letter)));
    Ok(())
}

#[test]
fn hide_words_unsupported_language_fails() {
    let grid = Grid::new(5, 5);

    assert_matches!(
        hide_words(&grid, "klingon"),
        Err(WordSearchError::UnsupportedLanguage(_))
    );
}

#[test]
fn create_puzzles_keeps_order() {
    let configs = vec![
        PuzzleConfig::new(10, 10, vec!["otter".to_string()]).with_seed(1),
        PuzzleConfig::new(3, 10, vec!["otter".to_string()]),
        PuzzleConfig::new(3, 3, vec!["otter".to_string()]),
        PuzzleConfig::new(6, 6, vec!["otter".to_string()])
            .with_language("es")
            .with_hidden_words(false),
    ];

    let results = create_puzzles(&configs);

    assert_eq!(results.len(), 4);
    assert_matches!(&results[0], Ok(grid) if grid.num_empty_cells() == 0);
    assert_matches!(&results[1], Err(WordSearchError::WordTooWide { width: 3, .. }));
    // Rows are checked before columns.
    assert_matches!(&results[2], Err(WordSearchError::WordTooTall { height: 3, .. }));
    assert_matches!(&results[3], Ok(grid) if grid.letters().count() == 5);
}
