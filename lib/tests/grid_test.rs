use word_search_generator::*;

#[test]
fn new_grid_has_requested_dimensions() {
    for (width, height) in [(1, 1), (20, 20), (7, 3), (3, 7)] {
        let grid = Grid::new(width, height);

        assert_eq!(grid.rows().count(), height);
        assert!(grid.rows().all(|row| row.len() == width));
        assert_eq!(grid.num_empty_cells(), width * height);
    }
}

#[test]
fn clone_is_independent() {
    let initial = Grid::new(20, 20);
    let mut clone = initial.clone();

    clone.set(0, 0, 'X');

    assert_eq!(clone.get(0, 0), Some('X'));
    assert_eq!(initial.get(0, 0), None);
    assert_eq!(clone.width(), 20);
    assert_eq!(clone.height(), 20);
}

#[test]
fn print_grid_with_sentinel() {
    let mut grid = Grid::new(3, 3);
    place_word(&mut grid, "CAT", 1, 0, Orientation::Horizontal);

    assert_eq!(print_grid(&grid, false), vec!["0 0 0", "C A T", "0 0 0"]);
}

#[test]
fn print_grid_with_spaces() {
    let mut grid = Grid::new(3, 3);
    place_word(&mut grid, "CAT", 0, 0, Orientation::Diagonal);

    assert_eq!(print_grid(&grid, true), vec!["C    ", "  A  ", "    T"]);
}
