//! Grid and line-clear tests

use proptest::prelude::*;

use mattris::core::grid::Grid;
use mattris::core::line_clear::{clear_and_collapse, find_clearable_rows};
use mattris::core::CoreError;
use mattris::types::{ColorId, MAX_PIECE_SIZE};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(20, 10);
    assert_eq!((grid.rows(), grid.cols()), (20, 10));
    for row in 0..20 {
        for col in 0..10 {
            assert_eq!(grid.get(row, col), Ok(None), "cell ({row}, {col}) should be empty");
        }
    }
}

#[test]
fn test_grid_out_of_bounds_is_an_error() {
    let mut grid = Grid::new(20, 10);
    assert!(matches!(grid.get(20, 0), Err(CoreError::OutOfBounds { row: 20, .. })));
    assert!(grid.is_occupied(0, 10).is_err());
    assert!(grid.occupy(0, 10, ColorId::Red).is_err());
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_occupy_and_clear_cell() {
    let mut grid = Grid::new(20, 10);
    grid.occupy(5, 3, ColorId::Yellow).unwrap();
    assert_eq!(grid.is_occupied(5, 3), Ok(true));
    assert_eq!(grid.get(5, 3), Ok(Some(ColorId::Yellow)));

    grid.clear(5, 3).unwrap();
    assert_eq!(grid.is_occupied(5, 3), Ok(false));
}

#[test]
fn test_single_row_clear_shifts_everything_above_down_one() {
    let mut grid = Grid::from_rows(&[
        "R.........", // 0
        ".B........", // 1
        "..G.......", // 2
        "YYYYYYYYYY", // 3
        "...W......", // 4
    ]);
    let rows = find_clearable_rows(0, None, &grid);
    assert_eq!(rows, vec![3]);

    clear_and_collapse(&rows, &mut grid);
    assert_eq!(
        grid.to_rows(),
        vec!["..........", "R.........", ".B........", "..G.......", "...W......"]
    );
}

#[test]
fn test_clear_outside_scan_window_is_ignored() {
    let grid = Grid::from_rows(&["RRRR", "....", "....", "....", "....", "RRRR"]);
    assert_eq!(find_clearable_rows(1, None, &grid), Vec::<usize>::new());
    assert_eq!(find_clearable_rows(2, None, &grid), vec![5]);
    assert_eq!(find_clearable_rows(0, Some(0), &grid), Vec::<usize>::new());
}

#[test]
fn test_four_row_clear_empties_bottom() {
    let mut lines = vec!["..R......."; 16];
    lines.extend(["WWWWWWWWWW"; 4]);
    let mut grid = Grid::from_rows(&lines);

    let rows = find_clearable_rows(16, Some(4), &grid);
    assert_eq!(rows, vec![16, 17, 18, 19]);
    clear_and_collapse(&rows, &mut grid);

    assert_eq!(grid.occupied_count(), 16);
    for row in 0..4 {
        assert!(grid.row(row).unwrap().iter().all(Option::is_none));
    }
    assert_eq!(grid.get(19, 2), Ok(Some(ColorId::Red)));
}

fn arb_grid() -> impl Strategy<Value = Vec<Vec<bool>>> {
    // Bias rows toward full so the scan finds something.
    let row = prop_oneof![
        Just(vec![true; 10]),
        prop::collection::vec(any::<bool>(), 10),
    ];
    prop::collection::vec(row, 20)
}

fn build(cells: &[Vec<bool>]) -> Grid {
    let mut grid = Grid::new(cells.len(), 10);
    for (r, row) in cells.iter().enumerate() {
        for (c, &filled) in row.iter().enumerate() {
            if filled {
                grid.occupy(r, c, ColorId::Blue).unwrap();
            }
        }
    }
    grid
}

proptest! {
    #[test]
    fn clearable_rows_are_exactly_the_full_rows_in_window(
        cells in arb_grid(),
        from in 0usize..20,
        span in prop::option::of(1usize..8),
    ) {
        let grid = build(&cells);
        let last = (from + span.unwrap_or(MAX_PIECE_SIZE) - 1).min(19);
        let expected: Vec<usize> = (from..=last)
            .filter(|&r| cells[r].iter().all(|&f| f))
            .collect();

        prop_assert_eq!(find_clearable_rows(from, span, &grid), expected);
    }

    #[test]
    fn collapse_preserves_uncleared_rows_in_order(cells in arb_grid()) {
        let mut grid = build(&cells);
        let rows = find_clearable_rows(0, Some(20), &grid);
        let before = grid.to_rows();
        clear_and_collapse(&rows, &mut grid);

        let kept: Vec<String> = before
            .iter()
            .enumerate()
            .filter(|(r, _)| !rows.contains(r))
            .map(|(_, line)| line.clone())
            .collect();
        let after = grid.to_rows();

        // Cleared rows reappear as empty rows on top.
        for line in &after[..rows.len()] {
            prop_assert_eq!(line.as_str(), "..........");
        }
        prop_assert_eq!(&after[rows.len()..], kept.as_slice());
    }
}
