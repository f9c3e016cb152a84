//! Puzzle decoding against the bundled fixtures

use starbattle_config::{PuzzleDefinition, PuzzleError};
use starbattle_core::{BoardDimensions, Coordinate};

use crate::common::easy_1;

#[test]
fn easy_1_partitions_the_board() {
    let puzzle = easy_1();
    let total: usize = puzzle.shapes().iter().map(|shape| shape.coords.len()).sum();

    assert_eq!(puzzle.shapes().len(), 9);
    assert_eq!(total, 81);
    assert_eq!(puzzle.solution().map(<[Coordinate]>::len), Some(18));
}

#[test]
fn easy_1_solution_is_row_major() {
    let solution = easy_1().solution().unwrap().to_vec();
    assert_eq!(&solution[..4], &[
        Coordinate::new(1, 0),
        Coordinate::new(7, 0),
        Coordinate::new(3, 1),
        Coordinate::new(5, 1),
    ]);
}

#[test]
fn shape_colours_follow_declaration_order() {
    let puzzle = easy_1();
    let colours: Vec<u32> = puzzle.shapes().iter().map(|shape| shape.colour).collect();
    assert_eq!(colours, (0..9).collect::<Vec<_>>());
}

#[test]
fn overlapping_row_mask_is_caught() {
    // Shape 5 row 4 as 484 also claims (2, 4), which shape 3 owns.
    let json = r#"{
        "shapes": [
            [3, 1, 1],
            [0, 0, 0, 3, 3, 3, 3, 3, 3],
            [12, 30, 62, 60, 24, 16, 16],
            [0, 0, 0, 0, 4, 12, 12, 60, 480],
            [0, 0, 0, 0, 0, 0, 0, 0, 28],
            [112, 224, 192, 448, 484, 256],
            [0, 0, 0, 0, 96, 224, 480],
            [0, 0, 0, 0, 0, 0, 0, 448],
            [384, 256, 256]
        ]
    }"#;
    let err = PuzzleDefinition::from_json(json, BoardDimensions::STANDARD).unwrap_err();

    assert!(matches!(
        err,
        PuzzleError::Overlap { coord, first: 3, second: 5 } if coord == Coordinate::new(2, 4)
    ));
    assert_eq!(
        err.to_string(),
        "coordinate (2, 4) belongs to both shape 3 and shape 5"
    );
}

#[test]
fn fixture_for_wrong_board_size_is_rejected() {
    let dims = BoardDimensions::new(8, 2).unwrap();
    let err = PuzzleDefinition::load(&crate::common::fixture("easy_1.json"), dims).unwrap_err();
    assert!(matches!(err, PuzzleError::TooManyRows { rows: 9, dimension: 8, .. }));
}
