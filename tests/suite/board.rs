//! Board behaviour on a real puzzle

use insta::assert_snapshot;
use starbattle_core::{
    BoardError, BoardMode, Cascade, CellError, CellStatus, Coordinate, Group, Violation,
};

use crate::common::{EASY_1_STARS, easy_1, easy_1_board};

fn star_solution(board: &mut starbattle_core::Board) {
    for &coord in easy_1().solution().unwrap() {
        board.star(coord, Cascade::DotAdjacents).unwrap();
    }
}

#[test]
fn easy_1_solution_completes_the_board() {
    let mut board = easy_1_board(BoardMode::Deterministic);
    star_solution(&mut board);

    assert_eq!(board.num_stars(), 18);
    assert!(board.is_valid(), "{:?}", board.violations());
    assert!(board.is_complete());
    assert_eq!(board.star_masks(), EASY_1_STARS);
}

#[test]
fn easy_1_solved_grid() {
    let mut board = easy_1_board(BoardMode::Deterministic);
    star_solution(&mut board);

    assert_eq!(board.num_dots(), 62);
    assert_eq!(board.num_blanks(), 1);
    assert_snapshot!(board.to_string(), @r"
    x * x x x x x * x
    x x x * x * x x x
    * x x x x x x x *
    x x x x * x * x x
    * x * x x x x x x
    x x x x x * x * x
    x * x * x x x x x
    x x x x x x * x *
    . x * x * x x x x
    ");
}

#[test]
fn every_line_and_shape_holds_two_stars() {
    let mut board = easy_1_board(BoardMode::Deterministic);
    star_solution(&mut board);

    for row in board.rows() {
        assert_eq!(row.count(CellStatus::Star), 2, "{row:?}");
    }
    for column in board.columns() {
        assert_eq!(column.count(CellStatus::Star), 2, "{column:?}");
    }
    let counts = board.group_star_counts();
    assert_eq!(counts.len(), 27);
    assert!(counts.iter().all(|(_, stars)| *stars == 2));
}

#[test]
fn partial_solution_is_valid_not_complete() {
    let mut board = easy_1_board(BoardMode::Deterministic);
    for &coord in &easy_1().solution().unwrap()[..5] {
        board.star(coord, Cascade::DotAdjacents).unwrap();
    }

    assert!(board.is_valid());
    assert!(!board.is_complete());
}

#[test]
fn overfilled_shape_is_reported() {
    // Shape 0 covers (0,0), (1,0), (0,1) and (0,2).
    let mut board = easy_1_board(BoardMode::Deterministic);
    for coord in [Coordinate::new(0, 0), Coordinate::new(0, 2)] {
        board.star(coord, Cascade::Skip).unwrap();
    }
    board.star(Coordinate::new(1, 0), Cascade::Skip).unwrap();

    let violations = board.violations();
    assert!(violations.contains(&Violation::TooManyStars {
        group: Group::Shape(0),
        stars: 3,
        limit: 2,
    }));
    assert!(violations.contains(&Violation::AdjacentStars {
        first: Coordinate::new(0, 0),
        second: Coordinate::new(1, 0),
    }));
}

#[test]
fn cascade_blocks_neighbouring_star() {
    let mut board = easy_1_board(BoardMode::Deterministic);
    board
        .star(Coordinate::new(4, 4), Cascade::DotAdjacents)
        .unwrap();

    assert_eq!(
        board.star(Coordinate::new(5, 5), Cascade::DotAdjacents),
        Err(BoardError::Cell(CellError::Dotted(Coordinate::new(5, 5))))
    );
}

#[test]
fn probabilistic_easy_1_field() {
    let mut board = easy_1_board(BoardMode::Probabilistic);
    let fresh = board.probability_field().unwrap();
    assert_eq!(fresh.len(), 81);
    assert!(fresh.samples().iter().all(|s| s.p_star == 2.0 / 9.0));

    star_solution(&mut board);
    let solved = board.probability_field().unwrap();
    let ones = solved.samples().iter().filter(|s| s.p_star == 1.0).count();
    let zeros = solved.samples().iter().filter(|s| s.p_star == 0.0).count();
    assert_eq!((ones, zeros), (18, 62));
    assert_eq!(solved.get(Coordinate::new(0, 8)), Some(2.0 / 9.0));

    // The earlier snapshot is unaffected.
    assert_eq!(fresh.get(Coordinate::new(1, 0)), Some(2.0 / 9.0));
}

#[test]
fn row_and_column_views_share_cells() {
    let mut board = easy_1_board(BoardMode::Deterministic);
    board
        .column_mut(6)
        .unwrap()
        .star(3, Cascade::Skip)
        .unwrap();

    let row = board.row(3).unwrap();
    assert_eq!(row[6].status(), CellStatus::Star);
    assert_eq!(row[6].coord(), Coordinate::new(6, 3));
    assert_eq!(board.num_stars(), 1);
}
