use game_of_life::{simulate, Board, Cell, ErrorKind, Universe};

#[test]
fn single_live_cell_has_no_neighbours() {
    let board = Board::load_from_text("*").unwrap();
    assert_eq!(board.live_neighbours_at(0, 0), 0);
}

#[test]
fn block_is_a_still_life() {
    let text = "......\n......\n..**..\n..**..\n......\n......";
    let mut universe = Universe::load_from(text).unwrap();
    universe.create_next_generation();
    assert_eq!(universe.grid(), text);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut universe = Universe::new(5, 5);
    for col in 1..=3 {
        universe.set_live_cell_at(2, col).unwrap();
    }

    universe.create_next_generation();
    for row in 0..5 {
        for col in 0..5 {
            let expected = Cell::from(col == 2 && (1..=3).contains(&row));
            assert_eq!(universe.cell_at(row, col).unwrap(), expected, "at ({}, {})", row, col);
        }
    }

    universe.create_next_generation();
    assert_eq!(universe.grid(), ".....\n.....\n.***.\n.....\n.....");
}

#[test]
fn underpopulation_and_overcrowding() {
    let lonely = simulate("...\n.*.\n...", 1).unwrap();
    assert_eq!(lonely.board().living_count(), 0);

    // Centre has four live neighbours
    let crowded = simulate(".*.\n***\n.*.", 1).unwrap();
    assert_eq!(crowded.cell_at(1, 1).unwrap(), Cell::Dead);
}

#[test]
fn unknown_glyph_fails_to_load() {
    let err = Universe::load_from("..x\n...").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);

    let err = Universe::load_from("...\n..").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn out_of_range_is_reported() {
    let mut universe = Universe::new(2, 2);
    assert_eq!(universe.cell_at(0, 2).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(
        universe.set_dead_cell_at(2, 0).unwrap_err().kind(),
        ErrorKind::IndexOutOfRange
    );
}

#[test]
fn degenerate_universes_keep_their_shape() {
    for (rows, columns) in [(0, 0), (1, 0), (0, 3), (4, 0)] {
        let mut universe = Universe::new(rows, columns);
        universe.advance(3);
        assert_eq!((universe.height(), universe.width()), (rows, columns));
    }
}
