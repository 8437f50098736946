use game_of_life::{Board, Cell, ErrorKind, GameOfLifeRules, Grid, Universe};
use proptest::prelude::*;

fn arb_board() -> impl Strategy<Value = Board> {
    (0usize..8, 0usize..8).prop_flat_map(|(rows, columns)| {
        prop::collection::vec(any::<bool>(), rows * columns).prop_map(move |cells| {
            Board::from_grid(Grid::from_fn(rows, columns, |row, col| {
                Cell::from(cells[row * columns + col])
            }))
        })
    })
}

proptest! {
    #[test]
    fn text_round_trip(board in arb_board()) {
        // Zero rows, or one empty row, both encode to ""
        let ambiguous = (board.height() == 0 && board.width() > 0)
            || (board.height() == 1 && board.width() == 0);
        prop_assume!(!ambiguous);
        let reloaded = Board::load_from_text(&board.to_text()).unwrap();
        prop_assert_eq!(reloaded, board);
    }

    #[test]
    fn neighbour_count_is_bounded(board in arb_board()) {
        for row in 0..board.height() {
            for col in 0..board.width() {
                prop_assert!(board.live_neighbours_at(row, col) <= 8);
            }
        }
    }

    #[test]
    fn generation_follows_rule_on_every_cell(board in arb_board()) {
        let next = GameOfLifeRules::evolve(&board);
        for row in 0..board.height() {
            for col in 0..board.width() {
                let expected = GameOfLifeRules::next_state(
                    board.get(row, col).unwrap(),
                    board.live_neighbours_at(row, col),
                );
                prop_assert_eq!(next.get(row, col).unwrap(), expected);
            }
        }
    }

    #[test]
    fn dimensions_are_invariant(board in arb_board(), ticks in 0usize..6) {
        let (rows, columns) = (board.height(), board.width());
        let mut universe = Universe::from_board(board);
        for _ in 0..ticks {
            universe.create_next_generation();
            prop_assert_eq!((universe.height(), universe.width()), (rows, columns));
        }
    }

    #[test]
    fn foreign_glyphs_are_decode_errors(ch in any::<char>().prop_filter("not a glyph", |c| !matches!(*c, '*' | '.' | '\n'))) {
        let text = format!("*.\n.{}", ch);
        let err = Board::load_from_text(&text).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
