use proptest::prelude::*;
use sapper_core::{
    Board, CellLabel, GameConfig, GameStatus, MineField, MineFieldGenerator, PlayerCell,
    RandomMineFieldGenerator, RevealOutcome, neighbors,
};

fn arb_config() -> impl Strategy<Value = (GameConfig, u64)> {
    // keep at least one eligible cell free so validation passes
    (3u8..=16, 3u8..=16, any::<u64>()).prop_flat_map(|(rows, cols, seed)| {
        let eligible = (rows as u16 - 1) * (cols as u16 - 1);
        (1u16..eligible, Just((rows, cols)), Just(seed))
            .prop_map(|(mines, size, seed)| (GameConfig::new(size, mines), seed))
    })
}

fn generate(config: GameConfig, seed: u64) -> MineField {
    RandomMineFieldGenerator::new(seed).generate(config).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn mine_count_is_exact_and_mines_avoid_the_first_row_and_column(
        (config, seed) in arb_config()
    ) {
        let field = generate(config, seed);
        prop_assert_eq!(field.mine_count(), config.mines);
        for &(row, col) in field.mines() {
            prop_assert!(row >= 1 && col >= 1);
        }
    }

    #[test]
    fn labels_agree_with_a_brute_force_adjacency_recount(
        (config, seed) in arb_config()
    ) {
        let field = generate(config, seed);
        let size = field.size();
        for row in 0..size.0 {
            for col in 0..size.1 {
                let counted = neighbors((row, col), size)
                    .filter(|&pos| field.contains_mine(pos))
                    .count() as u8;
                match field.label((row, col)) {
                    CellLabel::Mine => prop_assert!(field.contains_mine((row, col))),
                    CellLabel::Empty => prop_assert_eq!(counted, 0),
                    CellLabel::Count(n) => {
                        prop_assert!((1..=8).contains(&n));
                        prop_assert_eq!(n, counted);
                    }
                }
            }
        }
    }

    #[test]
    fn revealing_every_safe_cell_wins_and_never_opens_a_mine(
        (config, seed) in arb_config()
    ) {
        let field = generate(config, seed);
        let size = field.size();
        let safe_cells = field.safe_cell_count();
        let mut board = Board::new(field);

        'outer: for row in 0..size.0 {
            for col in 0..size.1 {
                if board.is_mine((row, col)).unwrap() {
                    continue;
                }
                let outcome = board.reveal((row, col)).unwrap();
                prop_assert_ne!(outcome, RevealOutcome::Loss);
                if board.status() == GameStatus::Won {
                    break 'outer;
                }
            }
        }

        prop_assert_eq!(board.status(), GameStatus::Won);
        prop_assert_eq!(board.revealed_cells(), safe_cells);
        for row in 0..size.0 {
            for col in 0..size.1 {
                let revealed_mine = board.is_mine((row, col)).unwrap()
                    && matches!(board.player_cell((row, col)).unwrap(), PlayerCell::Revealed(_));
                prop_assert!(!revealed_mine);
            }
        }
    }

    #[test]
    fn flagging_exactly_the_mine_set_wins(
        (config, seed) in arb_config()
    ) {
        let field = generate(config, seed);
        let mines: Vec<_> = field.mines().to_vec();
        let mut board = Board::new(field);

        for &coords in &mines {
            prop_assert!(!board.is_finished());
            board.flag(coords).unwrap();
        }

        prop_assert!(board.check_win());
        prop_assert_eq!(board.status(), GameStatus::Won);
    }
}
