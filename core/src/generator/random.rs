use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Draws the requested number of mines uniformly, without replacement,
/// from the eligible region of the board.
///
/// The eligible region excludes the entire first row and first column:
/// mines only ever land on `row >= 1 && col >= 1`. Deterministic for a
/// given seed and config.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMineFieldGenerator {
    seed: u64,
}

impl RandomMineFieldGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineFieldGenerator for RandomMineFieldGenerator {
    fn generate(&self, config: GameConfig) -> Result<MineField> {
        config.validate()?;

        let (rows, cols) = config.size;
        // validate() guarantees at least two rows and columns
        let inner_cols = (cols - 1) as usize;
        let eligible = config.eligible_cells() as usize;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mine_coords: Vec<Coord2> = index::sample(&mut rng, eligible, config.mines as usize)
            .into_iter()
            .map(|i| {
                let row = 1 + (i / inner_cols) as Coord;
                let col = 1 + (i % inner_cols) as Coord;
                (row, col)
            })
            .collect();

        log::debug!(
            "placed {} mines on a {rows}x{cols} board (seed {})",
            mine_coords.len(),
            self.seed
        );
        MineField::from_mine_coords(config.size, &mine_coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(seed: u64, config: GameConfig) -> MineField {
        RandomMineFieldGenerator::new(seed).generate(config).unwrap()
    }

    #[test]
    fn places_exactly_the_requested_number_of_mines() {
        for preset in Preset::ALL {
            let field = generate(7, preset.config());
            assert_eq!(field.mine_count(), preset.config().mines);
        }
    }

    #[test]
    fn never_places_mines_in_the_first_row_or_column() {
        for seed in 0..32 {
            let field = generate(seed, Preset::Beginner.config());
            for &(row, col) in field.mines() {
                assert!(row >= 1 && col >= 1, "mine at ({row},{col})");
            }
        }
    }

    #[test]
    fn is_deterministic_for_a_fixed_seed() {
        let config = Preset::Intermediate.config();
        assert_eq!(generate(42, config), generate(42, config));
    }

    #[test]
    fn different_seeds_produce_different_layouts() {
        let config = Preset::Expert.config();
        assert_ne!(generate(1, config), generate(2, config));
    }

    #[test]
    fn rejects_an_unsatisfiable_mine_count() {
        let generator = RandomMineFieldGenerator::new(0);
        // 3x3 leaves a 2x2 eligible region, so 4 mines cannot fit
        let result = generator.generate(GameConfig::new((3, 3), 4));
        assert_eq!(
            result.unwrap_err(),
            GameError::MineCountInvalid {
                requested: 4,
                eligible: 4,
            }
        );
        assert!(generator.generate(GameConfig::new((3, 3), 3)).is_ok());
    }

    #[test]
    fn adjacency_counts_match_a_brute_force_recount() {
        let field = generate(9, Preset::Beginner.config());
        let size = field.size();

        for row in 0..size.0 {
            for col in 0..size.1 {
                let expected = neighbors((row, col), size)
                    .filter(|&pos| field.contains_mine(pos))
                    .count() as u8;
                match field.label((row, col)) {
                    CellLabel::Mine => assert!(field.mines().contains(&(row, col))),
                    CellLabel::Empty => assert_eq!(expected, 0),
                    CellLabel::Count(n) => assert_eq!(n, expected),
                }
            }
        }
    }
}
