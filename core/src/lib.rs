use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Board dimensions and mine budget for one game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `(rows, cols)`
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Cells mines may be drawn from. The first row and the first column
    /// are never eligible (see `eligible region` in the generator docs).
    pub const fn eligible_cells(&self) -> CellCount {
        mult(
            self.size.0.saturating_sub(1),
            self.size.1.saturating_sub(1),
        )
    }

    /// The mine count must leave at least one eligible cell free.
    pub fn validate(&self) -> Result<()> {
        let eligible = self.eligible_cells();
        if self.mines == 0 || self.mines >= eligible {
            return Err(GameError::MineCountInvalid {
                requested: self.mines,
                eligible,
            });
        }
        Ok(())
    }
}

/// The three fixed difficulty settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::new((9, 9), 10),
            Self::Intermediate => GameConfig::new((16, 16), 40),
            // 16 wide by 30 tall
            Self::Expert => GameConfig::new((30, 16), 99),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }
}

/// A fully generated truth grid: per-cell labels plus the mine set.
///
/// Immutable once built; [`Board`] consumes one to start a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineField {
    labels: Array2<CellLabel>,
    mines: Vec<Coord2>,
}

impl MineField {
    /// Builds the truth grid from an explicit mine list. Rejects
    /// out-of-bounds and duplicate coordinates.
    ///
    /// Adjacency counts are accumulated in a second pass over the complete
    /// mine set, so the result never depends on the order of `mine_coords`.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut labels: Array2<CellLabel> = Array2::default(size.to_nd_index());
        let mut mines = Vec::with_capacity(mine_coords.len());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            if labels[coords.to_nd_index()].is_mine() {
                return Err(GameError::DuplicateMine);
            }
            labels[coords.to_nd_index()] = CellLabel::Mine;
            mines.push(coords);
        }

        for &coords in &mines {
            for pos in neighbors(coords, size) {
                let label = &mut labels[pos.to_nd_index()];
                *label = label.incremented();
            }
        }

        mines.sort_unstable();
        Ok(Self { labels, mines })
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.labels.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len().try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        self.labels.len().try_into().unwrap()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    /// Mine coordinates in sorted order.
    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.labels[coords.to_nd_index()].is_mine()
    }

    pub fn label(&self, coords: Coord2) -> CellLabel {
        self.labels[coords.to_nd_index()]
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            size: self.size(),
            mines: self.mine_count(),
        }
    }

    pub(crate) fn into_parts(self) -> (Array2<CellLabel>, Vec<Coord2>) {
        (self.labels, self.mines)
    }
}

/// Outcome of a single `reveal` call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    /// The target was a mine; the game is lost.
    Loss,
    /// The target was already revealed; nothing changed.
    AlreadyRevealed,
    /// The target (and possibly a flood-filled region) was revealed.
    Safe,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Loss => true,
            Self::AlreadyRevealed => false,
            Self::Safe => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_mine_coords_counts_shared_neighbors() {
        let field = MineField::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(field.label((0, 0)), CellLabel::Mine);
        assert_eq!(field.label((2, 2)), CellLabel::Mine);
        // adjacent to both mines
        assert_eq!(field.label((1, 1)), CellLabel::Count(2));
        // adjacent to exactly one
        assert_eq!(field.label((0, 1)), CellLabel::Count(1));
        assert_eq!(field.label((2, 1)), CellLabel::Count(1));
        // adjacent to neither
        assert_eq!(field.label((0, 2)), CellLabel::Empty);
        assert_eq!(field.label((2, 0)), CellLabel::Empty);
    }

    #[test]
    fn from_mine_coords_is_order_independent() {
        let mines = [(1, 1), (1, 2), (2, 1)];
        let mut reversed = mines;
        reversed.reverse();

        let a = MineField::from_mine_coords((4, 4), &mines).unwrap();
        let b = MineField::from_mine_coords((4, 4), &reversed).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn from_mine_coords_rejects_out_of_bounds() {
        let result = MineField::from_mine_coords((3, 3), &[(3, 0)]);
        assert_eq!(result.unwrap_err(), GameError::InvalidCoords);
    }

    #[test]
    fn from_mine_coords_rejects_duplicates() {
        let result = MineField::from_mine_coords((3, 3), &[(1, 1), (1, 1)]);
        assert_eq!(result.unwrap_err(), GameError::DuplicateMine);
    }

    #[test]
    fn config_validation_bounds_the_mine_count() {
        assert!(GameConfig::new((9, 9), 10).validate().is_ok());
        assert_eq!(
            GameConfig::new((9, 9), 0).validate().unwrap_err(),
            GameError::MineCountInvalid {
                requested: 0,
                eligible: 64,
            }
        );
        // 64 eligible cells on a 9x9 board; 64 mines would fill the region
        assert!(GameConfig::new((9, 9), 64).validate().is_err());
        assert!(GameConfig::new((9, 9), 63).validate().is_ok());
    }

    #[test]
    fn preset_table_matches_the_classic_difficulties() {
        assert_eq!(Preset::Beginner.config(), GameConfig::new((9, 9), 10));
        assert_eq!(
            Preset::Intermediate.config(),
            GameConfig::new((16, 16), 40)
        );
        assert_eq!(Preset::Expert.config(), GameConfig::new((30, 16), 99));

        for preset in Preset::ALL {
            assert!(preset.config().validate().is_ok());
        }
    }
}
