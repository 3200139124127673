use serde::{Deserialize, Serialize};

/// Truth label of a cell, fixed at generation time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellLabel {
    Mine,
    Empty,
    /// Number of 8-adjacent mines, always in `1..=8`.
    Count(u8),
}

impl CellLabel {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Adjacency count as a plain number; mines have no count.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Empty => Some(0),
            Self::Count(n) => Some(n),
        }
    }

    /// One more adjacent mine; mines keep their label.
    pub(crate) const fn incremented(self) -> Self {
        match self {
            Self::Mine => Self::Mine,
            Self::Empty => Self::Count(1),
            Self::Count(n) => Self::Count(n + 1),
        }
    }
}

impl Default for CellLabel {
    fn default() -> Self {
        Self::Empty
    }
}

/// What the player currently knows about a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Flagged,
    Revealed,
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Hidden
    }
}

/// A single board cell: the truth label and its player-facing visibility
/// live in one value, so the two views cannot drift apart.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) label: CellLabel,
    pub(crate) visibility: Visibility,
}

/// Player-visible projection of a [`Cell`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCell {
    Hidden,
    Flagged,
    Revealed(CellLabel),
}

impl From<Cell> for PlayerCell {
    fn from(cell: Cell) -> Self {
        match cell.visibility {
            Visibility::Hidden => Self::Hidden,
            Visibility::Flagged => Self::Flagged,
            Visibility::Revealed => Self::Revealed(cell.label),
        }
    }
}
