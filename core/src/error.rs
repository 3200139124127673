use thiserror::Error;

use crate::types::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("coordinates outside the board")]
    InvalidCoords,
    #[error("mine count {requested} not in 1..{eligible} for this board")]
    MineCountInvalid {
        requested: CellCount,
        eligible: CellCount,
    },
    #[error("duplicate mine coordinate")]
    DuplicateMine,
    #[error("cell is not hidden")]
    CellNotHidden,
    #[error("cell is not flagged")]
    CellNotFlagged,
    #[error("game already ended, no new moves are accepted")]
    GameOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
