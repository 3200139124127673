use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Game-level state. Everything but `InProgress` is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
    Quit,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Owns all state of one game: the tagged cell grid, the mine set, and the
/// win/loss status. Exclusively owned by a single session; mutations are
/// strictly sequential.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    grid: Array2<Cell>,
    mines: Vec<Coord2>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    status: GameStatus,
}

impl Board {
    pub fn new(field: MineField) -> Self {
        let (labels, mines) = field.into_parts();
        let grid = labels.mapv(|label| Cell {
            label,
            visibility: Visibility::Hidden,
        });
        Self {
            grid,
            mines,
            revealed_count: 0,
            flagged_count: 0,
            status: Default::default(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        let dim = self.grid.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len().try_into().unwrap()
    }

    pub fn revealed_cells(&self) -> CellCount {
        self.revealed_count
    }

    /// Mines minus placed flags; negative when the player has over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.mines.len() as isize) - (self.flagged_count as isize)
    }

    pub fn is_mine(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.grid[coords.to_nd_index()].label.is_mine())
    }

    pub fn truth_label(&self, coords: Coord2) -> Result<CellLabel> {
        let coords = self.validate_coords(coords)?;
        Ok(self.grid[coords.to_nd_index()].label)
    }

    pub fn player_cell(&self, coords: Coord2) -> Result<PlayerCell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.grid[coords.to_nd_index()].into())
    }

    /// True when the flagged set equals the mine set, or when every cell
    /// still hidden is a mine. Either condition alone wins the game.
    pub fn check_win(&self) -> bool {
        let every_mine_flagged = self.flagged_count as usize == self.mines.len()
            && self
                .mines
                .iter()
                .all(|&m| self.grid[m.to_nd_index()].visibility == Visibility::Flagged);
        if every_mine_flagged {
            return true;
        }

        self.grid
            .iter()
            .all(|cell| cell.visibility != Visibility::Hidden || cell.label.is_mine())
    }

    /// Reveals a cell. A mine loses the game and leaves the rest of the
    /// player grid untouched; an empty cell flood-fills its zero region.
    ///
    /// A flagged target is revealed too, dropping its flag in the same
    /// step. Callers wanting a confirmation prompt must intercept flagged
    /// cells before calling this.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_in_progress()?;

        let cell = self.grid[coords.to_nd_index()];
        if cell.visibility == Visibility::Revealed {
            return Ok(RevealOutcome::AlreadyRevealed);
        }

        if cell.label.is_mine() {
            log::debug!("mine hit at {coords:?}");
            self.status = GameStatus::Lost;
            return Ok(RevealOutcome::Loss);
        }

        if cell.visibility == Visibility::Flagged {
            self.grid[coords.to_nd_index()].visibility = Visibility::Hidden;
            self.flagged_count -= 1;
        }

        self.flood_reveal(coords);
        self.refresh_won();
        Ok(RevealOutcome::Safe)
    }

    /// Places a flag on a hidden cell.
    pub fn flag(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.check_in_progress()?;

        let cell = &mut self.grid[coords.to_nd_index()];
        if cell.visibility != Visibility::Hidden {
            return Err(GameError::CellNotHidden);
        }
        cell.visibility = Visibility::Flagged;
        self.flagged_count += 1;
        self.refresh_won();
        Ok(())
    }

    /// Removes a flag, returning the cell to hidden.
    pub fn unflag(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.check_in_progress()?;

        let cell = &mut self.grid[coords.to_nd_index()];
        if cell.visibility != Visibility::Flagged {
            return Err(GameError::CellNotFlagged);
        }
        cell.visibility = Visibility::Hidden;
        self.flagged_count -= 1;
        Ok(())
    }

    /// External cancellation by the player, surfaced through the engine so
    /// session code has a single terminal-state check.
    pub fn quit(&mut self) {
        if !self.is_finished() {
            self.status = GameStatus::Quit;
        }
    }

    /// Breadth-first flood fill over the zero region around `start`, using
    /// an explicit work list. Recursion depth is never a function of board
    /// size. Cells that are no longer hidden when popped are skipped, so
    /// each cell is revealed at most once and the loop always terminates.
    fn flood_reveal(&mut self, start: Coord2) {
        let bounds = self.size();
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = self.grid[coords.to_nd_index()];
            if cell.visibility != Visibility::Hidden {
                continue;
            }

            self.grid[coords.to_nd_index()].visibility = Visibility::Revealed;
            self.revealed_count += 1;
            log::trace!("revealed {coords:?} as {:?}", cell.label);

            if cell.label == CellLabel::Empty {
                to_visit.extend(neighbors(coords, bounds).filter(|&pos| {
                    self.grid[pos.to_nd_index()].visibility == Visibility::Hidden
                }));
            }
        }
    }

    fn refresh_won(&mut self) {
        if self.check_win() {
            log::debug!("board cleared, game won");
            self.status = GameStatus::Won;
        }
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
