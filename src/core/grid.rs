//! Fixed-size cell store with bounds checking.

use crate::core::common::{Coordinate, GameError};
use crate::core::config::BOARD_SIZE;

const GRID: usize = BOARD_SIZE as usize;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CellState {
    #[default]
    Empty,
    Occupied,
    Miss,
    Hit,
}

impl CellState {
    /// `Miss` and `Hit` are terminal shot outcomes.
    pub fn is_resolved(&self) -> bool {
        matches!(self, CellState::Miss | CellState::Hit)
    }
}

/// A 10×10 matrix of cell states.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[CellState; GRID]; GRID],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [[CellState::Empty; GRID]; GRID],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState, GameError> {
        Self::check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), GameError> {
        Self::check_bounds(row, col)?;
        self.cells[row][col] = state;
        Ok(())
    }

    pub fn get_at(&self, at: Coordinate) -> Result<CellState, GameError> {
        self.get(at.row, at.col)
    }

    pub fn set_at(&mut self, at: Coordinate, state: CellState) -> Result<(), GameError> {
        self.set(at.row, at.col, state)
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == state)
            .count()
    }

    #[inline]
    fn check_bounds(row: usize, col: usize) -> Result<(), GameError> {
        if row >= GRID || col >= GRID {
            Err(GameError::OutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for row in self.cells.iter() {
            for cell in row.iter() {
                let ch = match cell {
                    CellState::Empty => '.',
                    CellState::Occupied => 'S',
                    CellState::Miss => 'o',
                    CellState::Hit => 'X',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
