//! Common types for the naval battle core: coordinates, shot outcomes
//! and the error taxonomy shared by every component.

use core::fmt;

use crate::core::bitboard::BitBoardError;
use crate::core::config::BOARD_SIZE;

const GRID: usize = BOARD_SIZE as usize;

/// A cell address on a board. Not validated on construction; the grid
/// rejects out-of-range coordinates with [`GameError::OutOfBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < GRID && self.col < GRID
    }

    /// In-bounds orthogonal neighbours, in up/down/left/right order.
    pub fn neighbors(&self) -> impl Iterator<Item = Coordinate> {
        let Coordinate { row, col } = *self;
        let up = row.checked_sub(1).map(|r| Coordinate::new(r, col));
        let down = (row + 1 < GRID).then(|| Coordinate::new(row + 1, col));
        let left = col.checked_sub(1).map(|c| Coordinate::new(row, c));
        let right = (col + 1 < GRID).then(|| Coordinate::new(row, col + 1));
        [up, down, left, right].into_iter().flatten()
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

/// Renders as column letter plus 1-based row, e.g. `A5`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.col < 26 {
            write!(f, "{}{}", (b'A' + self.col as u8) as char, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Outcome of a single shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotResult {
    /// The cell was already resolved; nothing changed.
    AlreadyShot,
    Miss,
    Hit,
    /// The shot completed a ship, carrying its name.
    HitAndSunk(&'static str),
}

impl ShotResult {
    /// True for `Hit` and `HitAndSunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::HitAndSunk(_))
    }
}

/// What registering a hit did to the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    NoShipAtCoordinate,
    Hit,
    HitAndSunk(&'static str),
}

/// Why a footprint cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The footprint runs off the board edge.
    OutOfBounds,
    /// The footprint covers an already occupied cell.
    Overlaps,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "ship would run off the board"),
            PlacementError::Overlaps => write!(f, "ship would overlap another ship"),
        }
    }
}

/// Errors reported by the game core.
///
/// Everything except `OutOfBounds` is recoverable: state is left untouched
/// and the caller may retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside the 10×10 grid.
    OutOfBounds { row: usize, col: usize },
    /// Footprint off the board or overlapping another ship.
    InvalidPlacement(PlacementError),
    /// The target cell was already resolved.
    AlreadyShot { row: usize, col: usize },
    /// Operation not valid in the current phase.
    WrongPhase,
    /// Operation attempted by (or against) the wrong side.
    WrongTurn,
    /// The game is over; no further moves are accepted.
    SessionConcluded,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => GameError::OutOfBounds { row, col },
        }
    }
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::InvalidPlacement(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is outside the board", row, col)
            }
            GameError::InvalidPlacement(e) => write!(f, "invalid placement: {}", e),
            GameError::AlreadyShot { row, col } => write!(
                f,
                "already fired at {}",
                Coordinate::new(*row, *col)
            ),
            GameError::WrongPhase => write!(f, "operation not allowed in the current phase"),
            GameError::WrongTurn => write!(f, "it is not your turn"),
            GameError::SessionConcluded => write!(f, "game already concluded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
