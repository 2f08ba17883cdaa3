//! Commonly used types and utilities for ease of import.

pub use crate::core::{
    CellState, Coordinate, Difficulty, FireOutcome, GameError, GameSession, Orientation, Phase,
    SessionBuilder, SessionSummary, ShotResult, Side,
};

#[cfg(feature = "std")]
pub use crate::cli::{parse_coord, parse_orientation, print_boards, run_game};
