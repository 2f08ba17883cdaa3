//! Core naval battle engine (no_std + alloc)
//!
//! Pure game logic: grid, fleet, placement, shot resolution, opponent
//! targeting and the session state machine. No I/O; time and randomness
//! are injected so the whole engine runs without a terminal.

pub mod ai;
pub mod bitboard;
pub mod board;
pub mod clock;
pub mod common;
pub mod config;
pub mod game;
pub mod grid;
pub mod placement;
pub mod ship;

// Re-export commonly used types
pub use ai::{
    random_target, strategy_for, Difficulty, HuntingTargeting, RandomTargeting, ShotHistory,
    TargetingStrategy,
};
pub use bitboard::{BitBoard, BitBoardError};
pub use board::{resolve_shot, Board};
#[cfg(feature = "std")]
pub use clock::MonotonicClock;
pub use clock::{Clock, Stopwatch};
pub use common::{Coordinate, GameError, HitOutcome, PlacementError, ShotResult};
pub use config::*;
#[cfg(feature = "std")]
pub use game::start_session;
pub use game::{
    FireOutcome, GameSession, GameStatus, OpponentMove, Phase, PlacementOutcome, SessionBuilder,
    SessionSummary, Side, SideStats,
};
pub use grid::{CellState, Grid};
pub use placement::{
    can_place, check_placement, place, place_fleet_randomly, place_ship_randomly,
    random_placement,
};
pub use ship::{create_fleet, Fleet, Orientation, Ship, ShipDef};
