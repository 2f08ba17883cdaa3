//! One side's board (grid + fleet) and shot resolution.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, error};
use rand::Rng;

use crate::core::common::{Coordinate, GameError, HitOutcome, ShotResult};
use crate::core::grid::{CellState, Grid};
use crate::core::placement;
use crate::core::ship::{Fleet, Orientation, ShipDef};

/// Applies a shot at `at` to `grid`, crediting hits to `fleet`.
///
/// Already-resolved cells yield [`ShotResult::AlreadyShot`] and change
/// nothing. After placement this is the only mutator of cell state.
pub fn resolve_shot(
    grid: &mut Grid,
    fleet: &mut Fleet,
    at: Coordinate,
) -> Result<ShotResult, GameError> {
    match grid.get_at(at)? {
        CellState::Miss | CellState::Hit => Ok(ShotResult::AlreadyShot),
        CellState::Occupied => {
            grid.set_at(at, CellState::Hit)?;
            match fleet.register_hit(at) {
                HitOutcome::HitAndSunk(name) => {
                    debug!("shot at {} sank {}", at, name);
                    Ok(ShotResult::HitAndSunk(name))
                }
                HitOutcome::Hit => Ok(ShotResult::Hit),
                HitOutcome::NoShipAtCoordinate => {
                    error!("occupied cell {} has no owning ship", at);
                    debug_assert!(false, "occupied cell {} has no owning ship", at);
                    Ok(ShotResult::Hit)
                }
            }
        }
        CellState::Empty => {
            grid.set_at(at, CellState::Miss)?;
            Ok(ShotResult::Miss)
        }
    }
}

/// A side's grid together with the fleet placed on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    fleet: Fleet,
}

impl Board {
    /// Empty board with an unplaced fleet built from `manifest`.
    pub fn new(manifest: &[ShipDef]) -> Self {
        Self {
            grid: Grid::new(),
            fleet: Fleet::from_manifest(manifest),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn cell(&self, at: Coordinate) -> Result<CellState, GameError> {
        self.grid.get_at(at)
    }

    /// Places the ship at `index` after checking legality. Each ship goes
    /// down once; placing it again is `WrongPhase`.
    pub fn place(
        &mut self,
        index: usize,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<Vec<Coordinate>, GameError> {
        let ship = self.fleet.ship_mut(index).ok_or(GameError::WrongPhase)?;
        if ship.is_placed() {
            return Err(GameError::WrongPhase);
        }
        placement::check_placement(&self.grid, origin, ship.length(), orientation)?;
        placement::place(&mut self.grid, ship, origin, orientation)
    }

    /// Randomly places the ship at `index`.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Result<Vec<Coordinate>, GameError> {
        placement::place_ship_randomly(&mut self.grid, &mut self.fleet, index, rng)
    }

    /// Randomly places every ship not yet on the board.
    pub fn place_remaining_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        placement::place_fleet_randomly(&mut self.grid, &mut self.fleet, rng)
    }

    pub fn resolve_shot(&mut self, at: Coordinate) -> Result<ShotResult, GameError> {
        resolve_shot(&mut self.grid, &mut self.fleet, at)
    }

    pub fn all_sunk(&self) -> bool {
        self.fleet.all_sunk()
    }

    pub fn sunk_names(&self) -> Vec<&'static str> {
        self.fleet.sunk_names()
    }

    /// Footprints of sunk ships, for revealing them.
    pub fn sunk_footprints(&self) -> Vec<&[Coordinate]> {
        self.fleet
            .ships()
            .iter()
            .filter(|s| s.is_sunk())
            .map(|s| s.footprint())
            .collect()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{\n  grid:\n{:?}  fleet: {:?}\n}}", self.grid, self.fleet)
    }
}
