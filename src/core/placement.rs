//! Ship placement legality and randomized placement.

use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::core::common::{Coordinate, GameError, PlacementError};
use crate::core::config::BOARD_SIZE;
use crate::core::grid::{CellState, Grid};
use crate::core::ship::{Fleet, Orientation, Ship};

const GRID: usize = BOARD_SIZE as usize;

/// Why a footprint of `length` at `origin` cannot go on `grid`, if it can't.
pub fn check_placement(
    grid: &Grid,
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
) -> Result<(), PlacementError> {
    if !origin.in_bounds() {
        return Err(PlacementError::OutOfBounds);
    }
    let room = match orientation {
        Orientation::Horizontal => GRID - origin.col,
        Orientation::Vertical => GRID - origin.row,
    };
    if length > room {
        return Err(PlacementError::OutOfBounds);
    }
    for i in 0..length {
        let at = orientation.step(origin, i);
        match grid.get_at(at) {
            Ok(CellState::Empty) => {}
            Ok(_) => return Err(PlacementError::Overlaps),
            Err(_) => return Err(PlacementError::OutOfBounds),
        }
    }
    Ok(())
}

/// True when the footprint fits on the board and covers only empty cells.
/// Edge-adjacent ships are allowed.
pub fn can_place(grid: &Grid, origin: Coordinate, length: usize, orientation: Orientation) -> bool {
    check_placement(grid, origin, length, orientation).is_ok()
}

/// Marks the footprint of `ship` as occupied and fixes it on the ship.
///
/// Callers must have checked [`can_place`] first.
pub fn place(
    grid: &mut Grid,
    ship: &mut Ship,
    origin: Coordinate,
    orientation: Orientation,
) -> Result<Vec<Coordinate>, GameError> {
    let length = ship.length();
    debug_assert!(
        can_place(grid, origin, length, orientation),
        "place called on an illegal footprint"
    );
    let footprint: Vec<Coordinate> = (0..length).map(|i| orientation.step(origin, i)).collect();
    for &at in &footprint {
        grid.set_at(at, CellState::Occupied)?;
    }
    ship.set_footprint(footprint.clone());
    debug!("placed {} at {} {:?}", ship.name(), origin, orientation);
    Ok(footprint)
}

/// Samples uniform origins and orientations until one fits.
///
/// Pure rejection sampling with no retry bound: it terminates with
/// probability 1 whenever any legal footprint exists, which the standard
/// fleet (19 of 100 cells) always leaves.
pub fn random_placement<R: Rng + ?Sized>(
    grid: &Grid,
    length: usize,
    rng: &mut R,
) -> (Coordinate, Orientation) {
    loop {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let origin = Coordinate::new(rng.random_range(0..GRID), rng.random_range(0..GRID));
        if can_place(grid, origin, length, orientation) {
            return (origin, orientation);
        }
    }
}

/// Randomly places the ship at `index` of `fleet`. An unknown index or an
/// already placed ship is `WrongPhase`.
pub fn place_ship_randomly<R: Rng + ?Sized>(
    grid: &mut Grid,
    fleet: &mut Fleet,
    index: usize,
    rng: &mut R,
) -> Result<Vec<Coordinate>, GameError> {
    let ship = fleet.ship_mut(index).ok_or(GameError::WrongPhase)?;
    if ship.is_placed() {
        return Err(GameError::WrongPhase);
    }
    let (origin, orientation) = random_placement(grid, ship.length(), rng);
    place(grid, ship, origin, orientation)
}

/// Places every unplaced ship of `fleet` in manifest order, without
/// backtracking across ships.
pub fn place_fleet_randomly<R: Rng + ?Sized>(
    grid: &mut Grid,
    fleet: &mut Fleet,
    rng: &mut R,
) -> Result<(), GameError> {
    while let Some(index) = fleet.next_unplaced() {
        place_ship_randomly(grid, fleet, index, rng)?;
    }
    Ok(())
}
