//! Ship definitions, footprints and damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::core::common::{Coordinate, HitOutcome};
use crate::core::config::FLEET;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// The `i`-th cell of a footprint starting at `origin`.
    pub fn step(self, origin: Coordinate, i: usize) -> Coordinate {
        match self {
            Orientation::Horizontal => Coordinate::new(origin.row, origin.col + i),
            Orientation::Vertical => Coordinate::new(origin.row + i, origin.col),
        }
    }
}

/// Entry of the fleet manifest: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship of a fleet. The footprint is empty until the ship is placed
/// and never changes afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    def: ShipDef,
    footprint: Vec<Coordinate>,
    hits: usize,
    sunk: bool,
}

impl Ship {
    pub fn new(def: ShipDef) -> Self {
        Self {
            def,
            footprint: Vec::new(),
            hits: 0,
            sunk: false,
        }
    }

    pub fn def(&self) -> ShipDef {
        self.def
    }

    pub fn name(&self) -> &'static str {
        self.def.name()
    }

    pub fn length(&self) -> usize {
        self.def.length()
    }

    pub fn footprint(&self) -> &[Coordinate] {
        &self.footprint
    }

    pub fn is_placed(&self) -> bool {
        !self.footprint.is_empty()
    }

    pub fn hit_count(&self) -> usize {
        self.hits
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        self.footprint.contains(&at)
    }

    /// Fixes the footprint. A ship is placed exactly once.
    pub(crate) fn set_footprint(&mut self, footprint: Vec<Coordinate>) {
        debug_assert!(self.footprint.is_empty(), "ship placed twice");
        debug_assert_eq!(footprint.len(), self.def.length());
        self.footprint = footprint;
    }

    /// Records one more hit; returns `true` when this hit sinks the ship.
    fn register_hit(&mut self) -> bool {
        debug_assert!(!self.sunk, "hit registered on a sunk ship");
        self.hits += 1;
        if self.hits == self.def.length() {
            self.sunk = true;
        }
        self.sunk
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, hits: {}, sunk: {}, footprint: {:?} }}",
            self.def.name(),
            self.def.length(),
            self.hits,
            self.sunk,
            self.footprint,
        )
    }
}

/// One side's ships, in manifest order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Fresh, unplaced fleet built from `manifest`.
    pub fn from_manifest(manifest: &[ShipDef]) -> Self {
        Self {
            ships: manifest.iter().copied().map(Ship::new).collect(),
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index)
    }

    pub fn ship_mut(&mut self, index: usize) -> Option<&mut Ship> {
        self.ships.get_mut(index)
    }

    /// Index of the first ship without a footprint.
    pub fn next_unplaced(&self) -> Option<usize> {
        self.ships.iter().position(|s| !s.is_placed())
    }

    /// Credits a hit at `at` to the ship covering it.
    pub fn register_hit(&mut self, at: Coordinate) -> HitOutcome {
        match self.ships.iter_mut().find(|s| s.contains(at)) {
            None => HitOutcome::NoShipAtCoordinate,
            Some(ship) => {
                if ship.register_hit() {
                    HitOutcome::HitAndSunk(ship.name())
                } else {
                    HitOutcome::Hit
                }
            }
        }
    }

    /// Win condition: every ship sunk. Vacuously true for an empty fleet.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    /// Names of sunk ships, in manifest order.
    pub fn sunk_names(&self) -> Vec<&'static str> {
        self.ships
            .iter()
            .filter(|s| s.is_sunk())
            .map(|s| s.name())
            .collect()
    }
}

/// The standard six-ship fleet, unplaced.
pub fn create_fleet() -> Fleet {
    Fleet::from_manifest(&FLEET)
}
