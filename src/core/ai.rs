// Shot selection for the scripted opponent.
// Two interchangeable strategies, chosen once per session by difficulty.

use alloc::boxed::Box;
use core::fmt;
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;

use crate::core::bitboard::BitBoard;
use crate::core::common::{Coordinate, GameError, ShotResult};
use crate::core::config::BOARD_SIZE;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Opponent difficulty, fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Uniformly random shots.
    #[default]
    Easy,
    /// Random shots, but hunts around the last confirmed hit.
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Cells the opponent has already fired at.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct ShotHistory {
    shots: BB,
}

impl ShotHistory {
    pub fn new() -> Self {
        Self { shots: BB::new() }
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        self.shots.get(at.row, at.col).unwrap_or(false)
    }

    /// Adds `at`; returns `false` if it was already present.
    pub fn record(&mut self, at: Coordinate) -> Result<bool, GameError> {
        Ok(self.shots.set(at.row, at.col)?)
    }

    pub fn len(&self) -> usize {
        self.shots.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// True when every cell has been fired at.
    pub fn is_exhausted(&self) -> bool {
        self.shots.is_full()
    }

    /// Cells not yet fired at, row-major.
    pub fn unshot(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.shots.iter_unset_bits().map(Coordinate::from)
    }
}

impl fmt::Debug for ShotHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShotHistory({} shots)\n{:?}", self.len(), self.shots)
    }
}

/// Shot-selection policy of the scripted opponent.
///
/// Strategies only read the history. The session resolves the chosen
/// cell, records it in the history, then reports the outcome through
/// [`TargetingStrategy::record_result`].
pub trait TargetingStrategy: Send {
    /// Choose an unshot cell, or `None` once the board is exhausted.
    fn select_target(&mut self, history: &ShotHistory, rng: &mut SmallRng) -> Option<Coordinate>;

    /// Inform the strategy of the outcome of its last shot.
    fn record_result(&mut self, _at: Coordinate, _result: ShotResult) {}

    fn difficulty(&self) -> Difficulty;
}

/// Uniform choice among the cells not in `history`.
pub fn random_target(history: &ShotHistory, rng: &mut SmallRng) -> Option<Coordinate> {
    history.unshot().choose(rng)
}

/// Easy mode: uniform random unshot cell.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTargeting;

impl TargetingStrategy for RandomTargeting {
    fn select_target(&mut self, history: &ShotHistory, rng: &mut SmallRng) -> Option<Coordinate> {
        random_target(history, rng)
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }
}

/// Hard mode: fire at an unshot orthogonal neighbour of the last confirmed
/// hit, falling back to a random cell when there is none.
#[derive(Debug, Default, Clone, Copy)]
pub struct HuntingTargeting {
    last_hit: Option<Coordinate>,
}

impl HuntingTargeting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_confirmed_hit(&self) -> Option<Coordinate> {
        self.last_hit
    }

    /// Unshot in-bounds neighbours of the last confirmed hit.
    pub fn candidates<'a>(&self, history: &'a ShotHistory) -> impl Iterator<Item = Coordinate> + 'a {
        self.last_hit
            .into_iter()
            .flat_map(|hit| hit.neighbors())
            .filter(move |n| !history.contains(*n))
    }
}

impl TargetingStrategy for HuntingTargeting {
    fn select_target(&mut self, history: &ShotHistory, rng: &mut SmallRng) -> Option<Coordinate> {
        self.candidates(history)
            .choose(rng)
            .or_else(|| random_target(history, rng))
    }

    fn record_result(&mut self, at: Coordinate, result: ShotResult) {
        self.last_hit = match result {
            ShotResult::Hit => Some(at),
            // A sunk ship is fully resolved; stop hunting around it.
            ShotResult::HitAndSunk(_) | ShotResult::Miss => None,
            ShotResult::AlreadyShot => self.last_hit,
        };
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }
}

/// Strategy for `difficulty`.
pub fn strategy_for(difficulty: Difficulty) -> Box<dyn TargetingStrategy> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomTargeting),
        Difficulty::Hard => Box::new(HuntingTargeting::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn hunting_clears_on_miss_and_sink() {
        let mut h = HuntingTargeting::new();
        h.record_result(Coordinate::new(2, 2), ShotResult::Hit);
        assert_eq!(h.last_confirmed_hit(), Some(Coordinate::new(2, 2)));
        h.record_result(Coordinate::new(2, 3), ShotResult::Miss);
        assert_eq!(h.last_confirmed_hit(), None);
        h.record_result(Coordinate::new(5, 5), ShotResult::Hit);
        h.record_result(Coordinate::new(5, 6), ShotResult::HitAndSunk("Submarine"));
        assert_eq!(h.last_confirmed_hit(), None);
    }

    #[test]
    fn random_target_none_when_exhausted() {
        let mut history = ShotHistory::new();
        for r in 0..10 {
            for c in 0..10 {
                history.record(Coordinate::new(r, c)).unwrap();
            }
        }
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(history.is_exhausted());
        assert_eq!(random_target(&history, &mut rng), None);
    }
}
