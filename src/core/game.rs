//! Game session state machine: placement, alternating shots, game over.
//!
//! The session exclusively owns both boards, the opponent's shot history
//! and the targeting strategy. The presentation layer drives it through
//! [`GameSession::place_ship`] and [`GameSession::fire_shot`] and renders
//! from the query methods; it never mutates session state directly.
//!
//! The opponent never needs to be prompted: a human shot that does not
//! end the game is immediately followed by the opponent's reply, and both
//! results come back in the same [`FireOutcome`].

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::ai::{self, Difficulty, ShotHistory, TargetingStrategy};
use crate::core::board::Board;
use crate::core::clock::{Clock, Stopwatch};
use crate::core::common::{Coordinate, GameError, ShotResult};
use crate::core::config::FLEET;
use crate::core::grid::CellState;
use crate::core::ship::{Orientation, ShipDef};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Human,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Opponent => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "Player"),
            Side::Opponent => write!(f, "Computer"),
        }
    }
}

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Placement,
    Shooting,
    GameOver,
}

/// Snapshot of where the session stands, for status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    pub phase: Phase,
    /// Side to move while shooting.
    pub to_move: Option<Side>,
    /// Index and definition of the next human ship to place.
    pub next_ship: Option<(usize, ShipDef)>,
    pub winner: Option<Side>,
}

/// Result of a successful human placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementOutcome {
    pub ship: &'static str,
    pub footprint: Vec<Coordinate>,
    /// True when this was the last ship and shooting has begun.
    pub fleet_complete: bool,
}

/// The opponent's automatic reply to a human shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentMove {
    pub target: Coordinate,
    pub result: ShotResult,
}

/// Result of a human shot, including the opponent's reply if the game
/// continued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireOutcome {
    pub target: Coordinate,
    pub result: ShotResult,
    pub opponent: Option<OpponentMove>,
    pub winner: Option<Side>,
}

/// Hit/miss counters for one side's shots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SideStats {
    pub hits: usize,
    pub misses: usize,
}

impl SideStats {
    pub fn shots(&self) -> usize {
        self.hits + self.misses
    }
}

/// End-of-game report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SessionSummary {
    pub winner: Side,
    pub difficulty: Difficulty,
    pub elapsed: Duration,
    pub human: SideStats,
    pub opponent: SideStats,
    /// Opponent ships sunk by the human.
    pub sunk_by_human: Vec<&'static str>,
    /// Human ships sunk by the opponent.
    pub sunk_by_opponent: Vec<&'static str>,
}

fn write_names(f: &mut fmt::Formatter<'_>, names: &[&'static str]) -> fmt::Result {
    if names.is_empty() {
        return write!(f, "(none)");
    }
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", name)?;
    }
    Ok(())
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed.as_secs();
        writeln!(f, "Winner: {}", self.winner)?;
        writeln!(f, "Game time: {} min {} s", secs / 60, secs % 60)?;
        writeln!(f)?;
        writeln!(f, "Shot statistics:")?;
        writeln!(
            f,
            "  {}: {} hits / {} misses",
            Side::Human,
            self.human.hits,
            self.human.misses
        )?;
        writeln!(
            f,
            "  {}: {} hits / {} misses",
            Side::Opponent,
            self.opponent.hits,
            self.opponent.misses
        )?;
        writeln!(f)?;
        write!(f, "Ships sunk by {}: ", Side::Human)?;
        write_names(f, &self.sunk_by_human)?;
        writeln!(f)?;
        write!(f, "Ships sunk by {}: ", Side::Opponent)?;
        write_names(f, &self.sunk_by_opponent)
    }
}

#[cfg(not(feature = "std"))]
struct StoppedClock;

#[cfg(not(feature = "std"))]
impl Clock for StoppedClock {
    fn now(&self) -> Duration {
        Duration::ZERO
    }
}

/// Configures and starts a [`GameSession`].
pub struct SessionBuilder {
    difficulty: Difficulty,
    seed: Option<u64>,
    manifest: Vec<ShipDef>,
    clock: Option<Box<dyn Clock>>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: None,
            manifest: FLEET.to_vec(),
            clock: None,
        }
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Fix the RNG seed for reproducible games.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the fleet manifest. Both sides use it. Meant for fixtures;
    /// real games use the standard fleet.
    pub fn fleet(mut self, manifest: &[ShipDef]) -> Self {
        self.manifest = manifest.to_vec();
        self
    }

    pub fn clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Result<GameSession, GameError> {
        let rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            #[cfg(feature = "std")]
            None => SmallRng::from_rng(&mut rand::rng()),
            #[cfg(not(feature = "std"))]
            None => SmallRng::seed_from_u64(0),
        };
        let clock = match self.clock {
            Some(clock) => clock,
            #[cfg(feature = "std")]
            None => Box::new(crate::core::clock::MonotonicClock::new()),
            #[cfg(not(feature = "std"))]
            None => Box::new(StoppedClock),
        };
        GameSession::new(self.difficulty, self.manifest, rng, clock)
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A single game from placement to a recorded winner.
pub struct GameSession {
    difficulty: Difficulty,
    manifest: Vec<ShipDef>,
    boards: [Board; 2],
    stats: [SideStats; 2],
    history: ShotHistory,
    strategy: Box<dyn TargetingStrategy>,
    rng: SmallRng,
    clock: Box<dyn Clock>,
    stopwatch: Stopwatch,
    phase: Phase,
    to_move: Side,
    winner: Option<Side>,
}

/// Starts a standard session at `difficulty`.
#[cfg(feature = "std")]
pub fn start_session(difficulty: Difficulty) -> Result<GameSession, GameError> {
    GameSession::start(difficulty)
}

impl GameSession {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Standard fleet, random seed, wall clock.
    #[cfg(feature = "std")]
    pub fn start(difficulty: Difficulty) -> Result<Self, GameError> {
        SessionBuilder::new().difficulty(difficulty).build()
    }

    fn new(
        difficulty: Difficulty,
        manifest: Vec<ShipDef>,
        rng: SmallRng,
        clock: Box<dyn Clock>,
    ) -> Result<Self, GameError> {
        let mut session = Self {
            difficulty,
            boards: [Board::new(&manifest), Board::new(&manifest)],
            manifest,
            stats: [SideStats::default(); 2],
            history: ShotHistory::new(),
            strategy: ai::strategy_for(difficulty),
            rng,
            clock,
            stopwatch: Stopwatch::default(),
            phase: Phase::Placement,
            to_move: Side::Human,
            winner: None,
        };
        session.reset()?;
        Ok(session)
    }

    /// Resets every board and counter, places the opponent fleet and
    /// enters placement.
    fn reset(&mut self) -> Result<(), GameError> {
        self.boards = [Board::new(&self.manifest), Board::new(&self.manifest)];
        self.stats = [SideStats::default(); 2];
        self.history = ShotHistory::new();
        self.strategy = ai::strategy_for(self.difficulty);
        self.stopwatch = Stopwatch::default();
        self.phase = Phase::Placement;
        self.to_move = Side::Human;
        self.winner = None;

        let opponent = &mut self.boards[Side::Opponent.index()];
        opponent.place_remaining_randomly(&mut self.rng)?;
        info!(
            "new {} session: opponent fleet placed, {} ships to place",
            self.difficulty,
            self.manifest.len()
        );
        if self.manifest.is_empty() {
            self.begin_shooting();
        }
        Ok(())
    }

    /// Discards this game and starts a fresh one at the same difficulty.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.reset()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Side to move while shooting.
    pub fn to_move(&self) -> Option<Side> {
        (self.phase == Phase::Shooting).then_some(self.to_move)
    }

    pub fn status(&self) -> GameStatus {
        let next_ship = match self.phase {
            Phase::Placement => self
                .board(Side::Human)
                .fleet()
                .next_unplaced()
                .map(|i| (i, self.manifest[i])),
            _ => None,
        };
        GameStatus {
            phase: self.phase,
            to_move: self.to_move(),
            next_ship,
            winner: self.winner,
        }
    }

    /// Read-only view of a side's board.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// The opponent's shot history.
    pub fn history(&self) -> &ShotHistory {
        &self.history
    }

    pub fn stats(&self, side: Side) -> SideStats {
        self.stats[side.index()]
    }

    /// Shooting time so far, frozen once the game is over.
    pub fn elapsed(&self) -> Duration {
        self.stopwatch.elapsed(self.clock.now())
    }

    pub fn clock_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    fn guard_mutation(&self, expected: Phase) -> Result<(), GameError> {
        match self.phase {
            Phase::GameOver => Err(GameError::SessionConcluded),
            phase if phase != expected => Err(GameError::WrongPhase),
            _ => Ok(()),
        }
    }

    fn next_human_ship(&self) -> Result<usize, GameError> {
        self.board(Side::Human)
            .fleet()
            .next_unplaced()
            .ok_or(GameError::WrongPhase)
    }

    /// Places the next human ship at `origin`.
    pub fn place_ship(
        &mut self,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<PlacementOutcome, GameError> {
        self.guard_mutation(Phase::Placement)?;
        let index = self.next_human_ship()?;
        let footprint = self.boards[Side::Human.index()].place(index, origin, orientation)?;
        Ok(self.after_placement(index, footprint))
    }

    /// Places the next human ship at a random legal spot.
    pub fn auto_place_ship(&mut self) -> Result<PlacementOutcome, GameError> {
        self.guard_mutation(Phase::Placement)?;
        let index = self.next_human_ship()?;
        let footprint = self.boards[Side::Human.index()].place_randomly(index, &mut self.rng)?;
        Ok(self.after_placement(index, footprint))
    }

    /// Randomly places every remaining human ship.
    pub fn auto_place_remaining(&mut self) -> Result<Vec<PlacementOutcome>, GameError> {
        self.guard_mutation(Phase::Placement)?;
        let mut placed = Vec::new();
        while self.phase == Phase::Placement {
            placed.push(self.auto_place_ship()?);
        }
        Ok(placed)
    }

    fn after_placement(&mut self, index: usize, footprint: Vec<Coordinate>) -> PlacementOutcome {
        let ship = self.manifest[index].name();
        debug!("human placed {} ({}/{})", ship, index + 1, self.manifest.len());
        let fleet_complete = self.board(Side::Human).fleet().next_unplaced().is_none();
        if fleet_complete {
            self.begin_shooting();
        }
        PlacementOutcome {
            ship,
            footprint,
            fleet_complete,
        }
    }

    fn begin_shooting(&mut self) {
        self.phase = Phase::Shooting;
        self.to_move = Side::Human;
        self.stopwatch.start(self.clock.now());
        info!("placement complete, shooting begins");
    }

    /// Fires the human's shot at the opponent board, then lets the
    /// opponent reply if the game goes on.
    pub fn fire_shot(&mut self, target: Coordinate) -> Result<FireOutcome, GameError> {
        self.guard_mutation(Phase::Shooting)?;
        if self.to_move != Side::Human {
            return Err(GameError::WrongTurn);
        }
        let result = self.fire(Side::Human, target)?;
        let opponent = if self.phase == Phase::Shooting {
            Some(self.opponent_turn()?)
        } else {
            None
        };
        Ok(FireOutcome {
            target,
            result,
            opponent,
            winner: self.winner,
        })
    }

    /// The opponent's automatic move.
    fn opponent_turn(&mut self) -> Result<OpponentMove, GameError> {
        // Cannot be exhausted while the game is on: 100 shots sink any fleet.
        let target = self
            .strategy
            .select_target(&self.history, &mut self.rng)
            .ok_or(GameError::SessionConcluded)?;
        let result = self.fire(Side::Opponent, target)?;
        self.history.record(target)?;
        self.strategy.record_result(target, result);
        Ok(OpponentMove { target, result })
    }

    /// `shooter` fires at the other side's board.
    fn fire(&mut self, shooter: Side, target: Coordinate) -> Result<ShotResult, GameError> {
        if self.to_move != shooter {
            return Err(GameError::WrongTurn);
        }
        let defender = shooter.other();
        let result = self.boards[defender.index()].resolve_shot(target)?;
        let stats = &mut self.stats[shooter.index()];
        match result {
            ShotResult::AlreadyShot => {
                return Err(GameError::AlreadyShot {
                    row: target.row,
                    col: target.col,
                })
            }
            ShotResult::Miss => stats.misses += 1,
            ShotResult::Hit | ShotResult::HitAndSunk(_) => stats.hits += 1,
        }
        debug!("{} fired at {}: {:?}", shooter, target, result);

        if self.boards[defender.index()].all_sunk() {
            self.finish(shooter);
        } else {
            self.to_move = defender;
        }
        Ok(result)
    }

    fn finish(&mut self, winner: Side) {
        self.phase = Phase::GameOver;
        self.winner = Some(winner);
        self.stopwatch.stop(self.clock.now());
        info!("game over: {} wins after {:?}", winner, self.elapsed());
    }

    /// Raw cell state of `side`'s board.
    pub fn query_cell(&self, side: Side, at: Coordinate) -> Result<CellState, GameError> {
        self.board(side).cell(at)
    }

    /// Cell state as the human may see it: the opponent's unhit ships stay
    /// hidden until the game is over.
    pub fn query_visible_cell(&self, side: Side, at: Coordinate) -> Result<CellState, GameError> {
        let cell = self.query_cell(side, at)?;
        Ok(match (side, cell) {
            (Side::Opponent, CellState::Occupied) if self.phase != Phase::GameOver => {
                CellState::Empty
            }
            _ => cell,
        })
    }

    /// Names of `side`'s sunk ships, in manifest order.
    pub fn query_sunk_ships(&self, side: Side) -> Vec<&'static str> {
        self.board(side).sunk_names()
    }

    /// Footprints of `side`'s sunk ships.
    pub fn query_sunk_footprints(&self, side: Side) -> Vec<&[Coordinate]> {
        self.board(side).sunk_footprints()
    }

    /// End-of-game report; `WrongPhase` until the game is over.
    pub fn query_session_summary(&self) -> Result<SessionSummary, GameError> {
        let winner = match (self.phase, self.winner) {
            (Phase::GameOver, Some(winner)) => winner,
            _ => return Err(GameError::WrongPhase),
        };
        Ok(SessionSummary {
            winner,
            difficulty: self.difficulty,
            elapsed: self.elapsed(),
            human: self.stats(Side::Human),
            opponent: self.stats(Side::Opponent),
            sunk_by_human: self.query_sunk_ships(Side::Opponent),
            sunk_by_opponent: self.query_sunk_ships(Side::Human),
        })
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("difficulty", &self.difficulty)
            .field("phase", &self.phase)
            .field("to_move", &self.to_move)
            .field("winner", &self.winner)
            .field("stats", &self.stats)
            .finish()
    }
}
