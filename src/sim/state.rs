//! Round state and the point economy
//!
//! A round is one playthrough of a level. It is created fresh on every start,
//! restart and level change, never carried over.

use serde::{Deserialize, Serialize};

use super::level::{Level, Platform};
use super::runner::Runner;
use super::trap::{Trap, TrapKind};
use crate::consts::POINT_INTERVAL;

/// Current status of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundStatus {
    /// Runner spawned, round not live yet
    Waiting,
    /// Active gameplay
    Running,
    /// Runner died or fell off the map
    PlayerWins,
    /// Runner reached the goal or ran off the right edge
    RunnerWins,
}

impl RoundStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundStatus::PlayerWins | RoundStatus::RunnerWins)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::Waiting => "WAITING",
            RoundStatus::Running => "RUNNING",
            RoundStatus::PlayerWins => "PLAYER_WINS",
            RoundStatus::RunnerWins => "RUNNER_WINS",
        }
    }
}

/// One round: level, runner, placed traps, points and clock
#[derive(Debug, Clone)]
pub struct Round {
    pub(crate) status: RoundStatus,
    pub(crate) level: Level,
    pub(crate) runner: Runner,
    /// Insertion order is evaluation order
    pub(crate) traps: Vec<Trap>,
    points: u32,
    elapsed: f64,
    next_trap_id: u32,
}

impl Round {
    /// New round in `Waiting` with a freshly spawned runner and the level's
    /// starting budget
    pub fn new(level: Level) -> Self {
        let runner = Runner::new(level.spawn(), level.runner_speed_multiplier());
        Self {
            status: RoundStatus::Waiting,
            points: level.starting_points(),
            level,
            runner,
            traps: Vec::new(),
            elapsed: 0.0,
            next_trap_id: 1,
        }
    }

    pub fn start(&mut self) {
        self.status = RoundStatus::Running;
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: RoundStatus) {
        self.status = status;
    }

    pub fn is_running(&self) -> bool {
        self.status == RoundStatus::Running
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn runner(&self) -> &Runner {
        &self.runner
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Owned copy of the placed traps
    pub fn traps(&self) -> Vec<Trap> {
        self.traps.clone()
    }

    /// Owned copy of the level's platforms
    pub fn platforms(&self) -> Vec<Platform> {
        self.level.platforms().to_vec()
    }

    pub fn trap_count(&self) -> usize {
        self.traps.len()
    }

    pub fn can_afford(&self, kind: TrapKind) -> bool {
        self.points >= kind.cost()
    }

    /// Place a trap if the balance covers it. Unaffordable traps are dropped
    /// silently; the return value only reports what happened.
    pub fn add_trap(&mut self, trap: Trap) -> bool {
        let cost = trap.kind().cost();
        if self.points < cost {
            log::debug!(
                "Rejected {} trap: cost {} > balance {}",
                trap.kind().as_str(),
                cost,
                self.points
            );
            return false;
        }
        self.points -= cost;
        log::debug!(
            "Placed {} trap {} (balance {})",
            trap.kind().as_str(),
            trap.id(),
            self.points
        );
        self.traps.push(trap);
        true
    }

    pub fn add_points(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }

    /// Advance the clock and award the periodic point.
    ///
    /// The point is granted when `elapsed % POINT_INTERVAL < dt` right after
    /// the addition. This is checked once per call with that call's `dt`, so
    /// an irregular `dt` can skip or double up relative to a wall clock.
    pub fn increment_time(&mut self, dt: f64) {
        self.elapsed += dt;
        if self.elapsed % POINT_INTERVAL < dt {
            self.points = self.points.saturating_add(1);
        }
    }

    /// Next trap id for this round
    pub fn next_trap_id(&mut self) -> String {
        let id = format!("trap_{}", self.next_trap_id);
        self.next_trap_id += 1;
        id
    }

    /// All simulation numbers are still finite
    pub fn is_consistent(&self) -> bool {
        self.runner.position.is_finite()
            && self.runner.velocity.is_finite()
            && self.elapsed.is_finite()
    }
}
