//! Per-connection session: level progression and round lifecycle
//!
//! The session owns the current level index and at most one round. Every
//! start, restart and level change builds a brand-new round.

use crate::command::Command;
use crate::error::BuildError;
use crate::sim::{self, Level, Round, RoundStatus, Trap, TrapKind};
use crate::snapshot::Snapshot;

/// Highest level in the catalog
pub const MAX_LEVEL: u32 = 5;

#[derive(Debug, Clone)]
pub struct Session {
    level: u32,
    round: Option<Round>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session on level 1 with no round yet
    pub fn new() -> Self {
        Self::at_level(1)
    }

    /// Fresh session at `level`, clamped into 1..=MAX_LEVEL
    pub fn at_level(level: u32) -> Self {
        Self {
            level: level.clamp(1, MAX_LEVEL),
            round: None,
        }
    }

    pub fn current_level(&self) -> u32 {
        self.level
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn status(&self) -> Option<RoundStatus> {
        self.round.as_ref().map(Round::status)
    }

    pub fn is_running(&self) -> bool {
        self.round.as_ref().is_some_and(Round::is_running)
    }

    /// Replace any round with a new running one on the current level
    pub fn start_or_restart(&mut self) {
        let mut round = Round::new(Level::create(self.level));
        round.start();
        log::info!("Level {} started ({} points)", self.level, round.points());
        self.round = Some(round);
    }

    /// Move the level index up by one, stopping at MAX_LEVEL. Does not touch
    /// the current round.
    pub fn advance_level(&mut self) {
        if self.level < MAX_LEVEL {
            self.level += 1;
            log::info!("Advanced to level {}", self.level);
        }
    }

    /// Advance, then start the new level
    pub fn next_level(&mut self) {
        self.advance_level();
        self.start_or_restart();
    }

    /// Place a trap centered on (`x`, `y`). Silently ignored unless a round
    /// is running and can afford it; fails only on invalid coordinates.
    /// Rejected placements do not consume a trap id.
    pub fn place_trap(&mut self, kind: TrapKind, x: f64, y: f64) -> Result<(), BuildError> {
        let Some(round) = self.round.as_mut().filter(|r| r.is_running()) else {
            log::debug!("Ignored {} trap: no running round", kind.as_str());
            return Ok(());
        };
        if !round.can_afford(kind) {
            log::debug!("Ignored {} trap: balance {}", kind.as_str(), round.points());
            return Ok(());
        }
        let trap = Trap::new(round.next_trap_id(), kind, x, y)?;
        round.add_trap(trap);
        Ok(())
    }

    /// Advance the current round by one fixed step
    pub fn tick(&mut self, dt: f64) -> Option<RoundStatus> {
        self.round.as_mut().and_then(|round| sim::tick(round, dt))
    }

    /// Frame for the client, once a round exists
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.round.as_ref().map(Snapshot::from_round)
    }

    /// Dispatch an inbound command
    pub fn apply(&mut self, command: Command) -> Result<(), BuildError> {
        match command {
            Command::Start | Command::Restart => self.start_or_restart(),
            Command::NextLevel => self.next_level(),
            Command::PlaceTrap { kind, x, y } => self.place_trap(kind, x, y)?,
        }
        Ok(())
    }
}
