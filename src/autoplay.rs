//! Scripted trap placement for the demo binary
//!
//! Stands in for a human player: watches the snapshot stream and now and
//! then drops an affordable trap somewhere ahead of the runner. Seeded, so a
//! given seed and frame sequence always produce the same commands.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::command::Command;
use crate::consts::{RUNNER_HEIGHT, RUNNER_WIDTH};
use crate::sim::{RoundStatus, TrapKind};
use crate::snapshot::Snapshot;

/// Frames to wait between placements
const PLACEMENT_COOLDOWN: u32 = 30;
/// Horizontal lead range in front of the runner's center
const LEAD_MIN: f64 = 40.0;
const LEAD_MAX: f64 = 120.0;
/// Chance a ready planner actually places on a given frame
const PLACE_CHANCE: f64 = 0.25;

#[derive(Debug, Clone)]
pub struct TrapPlanner {
    rng: Pcg32,
    cooldown: u32,
}

impl TrapPlanner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            cooldown: PLACEMENT_COOLDOWN,
        }
    }

    /// Decide whether to place a trap this frame
    pub fn plan(&mut self, frame: &Snapshot) -> Option<Command> {
        if frame.status != RoundStatus::Running || !frame.runner.alive {
            return None;
        }
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }

        let affordable: Vec<TrapKind> = TrapKind::ALL
            .into_iter()
            .filter(|k| k.cost() <= frame.player_points)
            .collect();
        if affordable.is_empty() || !self.rng.random_bool(PLACE_CHANCE) {
            return None;
        }

        let kind = affordable[self.rng.random_range(0..affordable.len())];
        let x = frame.runner.x + RUNNER_WIDTH / 2.0 + self.rng.random_range(LEAD_MIN..LEAD_MAX);
        let y = frame.runner.y + RUNNER_HEIGHT / 2.0;

        self.cooldown = PLACEMENT_COOLDOWN;
        log::debug!("Planner placing {} at ({:.0}, {:.0})", kind.as_str(), x, y);
        Some(Command::PlaceTrap { kind, x, y })
    }

    /// Restart the cooldown for a fresh round
    pub fn reset(&mut self) {
        self.cooldown = PLACEMENT_COOLDOWN;
    }
}
