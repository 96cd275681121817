//! Trap kinds and placed traps
//!
//! The kind set is closed: each kind maps to a fixed cost and effect.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::TRAP_SIZE;
use crate::error::BuildError;

/// Points awarded to the player when a spike kills the runner
pub const SPIKE_BONUS: u32 = 100;
/// Speed multiplier imposed by a slow zone
pub const SLOW_MULTIPLIER: f64 = 0.5;

/// Trap types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrapKind {
    Spike,
    BouncePad,
    SlowZone,
}

/// What a trap does to a runner overlapping it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrapEffect {
    /// Runner dies, player earns `bonus`
    Kill { bonus: u32 },
    /// Runner launched upward at the bounce impulse
    Bounce,
    /// Runner's speed multiplier set to `multiplier`
    Slow { multiplier: f64 },
}

impl TrapKind {
    pub const ALL: [TrapKind; 3] = [TrapKind::Spike, TrapKind::BouncePad, TrapKind::SlowZone];

    /// Point cost to place
    pub fn cost(&self) -> u32 {
        match self {
            TrapKind::Spike => 50,
            TrapKind::BouncePad => 20,
            TrapKind::SlowZone => 15,
        }
    }

    pub fn effect(&self) -> TrapEffect {
        match self {
            TrapKind::Spike => TrapEffect::Kill { bonus: SPIKE_BONUS },
            TrapKind::BouncePad => TrapEffect::Bounce,
            TrapKind::SlowZone => TrapEffect::Slow {
                multiplier: SLOW_MULTIPLIER,
            },
        }
    }

    /// Short player-facing blurb
    pub fn description(&self) -> &'static str {
        match self {
            TrapKind::Spike => "Instant kill",
            TrapKind::BouncePad => "Launches runner upward",
            TrapKind::SlowZone => "Reduces runner speed",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrapKind::Spike => "SPIKE",
            TrapKind::BouncePad => "BOUNCE_PAD",
            TrapKind::SlowZone => "SLOW_ZONE",
        }
    }
}

/// A placed trap, immutable once created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trap {
    id: String,
    kind: TrapKind,
    bounds: Rect,
}

impl Trap {
    /// Place a trap with its footprint centered on (`x`, `y`)
    pub fn new(id: impl Into<String>, kind: TrapKind, x: f64, y: f64) -> Result<Self, BuildError> {
        let id = id.into();
        if id.is_empty() {
            return Err(BuildError::EmptyId { entity: "trap" });
        }
        for (field, value) in [("x", x), ("y", y)] {
            if !value.is_finite() {
                return Err(BuildError::NonFinite {
                    entity: "trap",
                    field,
                    value,
                });
            }
        }
        Ok(Self {
            id,
            kind,
            bounds: Rect::centered(DVec2::new(x, y), TRAP_SIZE),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> TrapKind {
        self.kind
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}
