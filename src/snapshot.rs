//! Outbound state snapshots
//!
//! A read-only copy of everything a client needs to draw one frame.

use serde::{Deserialize, Serialize};

use crate::sim::{Round, RoundStatus, TrapKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub status: RoundStatus,
    pub player_points: u32,
    pub elapsed_time: f64,
    pub level: u32,
    /// The level's runner speed multiplier
    pub speed_multiplier: f64,
    pub runner: RunnerView,
    pub platforms: Vec<PlatformView>,
    pub traps: Vec<TrapView>,
    pub goal: GoalView,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunnerView {
    pub x: f64,
    pub y: f64,
    pub alive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformView {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub active: bool,
}

/// Trap position is the footprint's top-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapView {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TrapKind,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Snapshot {
    pub fn from_round(round: &Round) -> Self {
        let level = round.level();
        let runner = round.runner();
        let goal = level.goal();

        Self {
            status: round.status(),
            player_points: round.points(),
            elapsed_time: round.elapsed(),
            level: level.number(),
            speed_multiplier: level.runner_speed_multiplier(),
            runner: RunnerView {
                x: runner.position.x,
                y: runner.position.y,
                alive: runner.alive,
            },
            platforms: level
                .platforms()
                .iter()
                .map(|p| {
                    let b = p.bounds();
                    PlatformView {
                        id: p.id().to_string(),
                        x: b.x,
                        y: b.y,
                        width: b.width,
                        height: b.height,
                        active: p.is_active(),
                    }
                })
                .collect(),
            traps: round
                .traps
                .iter()
                .map(|t| TrapView {
                    id: t.id().to_string(),
                    kind: t.kind(),
                    x: t.bounds().x,
                    y: t.bounds().y,
                })
                .collect(),
            goal: GoalView {
                x: goal.x,
                y: goal.y,
                width: goal.width,
                height: goal.height,
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Level, Trap};

    #[test]
    fn test_snapshot_mirrors_round() {
        let mut round = Round::new(Level::create(2));
        round.start();
        let id = round.next_trap_id();
        round.add_trap(Trap::new(id, TrapKind::BouncePad, 300.0, 385.0).expect("trap"));

        let snap = Snapshot::from_round(&round);

        assert_eq!(snap.status, RoundStatus::Running);
        assert_eq!(snap.level, 2);
        assert_eq!(snap.player_points, 100);
        assert_eq!(snap.speed_multiplier, 1.2);
        assert_eq!(snap.platforms.len(), 5);
        assert_eq!(snap.platforms[0].id, "p1");
        assert_eq!(snap.traps.len(), 1);
        assert_eq!(snap.traps[0].x, 285.0);
        assert_eq!(snap.traps[0].y, 370.0);
        assert_eq!(snap.runner.x, 50.0);
        assert!(snap.runner.alive);
        assert_eq!(snap.goal.width, 40.0);
    }

    #[test]
    fn test_json_field_names() {
        let mut round = Round::new(Level::create(1));
        round.start();
        let id = round.next_trap_id();
        round.add_trap(Trap::new(id, TrapKind::Spike, 100.0, 100.0).expect("trap"));

        let json = Snapshot::from_round(&round).to_json().expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");

        assert_eq!(value["status"], "RUNNING");
        assert_eq!(value["playerPoints"], 100);
        assert_eq!(value["level"], 1);
        assert!(value["elapsedTime"].is_number());
        assert!(value["speedMultiplier"].is_number());
        assert_eq!(value["traps"][0]["type"], "SPIKE");
        assert_eq!(value["traps"][0]["id"], "trap_1");
        assert_eq!(value["platforms"][0]["active"], true);
        assert_eq!(value["runner"]["alive"], true);
        assert!(value["goal"]["height"].is_number());
    }
}
