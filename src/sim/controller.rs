//! Runner AI
//!
//! A prioritized decision list evaluated once per tick while the runner is
//! alive and grounded. The first rule that matches triggers a jump; later
//! rules are not consulted.

use glam::DVec2;

use super::level::Platform;
use super::runner::Runner;
use super::trap::{Trap, TrapKind};

/// Probe distance past the runner's right edge for the gap check
pub const GAP_PROBE_AHEAD: f64 = 25.0;
/// Probe depth below the runner's feet for the gap check
pub const GAP_PROBE_DEPTH: f64 = 10.0;
/// Traps closer than this (horizontally, ahead) are jumped
pub const TRAP_DETECTION_DISTANCE: f64 = 30.0;
/// Traps further than this vertically are ignored
pub const TRAP_VERTICAL_RANGE: f64 = 50.0;
/// Horizontal window (relative to the runner's right edge) for mounting
pub const CLIMB_AHEAD_MIN: f64 = -20.0;
pub const CLIMB_AHEAD_MAX: f64 = 60.0;
/// Height window above the runner for mounting
pub const CLIMB_RISE_MIN: f64 = 30.0;
pub const CLIMB_RISE_MAX: f64 = 120.0;

/// Which rule made the runner jump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpReason {
    GapAhead,
    TrapAhead,
    HigherPlatform,
}

/// Decide whether the runner should jump this tick
pub fn decide(runner: &Runner, platforms: &[Platform], traps: &[Trap]) -> Option<JumpReason> {
    if !runner.alive || !runner.on_ground {
        return None;
    }

    if gap_ahead(runner, platforms) {
        Some(JumpReason::GapAhead)
    } else if trap_ahead(runner, traps) {
        Some(JumpReason::TrapAhead)
    } else if higher_platform_ahead(runner, platforms) {
        Some(JumpReason::HigherPlatform)
    } else {
        None
    }
}

/// Decide and act: jump if any rule fires
pub fn think(runner: &mut Runner, platforms: &[Platform], traps: &[Trap]) -> Option<JumpReason> {
    let reason = decide(runner, platforms, traps)?;
    runner.jump();
    Some(reason)
}

/// No active platform under a point just ahead of and below the feet
fn gap_ahead(runner: &Runner, platforms: &[Platform]) -> bool {
    let bounds = runner.bounds();
    let probe = DVec2::new(bounds.right() + GAP_PROBE_AHEAD, bounds.bottom() + GAP_PROBE_DEPTH);

    !platforms
        .iter()
        .filter(|p| p.is_active())
        .any(|p| p.bounds().contains_point(probe))
}

/// A harmful trap close ahead at roughly the runner's height.
/// Bounce pads are left alone; they only help the runner along.
fn trap_ahead(runner: &Runner, traps: &[Trap]) -> bool {
    let bounds = runner.bounds();

    traps
        .iter()
        .filter(|t| t.kind() != TrapKind::BouncePad)
        .any(|t| {
            let tb = t.bounds();
            let distance_ahead = tb.x - bounds.right();
            let ahead = distance_ahead > 0.0 && distance_ahead < TRAP_DETECTION_DISTANCE;
            let same_level = (tb.y - bounds.y).abs() < TRAP_VERTICAL_RANGE;
            ahead && same_level
        })
}

/// An active platform ahead whose top is within jumping height above
fn higher_platform_ahead(runner: &Runner, platforms: &[Platform]) -> bool {
    let bounds = runner.bounds();

    platforms.iter().filter(|p| p.is_active()).any(|p| {
        let pb = p.bounds();
        let distance_ahead = pb.x - bounds.right();
        let rise = bounds.y - pb.y;
        distance_ahead > CLIMB_AHEAD_MIN
            && distance_ahead < CLIMB_AHEAD_MAX
            && rise > CLIMB_RISE_MIN
            && rise < CLIMB_RISE_MAX
    })
}
