//! Fixed timestep simulation tick
//!
//! One call advances a running round by one logical step:
//! clock and tick bonus, runner AI, physics, trap effects, then the outcome
//! check. Rounds that are not `Running` are left untouched, so a finished
//! round stays frozen on its final frame.

use super::controller;
use super::physics;
use super::state::{Round, RoundStatus};
use super::trap::TrapEffect;

/// Advance the round by one fixed timestep
///
/// Returns the terminal status if the round ended on this tick.
pub fn tick(round: &mut Round, dt: f64) -> Option<RoundStatus> {
    if !round.is_running() {
        return None;
    }

    round.increment_time(dt);

    controller::think(&mut round.runner, round.level.platforms(), &round.traps);
    physics::step(&mut round.runner, round.level.platforms(), dt);

    apply_trap_effects(round);

    let outcome = evaluate_outcome(round)?;
    round.set_status(outcome);
    log::info!(
        "Level {} over: {} at t={:.3}s, balance {}",
        round.level.number(),
        outcome.as_str(),
        round.elapsed(),
        round.points()
    );
    Some(outcome)
}

/// Apply every overlapping trap, in placement order
///
/// No one-shot suppression: a trap keeps acting for as long as the runner
/// overlaps it.
fn apply_trap_effects(round: &mut Round) {
    let mut bonus = 0u32;

    for trap in &round.traps {
        if !physics::hits_trap(&round.runner, trap) {
            continue;
        }
        match trap.kind().effect() {
            TrapEffect::Kill { bonus: award } => {
                round.runner.die();
                bonus = bonus.saturating_add(award);
            }
            TrapEffect::Bounce => round.runner.bounce(),
            TrapEffect::Slow { multiplier } => round.runner.set_speed_multiplier(multiplier),
        }
    }

    if bonus > 0 {
        round.add_points(bonus);
    }
}

/// First matching condition wins
fn evaluate_outcome(round: &Round) -> Option<RoundStatus> {
    let runner = &round.runner;
    let level = &round.level;

    if !runner.alive || physics::fell_off_map(runner, level.height()) {
        Some(RoundStatus::PlayerWins)
    } else if physics::reached_goal(runner, &level.goal())
        || physics::out_of_bounds(runner, level.width())
    {
        Some(RoundStatus::RunnerWins)
    } else {
        None
    }
}
