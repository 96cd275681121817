//! Trap Runner demo
//!
//! Runs one session through every level with the autoplay planner on the
//! player's side and logs each outcome. Pass a settings JSON path as the
//! first argument to override the defaults; `RUST_LOG` controls verbosity.

use trap_runner::autoplay::TrapPlanner;
use trap_runner::sim::RoundStatus;
use trap_runner::{Command, ConnectionId, MAX_LEVEL, SessionError, SessionRegistry, Settings};

#[tokio::main]
async fn main() -> Result<(), SessionError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring settings file {}: {}", path, e);
            Settings::default()
        }),
        None => Settings::default(),
    };

    let mut planner = TrapPlanner::new(settings.demo_seed);
    let max_ticks = settings.demo_max_ticks;
    let dt = settings.tick_dt;

    let mut registry = SessionRegistry::new(settings);
    let id = ConnectionId(1);
    let mut frames = registry.connect(id)?;
    registry.dispatch(id, Command::Start).await?;

    let mut expected_level: Option<u32> = None;
    let mut results: Vec<(u32, RoundStatus, u32)> = Vec::new();

    while frames.changed().await.is_ok() {
        let Some(frame) = frames.borrow_and_update().clone() else {
            continue;
        };
        // Stale frames from the previous round until the next level starts
        if expected_level.is_some_and(|level| level != frame.level) {
            continue;
        }
        expected_level = None;

        let ticks = (frame.elapsed_time / dt).round() as u64;
        let timed_out = frame.status == RoundStatus::Running && ticks >= max_ticks;

        if frame.status.is_terminal() || timed_out {
            if timed_out {
                log::warn!("Level {} hit the {} tick cap", frame.level, max_ticks);
            } else {
                log::info!(
                    "Level {}: {} with {} points after {:.2}s",
                    frame.level,
                    frame.status.as_str(),
                    frame.player_points,
                    frame.elapsed_time
                );
            }
            results.push((frame.level, frame.status, frame.player_points));

            if frame.level >= MAX_LEVEL {
                break;
            }
            planner.reset();
            expected_level = Some(frame.level + 1);
            registry.dispatch(id, Command::NextLevel).await?;
            continue;
        }

        if let Some(command) = planner.plan(&frame) {
            registry.dispatch(id, command).await?;
        }
    }

    registry.disconnect(id).await?;

    let player_wins = results
        .iter()
        .filter(|(_, status, _)| *status == RoundStatus::PlayerWins)
        .count();
    log::info!(
        "Demo finished: player won {} of {} levels",
        player_wins,
        results.len()
    );
    Ok(())
}
