//! Trap Runner - a reverse platformer simulation
//!
//! An AI-driven runner heads for the goal; the player spends points on traps
//! to stop it.
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (geometry, levels, runner, physics, controller, rounds)
//! - `session`: Level progression and round lifecycle for one connection
//! - `runtime`: Per-session tick actors and the connection registry
//! - `command` / `snapshot`: Inbound commands and outbound state views
//! - `autoplay`: Seeded trap planner that plays the player's side
//! - `settings`: Runtime configuration

pub mod autoplay;
pub mod command;
pub mod error;
pub mod runtime;
pub mod session;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use command::Command;
pub use error::{BuildError, CommandError, SessionError, SettingsError};
pub use runtime::{ConnectionId, SessionHandle, SessionRegistry};
pub use session::{MAX_LEVEL, Session};
pub use settings::Settings;
pub use snapshot::Snapshot;

/// Game configuration constants
pub mod consts {
    /// Fixed logical timestep per tick (seconds)
    pub const SIM_DT: f64 = 0.016;
    /// Driver period between ticks (~62.5 Hz)
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Downward acceleration (units/s²), positive y points down
    pub const GRAVITY: f64 = 800.0;
    /// Horizontal runner speed before multipliers
    pub const BASE_SPEED: f64 = 150.0;
    /// Vertical velocity set by a jump (negative = up)
    pub const JUMP_FORCE: f64 = -350.0;
    /// Bounce pads launch at this multiple of the jump force
    pub const BOUNCE_FACTOR: f64 = 1.5;

    /// Runner bounding box
    pub const RUNNER_WIDTH: f64 = 20.0;
    pub const RUNNER_HEIGHT: f64 = 30.0;

    /// Trap footprint (square, centered on the placement point)
    pub const TRAP_SIZE: f64 = 30.0;

    /// Feet may sit this far below a platform top and still land on it
    pub const LANDING_TOLERANCE: f64 = 20.0;
    /// Distance past the world edge before the runner counts as gone
    pub const MAP_MARGIN: f64 = 50.0;

    /// One point is awarded each time elapsed time crosses a multiple of this
    pub const POINT_INTERVAL: f64 = 0.5;
}
