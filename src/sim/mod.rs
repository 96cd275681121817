//! Fixed-timestep simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed logical timestep only (never measured wall-clock time)
//! - Stable iteration order (platform order and trap insertion order matter)
//! - No transport or runtime dependencies

pub mod controller;
pub mod geometry;
pub mod level;
pub mod physics;
pub mod runner;
pub mod state;
pub mod tick;
pub mod trap;

pub use controller::{JumpReason, decide, think};
pub use geometry::Rect;
pub use level::{Level, Platform};
pub use runner::Runner;
pub use state::{Round, RoundStatus};
pub use tick::tick;
pub use trap::{Trap, TrapEffect, TrapKind};
