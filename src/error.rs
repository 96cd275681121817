//! Error types
//!
//! Construction and boundary failures only. Domain operations that would
//! break an invariant (unaffordable trap, placing while not running) are
//! silent no-ops and never surface here.

use thiserror::Error;

use crate::runtime::ConnectionId;

/// Errors raised when validating entities before they are created.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("{entity} identifier must not be empty")]
    EmptyId { entity: &'static str },
    #[error("{entity} coordinate {field} is not finite ({value})")]
    NonFinite {
        entity: &'static str,
        field: &'static str,
        value: f64,
    },
    #[error("{entity} has non-positive size {width}x{height}")]
    InvalidSize {
        entity: &'static str,
        width: f64,
        height: f64,
    },
    #[error("level number {0} is outside the level catalog")]
    LevelNumber(u32),
    #[error("level {0} has no platforms")]
    NoPlatforms(u32),
}

/// Errors raised while decoding an inbound command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("malformed command: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid command payload: {0}")]
    Invalid(#[from] BuildError),
}

/// Errors raised by the session registry and actor handles.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("connection {0} has no session")]
    UnknownConnection(ConnectionId),
    #[error("connection {0} already has a session")]
    AlreadyConnected(ConnectionId),
    #[error("session actor has shut down")]
    Closed,
}

/// Errors raised when loading runtime settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(&'static str),
}
