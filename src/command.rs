//! Inbound commands
//!
//! The transport hands over one JSON object per command, tagged by `type`:
//!
//! ```json
//! {"type": "START"}
//! {"type": "PLACE_TRAP", "trapType": "SPIKE", "x": 320.0, "y": 385.0}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{BuildError, CommandError};
use crate::sim::TrapKind;

/// A player command, mapped 1:1 onto session operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    Start,
    Restart,
    NextLevel,
    PlaceTrap {
        #[serde(rename = "trapType", alias = "trapKind")]
        kind: TrapKind,
        x: f64,
        y: f64,
    },
}

impl Command {
    /// Decode and validate a command at the transport boundary
    pub fn parse(json: &str) -> Result<Self, CommandError> {
        let command: Command = serde_json::from_str(json)?;
        command.validate()?;
        Ok(command)
    }

    /// Reject payloads that could never produce a valid entity
    pub fn validate(&self) -> Result<(), BuildError> {
        if let Command::PlaceTrap { x, y, .. } = *self {
            for (field, value) in [("x", x), ("y", y)] {
                if !value.is_finite() {
                    return Err(BuildError::NonFinite {
                        entity: "trap",
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}
