//! Session runtime
//!
//! Each connected player gets one actor task that owns its `Session` and is
//! the only writer to it. Ticks and inbound commands flow through the same
//! loop, so commands are always ordered against ticks without locking.
//! Sessions share nothing and run concurrently.

pub mod actor;
pub mod registry;

pub use actor::SessionHandle;
pub use registry::{ConnectionId, SessionRegistry};
