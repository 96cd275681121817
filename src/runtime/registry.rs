//! Connection registry
//!
//! Maps transport connection ids to their session actors. The transport
//! layer owns one registry and calls `connect` / `disconnect` from its
//! connection lifecycle events.

use std::collections::HashMap;
use std::fmt;

use tokio::sync::watch;

use super::actor::SessionHandle;
use crate::command::Command;
use crate::error::SessionError;
use crate::settings::Settings;
use crate::snapshot::Snapshot;

/// Transport-assigned connection identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owned table of live sessions
#[derive(Debug, Default)]
pub struct SessionRegistry {
    settings: Settings,
    sessions: HashMap<ConnectionId, SessionHandle>,
}

impl SessionRegistry {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            sessions: HashMap::new(),
        }
    }

    /// Start a session actor for a new connection and return its snapshot
    /// stream
    pub fn connect(
        &mut self,
        id: ConnectionId,
    ) -> Result<watch::Receiver<Option<Snapshot>>, SessionError> {
        if self.sessions.contains_key(&id) {
            return Err(SessionError::AlreadyConnected(id));
        }
        let handle = SessionHandle::spawn(&self.settings);
        let frames = handle.subscribe();
        self.sessions.insert(id, handle);
        log::info!("Connection {} opened ({} live)", id, self.sessions.len());
        Ok(frames)
    }

    /// Forward a command to the connection's session
    pub async fn dispatch(&self, id: ConnectionId, command: Command) -> Result<(), SessionError> {
        self.sessions
            .get(&id)
            .ok_or(SessionError::UnknownConnection(id))?
            .send(command)
            .await
    }

    /// Decode a raw command and forward it. Undecodable input is logged and
    /// dropped; it never reaches the session.
    pub async fn dispatch_json(&self, id: ConnectionId, json: &str) -> Result<(), SessionError> {
        match Command::parse(json) {
            Ok(command) => self.dispatch(id, command).await,
            Err(e) => {
                log::warn!("Connection {}: {}", id, e);
                Ok(())
            }
        }
    }

    /// Another receiver on the connection's snapshot stream
    pub fn subscribe(
        &self,
        id: ConnectionId,
    ) -> Result<watch::Receiver<Option<Snapshot>>, SessionError> {
        self.sessions
            .get(&id)
            .map(SessionHandle::subscribe)
            .ok_or(SessionError::UnknownConnection(id))
    }

    /// Remove the connection and wait for its actor to stop
    pub async fn disconnect(&mut self, id: ConnectionId) -> Result<(), SessionError> {
        let handle = self
            .sessions
            .remove(&id)
            .ok_or(SessionError::UnknownConnection(id))?;
        handle.shutdown().await;
        log::info!("Connection {} closed ({} live)", id, self.sessions.len());
        Ok(())
    }

    /// Stop every session
    pub async fn shutdown(&mut self) {
        for (_, handle) in self.sessions.drain() {
            handle.shutdown().await;
        }
    }

    pub fn contains(&self, id: ConnectionId) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
