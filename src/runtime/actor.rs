//! Per-session actor
//!
//! The actor loop selects between the command queue and a fixed-rate ticker.
//! Snapshots go out on a watch channel: readers always see the latest frame
//! and a slow reader simply misses intermediate ones.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::command::Command;
use crate::error::SessionError;
use crate::session::Session;
use crate::settings::Settings;
use crate::snapshot::Snapshot;

/// Owning handle to a running session actor
///
/// Dropping the handle closes the command queue, which stops the actor.
#[derive(Debug)]
pub struct SessionHandle {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<Option<Snapshot>>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    /// Spawn a session actor on the current tokio runtime
    pub fn spawn(settings: &Settings) -> Self {
        let (command_tx, command_rx) = mpsc::channel(settings.command_capacity);
        let (snapshot_tx, snapshot_rx) = watch::channel(None);

        let actor = SessionActor {
            session: Session::at_level(settings.starting_level),
            commands: command_rx,
            snapshots: snapshot_tx,
            period: Duration::from_millis(settings.tick_interval_ms),
            dt: settings.tick_dt,
        };
        let task = tokio::spawn(actor.run());

        Self {
            commands: command_tx,
            snapshots: snapshot_rx,
            task,
        }
    }

    /// Queue a command; waits if the queue is full
    pub async fn send(&self, command: Command) -> Result<(), SessionError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| SessionError::Closed)
    }

    /// Receiver for the outbound snapshot stream
    pub fn subscribe(&self) -> watch::Receiver<Option<Snapshot>> {
        self.snapshots.clone()
    }

    /// Most recently published snapshot
    pub fn latest(&self) -> Option<Snapshot> {
        self.snapshots.borrow().clone()
    }

    /// The actor has exited (teardown or internal fault)
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Close the command queue and wait for the actor to exit. No tick runs
    /// after this returns.
    pub async fn shutdown(self) {
        drop(self.commands);
        if let Err(e) = self.task.await {
            log::error!("Session actor ended abnormally: {}", e);
        }
    }
}

struct SessionActor {
    session: Session,
    commands: mpsc::Receiver<Command>,
    snapshots: watch::Sender<Option<Snapshot>>,
    period: Duration,
    dt: f64,
}

impl SessionActor {
    async fn run(mut self) {
        let mut ticker = time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        log::info!(
            "Session actor started: {} ms ticks, dt={}",
            self.period.as_millis(),
            self.dt
        );

        loop {
            tokio::select! {
                // A due tick runs before any further queued command
                biased;

                _ = ticker.tick() => {
                    if !self.on_tick() {
                        break;
                    }
                }

                command = self.commands.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    if let Err(e) = self.session.apply(command) {
                        log::warn!("Rejected command: {}", e);
                    }
                }
            }
        }

        log::info!(
            "Session actor stopped on level {}",
            self.session.current_level()
        );
    }

    /// Run one tick and publish the frame. Returns false on an internal
    /// fault; the session is torn down rather than repaired.
    fn on_tick(&mut self) -> bool {
        self.session.tick(self.dt);

        if self.session.round().is_some_and(|r| !r.is_consistent()) {
            log::error!("Simulation state is no longer finite, tearing down session");
            return false;
        }

        if let Some(snapshot) = self.session.snapshot() {
            self.snapshots.send_replace(Some(snapshot));
        }
        true
    }
}
