// Author: Dustin Pilgrim
// License: MIT

mod actions;
mod run;


use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};

use crate::api::SessionApi;
use crate::auth::{CredentialStore, Navigator};
use crate::core::{
    config::SessionConfig,
    error::Error,
    events::Event,
    info::SessionSnapshot,
    manager::Manager,
    manager_msg::ManagerMsg,
    state::State,
    utils::now_ms,
};
use crate::modal::{ModalChoice, ModalCommand};
use crate::services::activity::{ActivitySource, UiEventStream};
use crate::services::ticker;
use crate::{vdebug, vwarn};

/// Everything the session runtime borrows from the embedding client.
pub struct Collaborators {
    pub api: Arc<dyn SessionApi>,
    pub credentials: Arc<dyn CredentialStore>,
    pub navigator: Arc<dyn Navigator>,
    pub ui_events: Arc<dyn UiEventStream>,
}

/// Async shell around the state machine.
///
/// Owns the manager and its state; every mutation flows through one mpsc
/// mailbox, so activity pulses, ticks and commands are serialized and no
/// invariant has to survive an await point.
pub struct SessionRuntime {
    manager: Manager,
    state: State,
    api: Arc<dyn SessionApi>,
    credentials: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
    activity: ActivitySource,
    snapshot_tx: watch::Sender<SessionSnapshot>,

    // Mirror of the last Show/Update/Hide action, folded into snapshots.
    countdown: Option<u64>,
}

impl SessionRuntime {
    /// Validate the config, wire the collaborators, start the idle clock,
    /// and hand back the command surface. One runtime per authenticated
    /// session; a fresh login spawns a fresh one.
    pub fn spawn(cfg: SessionConfig, collab: Collaborators) -> Result<SessionHandle, Error> {
        let manager = Manager::new(cfg.clone())?;
        let window_minutes = cfg.warning_window_minutes();

        let (tx, rx) = mpsc::channel::<ManagerMsg>(256);
        let (snapshot_tx, snapshot_rx) = watch::channel(SessionSnapshot::initial());

        let activity = ActivitySource::attach(collab.ui_events.as_ref(), tx.clone());
        tokio::spawn(ticker::run_ticker(tx.clone(), cfg.check_interval()));

        if collab.credentials.credential().is_none() {
            vwarn!("Session", "spawned without a stored credential");
        }

        // Advisory startup probe; the reply is telemetry, never state.
        {
            let api = Arc::clone(&collab.api);
            tokio::spawn(async move {
                match api.check().await {
                    Ok(status) if status.valid => {
                        vdebug!("Session", "server expiry at {}", status.expires_at);
                    }
                    Ok(_) => vwarn!("Session", "server reports the session invalid"),
                    Err(e) => vdebug!("Session", "check-session failed: {}", e),
                }
            });
        }

        let runtime = SessionRuntime {
            manager,
            state: State::new(now_ms()),
            api: collab.api,
            credentials: collab.credentials,
            navigator: collab.navigator,
            activity,
            snapshot_tx,
            countdown: None,
        };
        tokio::spawn(runtime.run(rx));

        Ok(SessionHandle {
            tx,
            snapshot_rx,
            window_minutes,
        })
    }
}

/// Cloneable command surface handed to the presentation layer.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<ManagerMsg>,
    snapshot_rx: watch::Receiver<SessionSnapshot>,
    window_minutes: u64,
}

impl SessionHandle {
    /// Keep the session alive: resets the idle period locally and refreshes
    /// the server-side credential best-effort.
    pub async fn extend(&self) {
        let _ = self
            .tx
            .send(ManagerMsg::Event(Event::ExtendSession { now_ms: now_ms() }))
            .await;
    }

    /// End the session now.
    pub async fn logout(&self) {
        let _ = self
            .tx
            .send(ManagerMsg::Event(Event::LogoutRequested { now_ms: now_ms() }))
            .await;
    }

    /// Relay a modal decision.
    pub async fn choose(&self, choice: ModalChoice) {
        match choice.command() {
            ModalCommand::Extend => self.extend().await,
            ModalCommand::Logout => self.logout().await,
        }
    }

    /// Synchronized snapshot: round-trips through the runtime so everything
    /// already queued lands first. Falls back to the last published value
    /// once the runtime is gone.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self
            .tx
            .send(ManagerMsg::GetSnapshot { reply: reply_tx })
            .await
            .is_ok()
        {
            if let Ok(snap) = reply_rx.await {
                return snap;
            }
        }
        self.last_snapshot()
    }

    /// Last published snapshot, no synchronization.
    pub fn last_snapshot(&self) -> SessionSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Watch feed for reactive consumers; the expiry modal re-renders from
    /// this.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Full countdown span, for `modal::view`.
    pub fn warning_window_minutes(&self) -> u64 {
        self.window_minutes
    }

    /// Stop the runtime without logging out (authenticated layout unmount).
    pub async fn shutdown(&self) {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self
            .tx
            .send(ManagerMsg::Shutdown { reply: reply_tx })
            .await
            .is_ok()
        {
            let _ = reply_rx.await;
        }
    }
}
