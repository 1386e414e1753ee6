// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::mpsc;

use crate::core::{
    action::Action, events::Event, info::SessionSnapshot, manager_msg::ManagerMsg, state::Phase,
};
use crate::{vdebug, verror, vinfo};

use super::SessionRuntime;

impl SessionRuntime {
    pub(super) async fn run(mut self, mut rx: mpsc::Receiver<ManagerMsg>) {
        vinfo!("Session", "runtime started");

        loop {
            let Some(msg) = rx.recv().await else {
                vinfo!("Session", "runtime stopping (channel closed)");
                break;
            };

            match msg {
                ManagerMsg::Event(event) => {
                    let actions = self.handle_one_event(event);

                    for action in actions {
                        self.exec_action(action);
                    }
                    self.publish();

                    if self.state.phase() == Phase::Expired {
                        vinfo!("Session", "session over; runtime stopping");
                        break;
                    }
                }

                ManagerMsg::GetSnapshot { reply } => {
                    let _ = reply.send(self.current_snapshot());
                }

                ManagerMsg::Shutdown { reply } => {
                    vinfo!("Session", "runtime stopping (shutdown requested)");
                    let _ = reply.send(());
                    break;
                }
            }
        }

        self.activity.detach();
        // rx drops here; the ticker stops on its next send.
    }

    fn handle_one_event(&mut self, event: Event) -> Vec<Action> {
        if !matches!(event, Event::Tick { .. }) {
            vdebug!("Session", "incoming: {:?}", event);
        }

        match self.manager.handle_event(&mut self.state, event) {
            Ok(actions) => {
                if !actions.is_empty() {
                    vdebug!("Session", "actions: {:?}", actions);
                }
                actions
            }
            Err(e) => {
                // Nothing propagates past this point; a rejected command
                // degrades to "assume logged out" on the caller's side.
                verror!("Session", "rejected event: {}", e);
                Vec::new()
            }
        }
    }

    pub(super) fn current_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.state.phase(),
            remaining_minutes: self.countdown,
        }
    }

    fn publish(&self) {
        let _ = self.snapshot_tx.send(self.current_snapshot());
    }
}
