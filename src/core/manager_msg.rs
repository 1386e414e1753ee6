// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::oneshot;

use crate::core::{events::Event, info::SessionSnapshot};

#[derive(Debug)]
pub enum ManagerMsg {
    Event(Event),

    GetSnapshot { reply: oneshot::Sender<SessionSnapshot> },

    Shutdown { reply: oneshot::Sender<()> },
}
