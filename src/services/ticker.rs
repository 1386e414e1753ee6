// Author: Dustin Pilgrim
// License: MIT

use crate::core::events::Event;
use crate::core::manager_msg::ManagerMsg;
use crate::core::utils::now_ms;
use crate::{vinfo, vwarn};

use tokio::sync::mpsc::Sender;
use tokio::time::{Duration, sleep};

/// The idle clock: one repeating timer per runtime instance.
///
/// Polling instead of a one-shot deadline keeps extend/reset handling
/// trivial; nothing ever needs rescheduling.
pub async fn run_ticker(tx: Sender<ManagerMsg>, interval: Duration) {
    vinfo!("Ticker", "started ({}s interval)", interval.as_secs());

    loop {
        sleep(interval).await;

        let now_ms = now_ms();
        // If the runtime is gone, stop.
        if tx.send(ManagerMsg::Event(Event::Tick { now_ms })).await.is_err() {
            vwarn!("Ticker", "stopping (receiver dropped)");
            break;
        }
    }
}
