// Author: Dustin Pilgrim
// License: MIT

use crate::core::events::Event;
use crate::core::manager_msg::ManagerMsg;
use crate::core::utils::now_ms;

use tokio::sync::mpsc::Sender;

/// Raw interaction kinds the embedding UI can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    PointerDown,
    PointerMove,
    KeyPress,
    Scroll,
    TouchStart,
    Click,
}

impl InputKind {
    /// Everything that counts as user presence.
    pub const ALL: [InputKind; 6] = [
        InputKind::PointerDown,
        InputKind::PointerMove,
        InputKind::KeyPress,
        InputKind::Scroll,
        InputKind::TouchStart,
        InputKind::Click,
    ];
}

pub type ActivityCallback = Box<dyn Fn() + Send + Sync>;

/// Cancellation guard returned by `UiEventStream::subscribe`.
pub trait Subscription: Send {
    fn unsubscribe(self: Box<Self>);
}

/// Document-level interaction feed owned by the embedding client.
///
/// Listeners observe the capture phase, so a page handler that stops
/// propagation still counts as presence. The callback must fire for every
/// matching raw event; coalescing is the subscriber's concern. Registration
/// is assumed to succeed (there is no error path in the hosts we target).
pub trait UiEventStream: Send + Sync + 'static {
    fn subscribe(&self, kinds: &[InputKind], on_event: ActivityCallback) -> Box<dyn Subscription>;
}

/// Republishes raw interaction events as normalized activity pulses.
///
/// No time-based debouncing: every qualifying event resets the idle period
/// (a cheap timestamp write). A pulse dropped under channel backpressure is
/// recovered by the next one.
pub struct ActivitySource {
    sub: Option<Box<dyn Subscription>>,
}

impl ActivitySource {
    pub fn attach(events: &dyn UiEventStream, tx: Sender<ManagerMsg>) -> Self {
        let sub = events.subscribe(
            &InputKind::ALL,
            Box::new(move || {
                let _ = tx.try_send(ManagerMsg::Event(Event::UserActivity { now_ms: now_ms() }));
            }),
        );

        Self { sub: Some(sub) }
    }

    /// Listener teardown. Required before the runtime goes away; idempotent.
    pub fn detach(&mut self) {
        if let Some(sub) = self.sub.take() {
            sub.unsubscribe();
        }
    }
}

impl Drop for ActivitySource {
    fn drop(&mut self) {
        self.detach();
    }
}
