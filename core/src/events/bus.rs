//! Ordered observer list for watcher signals

use std::fmt;
use std::time::Duration;

use super::{SignalHandler, WatchSnapshot, WatcherSignal};

/// Handle returned by [`SignalBus::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    /// `None` receives every signal
    filter: Option<WatcherSignal>,
    handler: Box<dyn SignalHandler>,
}

/// Delivers signals to subscribers in registration order.
/// Emitting with no subscribers does nothing.
#[derive(Default)]
pub struct SignalBus {
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every signal
    pub fn subscribe(&mut self, handler: impl SignalHandler + 'static) -> SubscriptionId {
        self.push(None, Box::new(handler))
    }

    /// Subscribe a zero-argument callback to one kind of signal
    pub fn on(&mut self, signal: WatcherSignal, mut callback: impl FnMut() + 'static) -> SubscriptionId {
        self.push(
            Some(signal),
            Box::new(move |_: WatcherSignal, _: &WatchSnapshot| callback()),
        )
    }

    fn push(&mut self, filter: Option<WatcherSignal>, handler: Box<dyn SignalHandler>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, filter, handler });
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);
        self.subscriptions.len() != before
    }

    pub fn emit(&mut self, signal: WatcherSignal, snapshot: &WatchSnapshot) {
        tracing::debug!(
            %signal,
            hit_count = snapshot.hit_count,
            down_ms = millis(snapshot.down_elapsed),
            release_ms = millis(snapshot.release_elapsed),
            subscribers = self.subscriptions.len(),
            "watcher signal"
        );

        for sub in self.subscriptions.iter_mut() {
            if sub.filter.is_none_or(|wanted| wanted == signal) {
                sub.handler.handle_signal(signal, snapshot);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }
}

/// Whole milliseconds for logging, saturating near `Duration::MAX`
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl fmt::Debug for SignalBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalBus")
            .field("subscribers", &self.subscriptions.len())
            .finish()
    }
}
