use super::{WatchSnapshot, WatcherSignal};

/// Trait for anything that reacts to watcher signals.
///
/// Handlers run synchronously inside `InputWatcher::update`, in the order
/// they were subscribed. A panicking handler unwinds through the caller.
pub trait SignalHandler {
    fn handle_signal(&mut self, signal: WatcherSignal, snapshot: &WatchSnapshot);
}

impl<F> SignalHandler for F
where
    F: FnMut(WatcherSignal, &WatchSnapshot),
{
    fn handle_signal(&mut self, signal: WatcherSignal, snapshot: &WatchSnapshot) {
        self(signal, snapshot)
    }
}
