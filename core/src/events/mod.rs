pub mod bus;
pub mod handler;
pub mod signal;

pub use bus::{SignalBus, SubscriptionId};
pub use handler::SignalHandler;
pub use signal::{WatchSnapshot, WatcherSignal};
