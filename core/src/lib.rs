//! Timer- and counter-driven input watcher.
//!
//! An [`InputWatcher`] observes one input on a polled [`InputSource`] and,
//! once per game tick, turns raw down/up/pressed state into higher-level
//! [`WatcherSignal`]s: held too long, released too long, pressed N times,
//! combo held.

pub mod events;
pub mod source;
pub mod tracking;
pub mod watcher;

// Re-exports for convenience
pub use events::{SignalBus, SignalHandler, SubscriptionId, WatchSnapshot, WatcherSignal};
pub use inputwatch_types::{InputCode, Key, MouseButton, ResetMode, WatcherConfig};
pub use source::{InputSource, SnapshotSource};
pub use tracking::{ComboTracker, ElapsedTimer, ThresholdCounter};
pub use watcher::InputWatcher;
