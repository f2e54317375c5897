//! Shared configuration types for input watchers.
//!
//! Kept free of watcher logic so hosts can load and edit watcher settings
//! without pulling in the state machine.

pub mod config;
pub mod input_code;

pub use config::{ResetMode, WatcherConfig, duration_from_secs};
pub use input_code::{InputCode, Key, MouseButton, ParseInputCodeError};
