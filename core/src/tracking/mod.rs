//! Threshold primitives composed by the input watcher
//!
//! - **ElapsedTimer**: accumulates tick durations toward a timeout
//! - **ThresholdCounter**: counts completed presses toward a maximum
//! - **ComboTracker**: samples a set of inputs and reports when all are down
//!
//! None of these read the clock or the device themselves; the watcher feeds
//! them once per tick.

mod combo;
mod counter;
mod timer;

pub use combo::ComboTracker;
pub use counter::ThresholdCounter;
pub use timer::ElapsedTimer;
