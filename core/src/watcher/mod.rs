//! Input watcher
//!
//! # Tick order
//!
//! ```text
//!   update(elapsed)
//!        │
//!        ├─ disabled? ──────────────────────────────► return (nothing changes)
//!        │
//!        ├─ sample watched input (down / up)
//!        ├─ was pressed?   ─► count hit ─► at max? ─► HitCountReached (+ auto reset)
//!        ├─ release timer  ─► advance   ─► timed out? ─► ReleaseTimedOut (+ auto reset)
//!        ├─ down?          ─► cancel release timer, advance down timer
//!        │                    ├─ Up→Down ─► InputDown
//!        │                    └─ timed out? ─► DownTimedOut (+ auto reset)
//!        ├─ Down→Up?       ─► cancel down timer, start release timer ─► InputReleased
//!        ├─ combo held?    ─► ComboPressed (every tick it stays held)
//!        └─ acknowledge the source frame, remember this tick's state
//! ```
//!
//! Auto resets always run after the signal has been delivered, so handlers
//! see the at-threshold values in their `WatchSnapshot`.

mod input_watcher;


pub use input_watcher::InputWatcher;
