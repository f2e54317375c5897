use std::fmt;
use std::time::Duration;

/// Signals emitted by an `InputWatcher`.
/// These represent behavior noticed across ticks, at a higher level than
/// the raw down/up/pressed polling of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatcherSignal {
    // Edges of the watched input
    InputDown,
    InputReleased,

    // Timeouts
    DownTimedOut,
    ReleaseTimedOut,

    // Hit count reached its maximum
    HitCountReached,

    // Every combo input is down this tick (fires each tick it stays held)
    ComboPressed,
}

impl WatcherSignal {
    pub const ALL: [WatcherSignal; 6] = [
        WatcherSignal::InputDown,
        WatcherSignal::InputReleased,
        WatcherSignal::DownTimedOut,
        WatcherSignal::ReleaseTimedOut,
        WatcherSignal::HitCountReached,
        WatcherSignal::ComboPressed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WatcherSignal::InputDown => "input_down",
            WatcherSignal::InputReleased => "input_released",
            WatcherSignal::DownTimedOut => "down_timed_out",
            WatcherSignal::ReleaseTimedOut => "release_timed_out",
            WatcherSignal::HitCountReached => "hit_count_reached",
            WatcherSignal::ComboPressed => "combo_pressed",
        }
    }
}

impl fmt::Display for WatcherSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Watcher state captured at the moment a signal is emitted, before any
/// auto reset runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WatchSnapshot {
    pub is_down: bool,
    pub down_elapsed: Duration,
    pub release_elapsed: Duration,
    pub hit_count: u32,
    pub hit_count_max: u32,
    /// `None` when no combo is configured
    pub combo_satisfied: Option<bool>,
}
