//! Per-tick input watcher state machine.

use std::fmt;
use std::time::Duration;

use inputwatch_types::{ResetMode, WatcherConfig, duration_from_secs};

use crate::events::{SignalBus, SignalHandler, SubscriptionId, WatchSnapshot, WatcherSignal};
use crate::source::InputSource;
use crate::tracking::{ComboTracker, ElapsedTimer, ThresholdCounter};

/// Watches one input (plus an optional combo) on a polled source and turns
/// raw down/up/pressed state into timeout, hit-count and combo signals.
///
/// Call [`InputWatcher::update`] once per game tick with the time since the
/// previous tick. A disabled watcher ignores updates entirely.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use inputwatch_core::{
///     InputCode, InputSource, InputWatcher, Key, SnapshotSource, WatcherConfig, WatcherSignal,
/// };
///
/// let space = InputCode::Key(Key::Space);
/// let mut config = WatcherConfig::new(space);
/// config.down_timeout_secs = 0.5;
/// let mut watcher = InputWatcher::from_config(SnapshotSource::new(), &config);
///
/// watcher.source_mut().press(space);
/// watcher.source_mut().advance_current_state();
/// assert_eq!(watcher.update(Duration::from_millis(300)), vec![WatcherSignal::InputDown]);
///
/// watcher.source_mut().advance_current_state();
/// assert_eq!(watcher.update(Duration::from_millis(300)), vec![WatcherSignal::DownTimedOut]);
/// ```
pub struct InputWatcher<S: InputSource> {
    source: S,
    watched: S::Code,
    enabled: bool,

    current_state: bool,
    previous_state: bool,

    down_timer: ElapsedTimer,
    release_timer: ElapsedTimer,
    hit_counter: ThresholdCounter,
    combo: Option<ComboTracker<S::Code>>,

    down_reset: ResetMode,
    release_reset: ResetMode,
    hit_count_reset: ResetMode,

    signals: SignalBus,
}

impl<S: InputSource> InputWatcher<S> {
    /// Watch `watched` with the default configuration
    pub fn new(source: S, watched: S::Code) -> Self {
        Self::from_config(source, &WatcherConfig::new(watched))
    }

    pub fn from_config(source: S, config: &WatcherConfig<S::Code>) -> Self {
        let mut watcher = Self {
            source,
            watched: config.watched,
            enabled: config.enabled,
            current_state: false,
            previous_state: false,
            down_timer: ElapsedTimer::new(config.down_timeout()),
            // Released from the start, so the release timeout is already counting
            release_timer: ElapsedTimer::running(config.release_timeout()),
            hit_counter: ThresholdCounter::with_step(config.hit_count_max, config.hit_count_step),
            combo: None,
            down_reset: config.down_reset,
            release_reset: config.release_reset,
            hit_count_reset: config.hit_count_reset,
            signals: SignalBus::new(),
        };
        if config.has_combo() {
            watcher.set_combo(config.combo.iter().copied());
        }
        watcher
    }

    /// Apply a new configuration between ticks.
    ///
    /// Timer and counter progress is kept unless the watched input changes.
    pub fn apply_config(&mut self, config: &WatcherConfig<S::Code>) {
        self.set_watched_input(config.watched);
        self.enabled = config.enabled;
        self.hit_counter.set_max(config.hit_count_max);
        self.hit_counter.set_step(config.hit_count_step);
        self.down_timer.set_timeout(config.down_timeout());
        self.release_timer.set_timeout(config.release_timeout());
        self.down_reset = config.down_reset;
        self.release_reset = config.release_reset;
        self.hit_count_reset = config.hit_count_reset;
        if config.has_combo() {
            self.set_combo(config.combo.iter().copied());
        } else {
            self.clear_combo();
        }
    }

    /// Current configuration. Combo order is unspecified.
    pub fn config(&self) -> WatcherConfig<S::Code> {
        WatcherConfig {
            watched: self.watched,
            enabled: self.enabled,
            hit_count_max: self.hit_counter.max(),
            hit_count_step: self.hit_counter.step(),
            hit_count_reset: self.hit_count_reset,
            down_timeout_secs: self.down_timer.timeout().as_secs_f32(),
            down_reset: self.down_reset,
            release_timeout_secs: self.release_timer.timeout().as_secs_f32(),
            release_reset: self.release_reset,
            combo: self
                .combo
                .as_ref()
                .map(|combo| combo.codes().collect())
                .unwrap_or_default(),
        }
    }

    // ─── Tick ───────────────────────────────────────────────────────────────

    /// Advance the watcher by one tick.
    ///
    /// Returns the signals fired during this tick, in the order subscribers
    /// saw them. Steps run in a fixed order because later steps read state
    /// written by earlier ones.
    pub fn update(&mut self, elapsed: Duration) -> Vec<WatcherSignal> {
        let mut fired = Vec::new();
        if !self.enabled {
            return fired;
        }

        tracing::trace!(
            watched = ?self.watched,
            elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "watcher tick"
        );

        self.current_state = self.source.is_down(self.watched);

        self.update_hit_count(&mut fired);
        self.update_release_timeout(elapsed, &mut fired);

        if self.current_state {
            self.update_down(elapsed, &mut fired);
        } else if self.previous_state {
            // Down → Up: the down timer is cleared whatever the reset mode
            self.down_timer.cancel();
            self.release_timer.reset();
            self.release_timer.start();
            self.fire(WatcherSignal::InputReleased, &mut fired);
        }

        self.update_combo(&mut fired);

        self.source.advance_previous_state();
        self.previous_state = self.current_state;

        fired
    }

    /// Same as [`InputWatcher::update`] with a delta in seconds.
    /// Negative or NaN deltas count as no time passing.
    pub fn update_secs(&mut self, elapsed_secs: f32) -> Vec<WatcherSignal> {
        if elapsed_secs.is_nan() || elapsed_secs < 0.0 {
            tracing::warn!(elapsed_secs, "invalid tick delta treated as zero");
        }
        self.update(duration_from_secs(elapsed_secs))
    }

    fn update_hit_count(&mut self, fired: &mut Vec<WatcherSignal>) {
        if !self.source.was_pressed(self.watched) {
            return;
        }

        // A counter already sitting at max (manual mode) re-fires without counting
        if !self.hit_counter.is_at_max() {
            self.hit_counter.count();
        }

        if self.hit_counter.is_at_max() {
            self.fire(WatcherSignal::HitCountReached, fired);
            if self.hit_count_reset.is_auto() {
                self.hit_counter.reset();
            }
        }
    }

    fn update_release_timeout(&mut self, elapsed: Duration, fired: &mut Vec<WatcherSignal>) {
        self.release_timer.advance(elapsed);
        if self.release_timer.is_running() && self.release_timer.has_timed_out() {
            self.fire(WatcherSignal::ReleaseTimedOut, fired);
            if self.release_reset.is_auto() {
                self.release_timer.reset();
            }
        }
    }

    fn update_down(&mut self, elapsed: Duration, fired: &mut Vec<WatcherSignal>) {
        // Being down cancels any release timeout in progress
        self.release_timer.cancel();
        self.down_timer.start();
        self.down_timer.advance(elapsed);

        if !self.previous_state {
            self.fire(WatcherSignal::InputDown, fired);
        }

        if self.down_timer.has_timed_out() {
            self.fire(WatcherSignal::DownTimedOut, fired);
            if self.down_reset.is_auto() {
                self.down_timer.reset();
            }
        }
    }

    fn update_combo(&mut self, fired: &mut Vec<WatcherSignal>) {
        let Some(combo) = self.combo.as_mut() else {
            return;
        };
        let source = &self.source;
        combo.sample(|code| source.is_down(code));

        // Level-triggered: fires on every tick the combo stays held
        if combo.is_satisfied() {
            self.fire(WatcherSignal::ComboPressed, fired);
        }
    }

    fn fire(&mut self, signal: WatcherSignal, fired: &mut Vec<WatcherSignal>) {
        let snapshot = self.snapshot();
        self.signals.emit(signal, &snapshot);
        fired.push(signal);
    }

    // ─── Subscriptions ──────────────────────────────────────────────────────

    /// Subscribe to every signal this watcher emits
    pub fn subscribe(&mut self, handler: impl SignalHandler + 'static) -> SubscriptionId {
        self.signals.subscribe(handler)
    }

    /// Subscribe a zero-argument callback to one signal
    pub fn on(&mut self, signal: WatcherSignal, callback: impl FnMut() + 'static) -> SubscriptionId {
        self.signals.on(signal, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.signals.unsubscribe(id)
    }

    pub fn signals_mut(&mut self) -> &mut SignalBus {
        &mut self.signals
    }

    // ─── Manual resets ──────────────────────────────────────────────────────

    /// Clear the down timer; used with `ResetMode::Manual`
    pub fn reset_down_timer(&mut self) {
        self.down_timer.reset();
    }

    /// Clear the release timer; used with `ResetMode::Manual`
    pub fn reset_release_timer(&mut self) {
        self.release_timer.reset();
    }

    /// Clear the hit count; used with `ResetMode::Manual`
    pub fn reset_hit_count(&mut self) {
        self.hit_counter.reset();
    }

    // ─── Configuration ──────────────────────────────────────────────────────

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn enable(&mut self) {
        self.set_enabled(true);
    }

    pub fn disable(&mut self) {
        self.set_enabled(false);
    }

    pub fn watched_input(&self) -> S::Code {
        self.watched
    }

    /// Watch a different input. The previous input's down/release history
    /// and hit count are discarded.
    pub fn set_watched_input(&mut self, code: S::Code) {
        if code == self.watched {
            return;
        }
        tracing::debug!(from = ?self.watched, to = ?code, "watched input changed");
        self.watched = code;
        self.current_state = false;
        self.previous_state = false;
        self.down_timer.cancel();
        self.release_timer.reset();
        self.release_timer.start();
        self.hit_counter.reset();
    }

    pub fn set_hit_count_max(&mut self, max: u32) {
        self.hit_counter.set_max(max);
    }

    pub fn set_hit_count_step(&mut self, step: u32) {
        self.hit_counter.set_step(step);
    }

    pub fn set_down_timeout(&mut self, timeout: Duration) {
        self.down_timer.set_timeout(timeout);
    }

    pub fn set_release_timeout(&mut self, timeout: Duration) {
        self.release_timer.set_timeout(timeout);
    }

    pub fn down_reset_mode(&self) -> ResetMode {
        self.down_reset
    }

    pub fn set_down_reset_mode(&mut self, mode: ResetMode) {
        self.down_reset = mode;
    }

    pub fn release_reset_mode(&self) -> ResetMode {
        self.release_reset
    }

    pub fn set_release_reset_mode(&mut self, mode: ResetMode) {
        self.release_reset = mode;
    }

    pub fn hit_count_reset_mode(&self) -> ResetMode {
        self.hit_count_reset
    }

    pub fn set_hit_count_reset_mode(&mut self, mode: ResetMode) {
        self.hit_count_reset = mode;
    }

    /// Track a combo. Replaces any existing combo; inputs no longer part of
    /// it are forgotten.
    pub fn set_combo(&mut self, codes: impl IntoIterator<Item = S::Code>) {
        match self.combo.as_mut() {
            Some(combo) => combo.set_codes(codes),
            None => self.combo = Some(ComboTracker::new(codes)),
        }
    }

    pub fn clear_combo(&mut self) {
        self.combo = None;
    }

    // ─── State ──────────────────────────────────────────────────────────────

    /// Whether the watched input was down on the last tick
    pub fn is_down(&self) -> bool {
        self.current_state
    }

    pub fn down_timer(&self) -> &ElapsedTimer {
        &self.down_timer
    }

    pub fn release_timer(&self) -> &ElapsedTimer {
        &self.release_timer
    }

    pub fn hit_counter(&self) -> &ThresholdCounter {
        &self.hit_counter
    }

    pub fn combo(&self) -> Option<&ComboTracker<S::Code>> {
        self.combo.as_ref()
    }

    pub fn snapshot(&self) -> WatchSnapshot {
        WatchSnapshot {
            is_down: self.current_state,
            down_elapsed: self.down_timer.elapsed(),
            release_elapsed: self.release_timer.elapsed(),
            hit_count: self.hit_counter.value(),
            hit_count_max: self.hit_counter.max(),
            combo_satisfied: self.combo.as_ref().map(ComboTracker::is_satisfied),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S> fmt::Debug for InputWatcher<S>
where
    S: InputSource + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputWatcher")
            .field("source", &self.source)
            .field("watched", &self.watched)
            .field("enabled", &self.enabled)
            .field("current_state", &self.current_state)
            .field("previous_state", &self.previous_state)
            .field("down_timer", &self.down_timer)
            .field("release_timer", &self.release_timer)
            .field("hit_counter", &self.hit_counter)
            .field("combo", &self.combo)
            .field("down_reset", &self.down_reset)
            .field("release_reset", &self.release_reset)
            .field("hit_count_reset", &self.hit_count_reset)
            .field("signals", &self.signals)
            .finish()
    }
}
