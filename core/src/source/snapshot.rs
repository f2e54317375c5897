//! In-memory polled device.
//!
//! The host records raw presses and releases as they arrive, then latches
//! them once per tick. Three sets are kept:
//!
//! - **raw**: what the host has reported since the last latch
//! - **current**: the latched state watchers read this tick
//! - **previous**: the latched state of the last acknowledged tick
//!
//! A roll requested through `advance_previous_state` is applied when the
//! next frame is latched, so every watcher sharing the source reads the
//! same previous/current pair during a tick.

use std::fmt::Debug;
use std::hash::Hash;

use hashbrown::HashSet;

use super::InputSource;

#[derive(Debug, Clone)]
pub struct SnapshotSource<C> {
    raw: HashSet<C>,
    current: HashSet<C>,
    previous: HashSet<C>,
    roll_pending: bool,
}

impl<C> Default for SnapshotSource<C> {
    fn default() -> Self {
        Self {
            raw: HashSet::new(),
            current: HashSet::new(),
            previous: HashSet::new(),
            roll_pending: false,
        }
    }
}

impl<C: Copy + Eq + Hash> SnapshotSource<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `code` went down. Visible after the next latch.
    pub fn press(&mut self, code: C) {
        self.raw.insert(code);
    }

    /// Record that `code` went up. Visible after the next latch.
    pub fn release(&mut self, code: C) {
        self.raw.remove(&code);
    }

    pub fn set(&mut self, code: C, down: bool) {
        if down {
            self.press(code);
        } else {
            self.release(code);
        }
    }

    pub fn release_all(&mut self) {
        self.raw.clear();
    }

    /// Codes down in the latched frame
    pub fn down_codes(&self) -> impl Iterator<Item = C> + '_ {
        self.current.iter().copied()
    }

    pub fn was_down_last_tick(&self, code: C) -> bool {
        self.previous.contains(&code)
    }
}

impl<C: Copy + Eq + Hash + Debug> InputSource for SnapshotSource<C> {
    type Code = C;

    fn is_down(&self, code: C) -> bool {
        self.current.contains(&code)
    }

    fn was_pressed(&self, code: C) -> bool {
        self.previous.contains(&code) && !self.current.contains(&code)
    }

    fn advance_current_state(&mut self) {
        if self.roll_pending {
            self.previous = std::mem::take(&mut self.current);
            self.roll_pending = false;
        }
        self.current.clone_from(&self.raw);
    }

    fn advance_previous_state(&mut self) {
        self.roll_pending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One full frame as a game loop drives it
    fn frame(source: &mut SnapshotSource<u8>) {
        source.advance_current_state();
    }

    fn ack(source: &mut SnapshotSource<u8>) {
        source.advance_previous_state();
    }

    #[test]
    fn test_raw_state_visible_after_latch() {
        let mut source = SnapshotSource::new();
        source.press(1u8);
        assert!(!source.is_down(1));
        assert!(source.is_up(1));

        frame(&mut source);
        assert!(source.is_down(1));
        assert!(!source.is_up(1));
        assert_eq!(source.down_codes().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_was_pressed_pulses_once_per_cycle() {
        let mut source = SnapshotSource::new();
        source.press(7u8);
        frame(&mut source);
        assert!(!source.was_pressed(7));
        ack(&mut source);

        source.release(7);
        frame(&mut source);
        assert!(source.was_pressed(7));
        assert!(source.was_down_last_tick(7));
        ack(&mut source);

        frame(&mut source);
        assert!(!source.was_pressed(7));
    }

    #[test]
    fn test_repeated_acknowledgement_rolls_once() {
        let mut source = SnapshotSource::new();
        source.press(2u8);
        frame(&mut source);
        ack(&mut source);

        source.release(2);
        frame(&mut source);
        // two watchers sharing the source both see the pulse
        assert!(source.was_pressed(2));
        ack(&mut source);
        assert!(source.was_pressed(2));
        ack(&mut source);

        frame(&mut source);
        assert!(!source.was_pressed(2));
    }

    #[test]
    fn test_set_and_release_all() {
        let mut source = SnapshotSource::new();
        source.set(1u8, true);
        source.set(2u8, true);
        source.set(1u8, false);
        frame(&mut source);
        assert!(!source.is_down(1));
        assert!(source.is_down(2));

        source.release_all();
        frame(&mut source);
        assert!(!source.is_down(2));
    }
}
