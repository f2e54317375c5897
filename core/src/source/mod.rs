//! Polled input source capability
//!
//! The watcher never polls a device itself. It is handed something that
//! implements [`InputSource`] at construction and reads it once per tick.
//! The device owner latches a new frame with `advance_current_state`; the
//! watcher acknowledges the frame with `advance_previous_state` when its
//! tick completes.

mod snapshot;

use std::cell::RefCell;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

pub use snapshot::SnapshotSource;

/// Read access to a polled keyboard/mouse-like device
pub trait InputSource {
    /// Opaque identifier of a single input (key, mouse button, ...)
    type Code: Copy + Eq + Hash + Debug;

    fn is_down(&self, code: Self::Code) -> bool;

    fn is_up(&self, code: Self::Code) -> bool {
        !self.is_down(code)
    }

    /// True on the single tick that completes a down→up cycle
    fn was_pressed(&self, code: Self::Code) -> bool;

    /// Latch the device state for the coming tick
    fn advance_current_state(&mut self);

    /// Roll the current state into the previous state
    fn advance_previous_state(&mut self);
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    type Code = T::Code;

    fn is_down(&self, code: Self::Code) -> bool {
        (**self).is_down(code)
    }

    fn is_up(&self, code: Self::Code) -> bool {
        (**self).is_up(code)
    }

    fn was_pressed(&self, code: Self::Code) -> bool {
        (**self).was_pressed(code)
    }

    fn advance_current_state(&mut self) {
        (**self).advance_current_state()
    }

    fn advance_previous_state(&mut self) {
        (**self).advance_previous_state()
    }
}

/// Lets several watchers in one game loop share a single device
impl<T: InputSource> InputSource for Rc<RefCell<T>> {
    type Code = T::Code;

    fn is_down(&self, code: Self::Code) -> bool {
        self.borrow().is_down(code)
    }

    fn is_up(&self, code: Self::Code) -> bool {
        self.borrow().is_up(code)
    }

    fn was_pressed(&self, code: Self::Code) -> bool {
        self.borrow().was_pressed(code)
    }

    fn advance_current_state(&mut self) {
        self.borrow_mut().advance_current_state()
    }

    fn advance_previous_state(&mut self) {
        self.borrow_mut().advance_previous_state()
    }
}
