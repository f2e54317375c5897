//! Combo tracking: a set of inputs that must all be down in the same tick.

use std::hash::Hash;

use hashbrown::HashMap;

/// Last sampled down state for every input in a combo
#[derive(Debug, Clone)]
pub struct ComboTracker<C> {
    states: HashMap<C, bool>,
}

impl<C: Eq + Hash> PartialEq for ComboTracker<C> {
    fn eq(&self, other: &Self) -> bool {
        self.states == other.states
    }
}

impl<C: Eq + Hash> Eq for ComboTracker<C> {}

impl<C> Default for ComboTracker<C> {
    fn default() -> Self {
        Self {
            states: HashMap::new(),
        }
    }
}

impl<C: Copy + Eq + Hash> ComboTracker<C> {
    /// Track `codes`, all starting up. Duplicates collapse into one entry.
    pub fn new(codes: impl IntoIterator<Item = C>) -> Self {
        Self {
            states: codes.into_iter().map(|code| (code, false)).collect(),
        }
    }

    /// Replace the tracked set.
    ///
    /// Codes absent from `codes` are dropped. Codes already tracked keep their
    /// last sampled state; new codes start up.
    pub fn set_codes(&mut self, codes: impl IntoIterator<Item = C>) {
        let previous = std::mem::take(&mut self.states);
        self.states = codes
            .into_iter()
            .map(|code| (code, previous.get(&code).copied().unwrap_or(false)))
            .collect();
    }

    /// Overwrite every tracked state from `is_down`
    pub fn sample(&mut self, mut is_down: impl FnMut(C) -> bool) {
        for (code, state) in self.states.iter_mut() {
            *state = is_down(*code);
        }
    }

    /// True when at least one code is tracked and every tracked code is down
    pub fn is_satisfied(&self) -> bool {
        !self.states.is_empty() && self.states.values().all(|down| *down)
    }

    /// Last sampled state of `code`, `None` if it is not part of the combo
    pub fn state(&self, code: C) -> Option<bool> {
        self.states.get(&code).copied()
    }

    pub fn contains(&self, code: C) -> bool {
        self.states.contains_key(&code)
    }

    pub fn codes(&self) -> impl Iterator<Item = C> + '_ {
        self.states.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Mark every tracked code as up without changing membership
    pub fn clear_states(&mut self) {
        for state in self.states.values_mut() {
            *state = false;
        }
    }
}
