//! Bounded hit counter.
//!
//! Counts up to a maximum and stays there. Reaching the maximum is reported
//! to the owner through [`ThresholdCounter::is_at_max`]; the counter never
//! wraps on its own.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdCounter {
    value: u32,
    max: u32,
    step: u32,
}

impl ThresholdCounter {
    pub fn new(max: u32) -> Self {
        Self::with_step(max, 1)
    }

    pub fn with_step(max: u32, step: u32) -> Self {
        let mut counter = Self {
            value: 0,
            max: 0,
            step: 1,
        };
        counter.set_max(max);
        counter.set_step(step);
        counter
    }

    /// Add one step, stopping at the maximum
    pub fn count(&mut self) {
        self.value = self.value.saturating_add(self.step).min(self.max);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn is_at_max(&self) -> bool {
        self.value == self.max
    }

    /// Change the maximum. A value above the new maximum is pulled down to it.
    pub fn set_max(&mut self, max: u32) {
        if max == 0 {
            tracing::warn!("hit count max is 0, every press reaches the threshold");
        }
        self.max = max;
        self.value = self.value.min(max);
    }

    /// Change the step. Zero is clamped to 1.
    pub fn set_step(&mut self, step: u32) {
        if step == 0 {
            tracing::warn!("hit count step of 0 clamped to 1");
        }
        self.step = step.max(1);
    }

    /// Rounded percentage of the maximum; 0 when the maximum is 0
    pub fn percentage_of_max(&self) -> u32 {
        if self.max == 0 {
            return 0;
        }
        (f64::from(self.value) / f64::from(self.max) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_stops_at_max() {
        let mut counter = ThresholdCounter::new(3);
        counter.count();
        counter.count();
        assert_eq!(counter.value(), 2);
        assert!(!counter.is_at_max());

        counter.count();
        counter.count();
        assert_eq!(counter.value(), 3);
        assert!(counter.is_at_max());
    }

    #[test]
    fn test_step_does_not_overshoot() {
        let mut counter = ThresholdCounter::with_step(5, 2);
        counter.count();
        counter.count();
        counter.count();
        assert_eq!(counter.value(), 5);
    }

    #[test]
    fn test_zero_step_clamped() {
        let mut counter = ThresholdCounter::with_step(4, 0);
        assert_eq!(counter.step(), 1);
        counter.count();
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn test_reset() {
        let mut counter = ThresholdCounter::new(2);
        counter.count();
        counter.reset();
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_set_max_clamps_value() {
        let mut counter = ThresholdCounter::new(10);
        for _ in 0..6 {
            counter.count();
        }
        counter.set_max(4);
        assert_eq!(counter.value(), 4);
        assert!(counter.is_at_max());
    }

    #[test]
    fn test_percentage_of_max() {
        let mut counter = ThresholdCounter::new(3);
        assert_eq!(counter.percentage_of_max(), 0);
        counter.count();
        assert_eq!(counter.percentage_of_max(), 33);
        counter.count();
        assert_eq!(counter.percentage_of_max(), 67);
        counter.count();
        assert_eq!(counter.percentage_of_max(), 100);
    }

    #[test]
    fn test_with_step_zero_max_matches_set_max() {
        let built = ThresholdCounter::with_step(0, 2);
        let mut set = ThresholdCounter::with_step(5, 2);
        set.set_max(0);
        assert_eq!(built, set);
        assert_eq!(built.max(), 0);
        assert!(built.is_at_max());
    }

    #[test]
    fn test_percentage_with_zero_max() {
        let mut counter = ThresholdCounter::new(0);
        counter.count();
        assert_eq!(counter.value(), 0);
        assert!(counter.is_at_max());
        assert_eq!(counter.percentage_of_max(), 0);
    }
}
