//! Elapsed-time accumulator with a timeout threshold.
//!
//! The timer never reads a clock. The owner feeds it the duration of each
//! tick through [`ElapsedTimer::advance`], which only accumulates while the
//! timer is running.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElapsedTimer {
    elapsed: Duration,
    timeout: Duration,
    running: bool,
}

impl ElapsedTimer {
    /// Create a stopped timer
    pub fn new(timeout: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            timeout,
            running: false,
        }
    }

    /// Create a timer that is already accumulating
    pub fn running(timeout: Duration) -> Self {
        Self {
            running: true,
            ..Self::new(timeout)
        }
    }

    /// Begin accumulating. Does not clear elapsed time.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop accumulating. Keeps elapsed time.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Clear elapsed time, leaving the running state as it was
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Clear elapsed time and stop
    pub fn cancel(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    /// Add `delta` to the elapsed time if running
    pub fn advance(&mut self, delta: Duration) {
        if self.running {
            self.elapsed = self.elapsed.saturating_add(delta);
        }
    }

    /// A zero timeout counts as timed out once the timer has been started
    pub fn has_timed_out(&self) -> bool {
        self.elapsed >= self.timeout && (self.running || !self.timeout.is_zero())
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time left before the timeout, zero once reached
    pub fn remaining(&self) -> Duration {
        self.timeout.saturating_sub(self.elapsed)
    }

    /// Elapsed time as a percentage of the timeout, capped at 100
    pub fn percent_elapsed(&self) -> f32 {
        if self.timeout.is_zero() {
            return if self.running { 100.0 } else { 0.0 };
        }
        let ratio = self.elapsed.as_secs_f64() / self.timeout.as_secs_f64();
        (ratio * 100.0).min(100.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_new_timer_is_stopped() {
        let mut timer = ElapsedTimer::new(ms(100));
        assert!(!timer.is_running());
        timer.advance(ms(50));
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_advance_accumulates_while_running() {
        let mut timer = ElapsedTimer::running(ms(100));
        timer.advance(ms(30));
        timer.advance(ms(40));
        assert_eq!(timer.elapsed(), ms(70));
        assert!(!timer.has_timed_out());
        assert_eq!(timer.remaining(), ms(30));

        timer.advance(ms(30));
        assert!(timer.has_timed_out());
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_start_is_idempotent_and_keeps_elapsed() {
        let mut timer = ElapsedTimer::running(ms(100));
        timer.advance(ms(20));
        timer.start();
        timer.start();
        assert_eq!(timer.elapsed(), ms(20));
        assert!(timer.is_running());
    }

    #[test]
    fn test_stop_freezes_elapsed() {
        let mut timer = ElapsedTimer::running(ms(100));
        timer.advance(ms(20));
        timer.stop();
        timer.advance(ms(20));
        assert_eq!(timer.elapsed(), ms(20));
    }

    #[test]
    fn test_reset_keeps_running_state() {
        let mut timer = ElapsedTimer::running(ms(100));
        timer.advance(ms(150));
        timer.reset();
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert!(timer.is_running());

        timer.stop();
        timer.reset();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_cancel_clears_and_stops() {
        let mut timer = ElapsedTimer::running(ms(100));
        timer.advance(ms(60));
        timer.cancel();
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_zero_timeout_always_timed_out() {
        let timer = ElapsedTimer::running(Duration::ZERO);
        assert!(timer.has_timed_out());
        assert_eq!(timer.percent_elapsed(), 100.0);
        assert_eq!(ElapsedTimer::new(Duration::ZERO).percent_elapsed(), 0.0);
    }

    #[test]
    fn test_stopped_zero_timeout_not_timed_out() {
        let mut timer = ElapsedTimer::new(Duration::ZERO);
        assert!(!timer.has_timed_out());

        timer.start();
        assert!(timer.has_timed_out());

        timer.cancel();
        assert!(!timer.has_timed_out());
    }

    #[test]
    fn test_stopped_timer_keeps_reached_timeout() {
        let mut timer = ElapsedTimer::running(ms(100));
        timer.advance(ms(150));
        timer.stop();
        assert!(timer.has_timed_out());
    }

    #[test]
    fn test_percent_elapsed() {
        let mut timer = ElapsedTimer::running(ms(200));
        timer.advance(ms(50));
        assert!((timer.percent_elapsed() - 25.0).abs() < 1e-4);
        timer.advance(ms(500));
        assert_eq!(timer.percent_elapsed(), 100.0);
    }

    #[test]
    fn test_advance_saturates() {
        let mut timer = ElapsedTimer::running(Duration::MAX);
        timer.advance(Duration::MAX);
        timer.advance(ms(1));
        assert_eq!(timer.elapsed(), Duration::MAX);
        assert!(timer.has_timed_out());
    }
}
