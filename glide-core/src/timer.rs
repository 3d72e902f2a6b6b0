//! Progress timer advanced by externally supplied frame deltas.

use std::time::Duration;

/// Maps elapsed frame time onto a linear `0.0..=1.0` progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTimer {
    duration: Duration,
    elapsed: Duration,
}

impl ProgressTimer {
    /// A timer at zero progress.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Takes effect from the next [`Self::reset`].
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Rewinds to zero progress.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Advances by `dt` and returns the new progress. Monotonic and clamped.
    pub fn update(&mut self, dt: Duration) -> f32 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.progress()
    }

    /// Linear progress in `0.0..=1.0`. A zero duration reads as finished.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// True once the accumulated time covers the whole duration.
    pub fn ended(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_monotonic_and_clamped() {
        let mut timer = ProgressTimer::new(Duration::from_millis(100));
        assert_eq!(timer.progress(), 0.0);
        assert!(!timer.ended());

        let first = timer.update(Duration::from_millis(25));
        assert!((first - 0.25).abs() < 1e-6);
        let second = timer.update(Duration::from_millis(50));
        assert!(second > first);

        assert_eq!(timer.update(Duration::from_secs(5)), 1.0);
        assert!(timer.ended());
        assert_eq!(timer.update(Duration::from_millis(1)), 1.0);
    }

    #[test]
    fn reset_restarts_from_zero() {
        let mut timer = ProgressTimer::new(Duration::from_millis(10));
        timer.update(Duration::from_millis(10));
        assert!(timer.ended());

        timer.reset();
        assert_eq!(timer.progress(), 0.0);
        assert!(!timer.ended());
    }

    #[test]
    fn zero_duration_is_immediately_complete() {
        let mut timer = ProgressTimer::new(Duration::ZERO);
        assert_eq!(timer.update(Duration::ZERO), 1.0);
        assert!(timer.ended());
    }
}
