//! Periodic forward advancement while nobody else is driving the strip.
//!
//! The loop is one-way per slide set: once stopped it stays stopped until
//! [`AutoplayLoop::arm`] is called for a freshly supplied set of slides.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayPhase {
    /// Counting frame time towards the next advance.
    Waiting { elapsed: Duration },
    /// An autoplay transition is in flight.
    Advancing,
    /// Disabled until the next slide set.
    Stopped,
}

#[derive(Debug, Clone)]
pub struct AutoplayLoop {
    interval: Duration,
    phase: AutoplayPhase,
}

impl AutoplayLoop {
    /// Starts out stopped; nothing advances until [`Self::arm`].
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            phase: AutoplayPhase::Stopped,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the loop is counting, frozen or stopped for good.
    pub fn phase(&self) -> AutoplayPhase {
        self.phase
    }

    /// True while the loop is counting down to the next advance.
    pub fn is_running(&self) -> bool {
        self.phase != AutoplayPhase::Stopped
    }

    /// (Re)starts the countdown from zero.
    pub fn arm(&mut self) {
        self.phase = AutoplayPhase::Waiting {
            elapsed: Duration::ZERO,
        };
    }

    /// Idempotent. Returns whether the loop was running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        self.phase = AutoplayPhase::Stopped;
        was_running
    }

    /// Counts `dt` towards the interval. Returns `true` exactly once per
    /// interval, at which point the loop moves to [`AutoplayPhase::Advancing`]
    /// and the caller is expected to start the forward transition.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let AutoplayPhase::Waiting { elapsed } = &mut self.phase else {
            return false;
        };
        *elapsed = elapsed.saturating_add(dt);
        if *elapsed < self.interval {
            return false;
        }
        self.phase = AutoplayPhase::Advancing;
        true
    }

    /// Called when the autoplay transition lands. Only re-arms if the loop
    /// was not stopped in the meantime.
    pub fn advance_finished(&mut self) {
        if self.phase == AutoplayPhase::Advancing {
            self.arm();
        }
    }
}
