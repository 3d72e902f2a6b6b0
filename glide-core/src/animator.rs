//! Time-based tween that moves the strip to a target slide.
//!
//! The animator holds at most one transition. [`SlideAnimator::restart`]
//! supersedes whatever is in flight by resetting the shared progress timer, so
//! the host only ever needs one frame callback per carousel.

use std::time::Duration;

use crate::easing::{Easing, lerp};
use crate::timer::ProgressTimer;

/// What happens once a transition lands on its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Hand control back to nobody; the carousel goes idle.
    Settle,
    /// Re-arm the autoplay interval if autoplay is still running.
    ResumeAutoplay,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    start_x: f32,
    target_index: isize,
    easing: Easing,
    completion: Completion,
}

/// Result of advancing the animator by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Nothing in flight.
    Idle,
    /// Intermediate position to write.
    Moving(f32),
    /// Final position to write; the transition has been torn down.
    Finished { x: f32, completion: Completion },
}

#[derive(Debug, Clone)]
pub struct SlideAnimator {
    timer: ProgressTimer,
    transition: Option<Transition>,
}

impl SlideAnimator {
    /// An idle animator whose transitions last `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            timer: ProgressTimer::new(duration),
            transition: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.transition.is_some()
    }

    /// Unwrapped index the active transition ends on.
    pub fn target_index(&self) -> Option<isize> {
        self.transition.map(|t| t.target_index)
    }

    /// Linear progress of the active transition, `None` when idle.
    pub fn progress(&self) -> Option<f32> {
        self.transition.map(|_| self.timer.progress())
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.timer.set_duration(duration);
    }

    /// Starts a transition from `start_x` to `target_index`, replacing any
    /// transition already in flight.
    ///
    /// `target_index` may be negative or past the last slide; the position
    /// write wraps it, which is how `-1` lands on the last slide.
    pub fn restart(
        &mut self,
        start_x: f32,
        target_index: isize,
        easing: Easing,
        completion: Completion,
    ) {
        if let Some(previous) = self.transition {
            log::trace!(
                "superseding transition to {} with {}",
                previous.target_index,
                target_index
            );
        }
        self.timer.reset();
        self.transition = Some(Transition {
            start_x,
            target_index,
            easing,
            completion,
        });
    }

    /// Drops the transition in flight. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        self.transition.take().is_some()
    }

    /// Advance by `dt` over a strip of `slide_count` slides.
    pub fn step(&mut self, dt: Duration, slide_count: usize) -> Step {
        let Some(transition) = self.transition else {
            return Step::Idle;
        };
        if slide_count == 0 {
            self.transition = None;
            return Step::Idle;
        }

        let progress = self.timer.update(dt);
        let target_x = transition.target_index as f32 / slide_count as f32;
        let x = lerp(
            transition.start_x,
            target_x,
            transition.easing.apply(progress),
        );

        if self.timer.ended() {
            self.transition = None;
            Step::Finished {
                x,
                completion: transition.completion,
            }
        } else {
            Step::Moving(x)
        }
    }
}
