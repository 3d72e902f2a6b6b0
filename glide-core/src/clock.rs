//! Converts frame timestamps from the host scheduler into per-frame deltas.

use std::time::{Duration, Instant};

/// Longest step fed to the animation in one frame. Larger gaps (a stalled
/// window, a resumed subscription) are treated as a single slow frame.
pub const MAX_FRAME_STEP: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    /// A clock whose first tick reports a zero delta.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time since the previous frame, zero for the first frame after a pause.
    pub fn delta(&mut self, now: Instant) -> Duration {
        let dt = self
            .last
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last = Some(now);
        dt.min(MAX_FRAME_STEP)
    }

    /// Forget the last frame so the next one starts from zero.
    pub fn pause(&mut self) {
        self.last = None;
    }
}
