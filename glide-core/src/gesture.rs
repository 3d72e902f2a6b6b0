//! Pointer gesture interpretation: live drag, swipe commit and touch axis lock.
//!
//! Input arrives as a tagged [`PointerInput`] whose [`PointerKind`] is decided
//! by the host once per event. The kind of the pointer-down fixes which
//! "listeners" are attached for the rest of the gesture, so stray events of the
//! other kind are ignored.

use crate::geometry::Point;

/// Device class of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Single continuous pointer with an unambiguous axis.
    Mouse,
    /// Finger input whose initial axis has to be disambiguated.
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// Pointer left the surface (mouse only).
    Leave,
    /// Platform cancelled the sequence (touch only).
    Cancel,
}

/// A normalized, surface-relative pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub kind: PointerKind,
    pub phase: PointerPhase,
    pub position: Point,
}

impl PointerInput {
    /// A mouse sample.
    pub fn mouse(phase: PointerPhase, position: Point) -> Self {
        Self {
            kind: PointerKind::Mouse,
            phase,
            position,
        }
    }

    pub fn touch(phase: PointerPhase, position: Point) -> Self {
        Self {
            kind: PointerKind::Touch,
            phase,
            position,
        }
    }
}

/// Distances, in device units, that drive gesture decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureThresholds {
    /// A single move at least this far commits a swipe.
    pub swipe: f32,
    /// Travel from the origin that resolves the touch axis lock.
    pub axis_lock: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            swipe: 20.0,
            axis_lock: 20.0,
        }
    }
}

/// What a single move event means for the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// Touch axis still ambiguous; do nothing.
    Wait,
    /// Follow the pointer horizontally by `delta`.
    Drag { delta: f32 },
    /// Large instantaneous move; end the gesture as a swipe.
    Commit { delta: f32 },
    /// Vertical scroll detected; end the gesture without dragging.
    Abandon,
}

/// Per-interaction state, alive from pointer-down until the gesture ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    kind: PointerKind,
    origin: Point,
    previous: Point,
    delta: f32,
    axis_locked: bool,
    swipe_committed: bool,
}

impl Gesture {
    /// Starts tracking a press at `position`.
    pub fn begin(kind: PointerKind, position: Point) -> Self {
        Self {
            kind,
            origin: position,
            previous: position,
            delta: 0.0,
            axis_locked: kind == PointerKind::Touch,
            swipe_committed: false,
        }
    }

    pub fn kind(&self) -> PointerKind {
        self.kind
    }

    /// Where the press started.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Horizontal delta of the most recent move.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn is_axis_locked(&self) -> bool {
        self.axis_locked
    }

    pub fn is_swipe_committed(&self) -> bool {
        self.swipe_committed
    }

    /// Feeds a move and reports what it changed.
    pub fn track(
        &mut self,
        position: Point,
        thresholds: GestureThresholds,
    ) -> MoveOutcome {
        self.delta = position.x - self.previous.x;
        self.previous = position;

        if self.delta.abs() >= thresholds.swipe {
            self.swipe_committed = true;
            return MoveOutcome::Commit { delta: self.delta };
        }

        if self.axis_locked {
            if (position.y - self.origin.y).abs() > thresholds.axis_lock {
                return MoveOutcome::Abandon;
            }
            if (position.x - self.origin.x).abs() <= thresholds.axis_lock {
                return MoveOutcome::Wait;
            }
            self.axis_locked = false;
        }

        MoveOutcome::Drag { delta: self.delta }
    }

    /// Slides to move relative to the current slide once the gesture ends,
    /// given the blend weight towards the next slide at release.
    ///
    /// A committed swipe to the right reveals the previous slide; being more
    /// than halfway scrolled snaps forward on top of that.
    pub fn advancement(&self, blend: f32) -> isize {
        let mut advancement = 0;
        if self.swipe_committed {
            advancement = if self.delta > 0.0 { -1 } else { 1 };
        }
        if blend >= 0.5 {
            advancement += 1;
        }
        advancement
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Released,
    Committed,
    Abandoned,
}

/// How the tracker interpreted one pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Not listening, or not part of the tracked gesture.
    Ignored,
    /// A gesture began. `replaced` is set when a stale gesture was dropped.
    Started { replaced: bool },
    /// Axis lock is still undecided.
    Waiting,
    /// Live drag by `delta` device units.
    Dragged { delta: f32 },
    /// The gesture is over and its listeners are detached.
    Ended { gesture: Gesture, reason: EndReason },
}

/// Owns the listener registration and the live [`Gesture`], if any.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    thresholds: GestureThresholds,
    listening: bool,
    active: Option<Gesture>,
}

impl GestureTracker {
    /// A recognizer with no press in progress.
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            listening: false,
            active: None,
        }
    }

    pub fn thresholds(&self) -> GestureThresholds {
        self.thresholds
    }

    /// Attaches the gesture-start listeners. Returns `false` if they were
    /// already attached, so repeated calls never double up.
    pub fn listen(&mut self) -> bool {
        !std::mem::replace(&mut self.listening, true)
    }

    /// Detaches everything, dropping any live gesture without resolving it.
    pub fn unlisten(&mut self) {
        self.listening = false;
        self.active = None;
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn active(&self) -> Option<&Gesture> {
        self.active.as_ref()
    }

    /// Drops the live gesture without resolving it. Idempotent.
    pub fn release(&mut self) -> Option<Gesture> {
        self.active.take()
    }

    /// Routes one pointer sample to the active gesture.
    pub fn handle(&mut self, input: PointerInput) -> GestureEvent {
        if !self.listening {
            return GestureEvent::Ignored;
        }

        if input.phase == PointerPhase::Down {
            let replaced = self
                .active
                .replace(Gesture::begin(input.kind, input.position))
                .is_some();
            if replaced {
                log::debug!("pointer down during live gesture, restarting it");
            }
            return GestureEvent::Started { replaced };
        }

        let Some(gesture) = self.active.as_mut() else {
            return GestureEvent::Ignored;
        };
        if gesture.kind != input.kind {
            return GestureEvent::Ignored;
        }

        match input.phase {
            PointerPhase::Down => unreachable!("handled above"),
            PointerPhase::Move => {
                match gesture.track(input.position, self.thresholds) {
                    MoveOutcome::Wait => GestureEvent::Waiting,
                    MoveOutcome::Drag { delta } => {
                        GestureEvent::Dragged { delta }
                    }
                    MoveOutcome::Commit { .. } => {
                        self.end(EndReason::Committed)
                    }
                    MoveOutcome::Abandon => self.end(EndReason::Abandoned),
                }
            }
            PointerPhase::Up | PointerPhase::Leave | PointerPhase::Cancel => {
                self.end(EndReason::Released)
            }
        }
    }

    fn end(&mut self, reason: EndReason) -> GestureEvent {
        match self.active.take() {
            Some(gesture) => GestureEvent::Ended { gesture, reason },
            None => GestureEvent::Ignored,
        }
    }
}
