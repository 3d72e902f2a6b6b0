//! The carousel facade hosts talk to.
//!
//! Three drivers can move the strip: the autoplay loop, a live pointer drag
//! and an eased transition. [`Mode`] records which one currently owns the
//! position, and every entry point stops the others before taking over:
//! pointer-down stops autoplay and any transition, explicit slide selection
//! stops autoplay, and a finished gesture hands over to a snap transition.

use std::time::Duration;

use crate::animator::{Completion, SlideAnimator, Step};
use crate::autoplay::{AutoplayLoop, AutoplayPhase};
use crate::config::CarouselConfig;
use crate::easing::Easing;
use crate::error::ConfigError;
use crate::geometry::Size;
use crate::gesture::{
    EndReason, Gesture, GestureEvent, GestureTracker, PointerInput,
};
use crate::layout::FrameGeometry;
use crate::position::SlidePosition;
use crate::render::{self, DrawSurface, SlideImage};

/// Which driver currently owns the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Nothing moves the strip.
    Idle,
    /// Autoplay is waiting out its interval or running its own transition.
    Autoplaying,
    /// A pointer gesture writes the position directly.
    Dragging,
    /// A user-requested transition is in flight.
    Animating,
}

/// Notifications collected while handling input and frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The slide considered selected changed.
    MiddleChanged(usize),
    /// A transition landed on its target.
    TransitionFinished { middle: usize },
    /// Autoplay was switched off by user interaction.
    AutoplayStopped,
}

#[derive(Debug, Clone)]
pub struct Carousel<I> {
    config: CarouselConfig,
    slides: Vec<I>,
    position: SlidePosition,
    geometry: Option<FrameGeometry>,
    animator: SlideAnimator,
    autoplay: AutoplayLoop,
    gestures: GestureTracker,
    mode: Mode,
    redraw: bool,
    disposed: bool,
    events: Vec<CarouselEvent>,
}

impl<I> Carousel<I> {
    /// Creates an empty carousel and sizes its frame from `container`.
    ///
    /// Nothing moves until slides are supplied with [`Self::set_slides`].
    pub fn init(
        config: CarouselConfig,
        container: Option<Size>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut carousel = Self {
            animator: SlideAnimator::new(config.transition_duration()),
            autoplay: AutoplayLoop::new(config.slide_interval()),
            gestures: GestureTracker::new(config.gesture_thresholds()),
            config,
            slides: Vec::new(),
            position: SlidePosition::new(),
            geometry: None,
            mode: Mode::Idle,
            redraw: true,
            disposed: false,
            events: Vec::new(),
        };
        carousel.resize(container);
        Ok(carousel)
    }

    /// Halts autoplay and any transition, and detaches input. Afterwards
    /// [`Self::tick`] and [`Self::handle_pointer`] do nothing.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.autoplay.stop();
        self.animator.cancel();
        self.gestures.unlisten();
        self.enter(Mode::Idle);
        log::debug!("carousel disposed");
    }

    /// Replaces the slide set, reapplies the current position and restarts
    /// autoplay. Input listeners are attached on the first call only.
    pub fn set_slides(&mut self, slides: Vec<I>) {
        self.slides = slides;
        self.animator.cancel();
        self.gestures.release();
        self.redraw = true;
        self.apply_position(self.position.normalized_x());

        if self.disposed {
            log::warn!(
                "slides supplied to a disposed carousel, autoplay stays off"
            );
            return;
        }
        if self.gestures.listen() {
            log::debug!("gesture listeners attached");
        }

        if self.slides.is_empty() {
            self.autoplay.stop();
            self.enter(Mode::Idle);
        } else {
            self.autoplay.arm();
            self.enter(Mode::Autoplaying);
        }
        log::debug!(
            "slide set replaced with {} slides, autoplay every {:?}",
            self.slides.len(),
            self.autoplay.interval()
        );
    }

    /// Moves to `index` with the snap curve, unless it is already the middle
    /// slide. Out-of-range indices wrap (`-1` is the last slide).
    ///
    /// Returns whether a transition was started.
    pub fn set_current_slide(&mut self, index: isize) -> bool {
        if self.disposed || self.slides.is_empty() {
            return false;
        }
        if index == self.position.middle_index() as isize {
            return false;
        }

        self.interrupt();
        self.gestures.release();
        let easing = self.config.snap_easing;
        self.start_transition(index, easing, Completion::Settle);
        true
    }

    /// Index of the slide considered selected.
    pub fn current_slide_in_middle(&self) -> usize {
        self.position.middle_index()
    }

    /// Feeds one normalized pointer event. Returns whether it was consumed.
    pub fn handle_pointer(&mut self, input: PointerInput) -> bool {
        if self.disposed {
            return false;
        }

        match self.gestures.handle(input) {
            GestureEvent::Ignored => false,
            GestureEvent::Started { .. } => {
                self.interrupt();
                self.enter(Mode::Dragging);
                true
            }
            GestureEvent::Waiting => true,
            GestureEvent::Dragged { delta } => {
                self.drag_by(delta);
                true
            }
            GestureEvent::Ended { gesture, reason } => {
                self.settle(gesture, reason);
                true
            }
        }
    }

    /// Advances autoplay and the transition in flight by one frame.
    pub fn tick(&mut self, dt: Duration) {
        if self.disposed {
            return;
        }

        match self.animator.step(dt, self.slides.len()) {
            Step::Idle => {
                if self.mode == Mode::Animating {
                    self.enter(Mode::Idle);
                }
            }
            Step::Moving(x) => self.apply_position(x),
            Step::Finished { x, completion } => {
                self.apply_position(x);
                self.finish(completion);
            }
        }

        if self.mode == Mode::Autoplaying && self.autoplay.tick(dt) {
            let target = self.position.current_index() as isize + 1;
            log::trace!("autoplay advancing to slide {target}");
            self.start_transition(
                target,
                self.config.autoplay_easing,
                Completion::ResumeAutoplay,
            );
        }
    }

    /// Recomputes the frame from the container and reapplies the position.
    /// Gestures and transitions carry on untouched. Returns `false` when the
    /// container is missing and the previous geometry was kept.
    pub fn resize(&mut self, container: Option<Size>) -> bool {
        let Some(frame) =
            FrameGeometry::from_container(container, self.config.aspect_ratio)
        else {
            log::debug!(
                "no usable container, keeping frame geometry {:?}",
                self.geometry
            );
            return false;
        };

        if self.geometry != Some(frame) {
            log::trace!("frame resized to {}x{}", frame.width, frame.height);
            self.geometry = Some(frame);
        }
        self.redraw = true;
        self.apply_position(self.position.normalized_x());
        true
    }

    /// Clears the surface and draws the visible slides.
    pub fn draw<S>(&self, surface: &mut S)
    where
        I: SlideImage,
        S: DrawSurface<I> + ?Sized,
    {
        render::render(
            surface,
            self.config.background,
            self.geometry,
            &self.position,
            &self.slides,
        );
    }

    /// Draws only if something changed since the last present. For hosts that
    /// keep a retained surface around.
    pub fn present<S>(&mut self, surface: &mut S) -> bool
    where
        I: SlideImage,
        S: DrawSurface<I> + ?Sized,
    {
        if !self.take_redraw() {
            return false;
        }
        self.draw(surface);
        true
    }

    /// Whether the host should keep delivering frames.
    pub fn wants_frames(&self) -> bool {
        !self.disposed
            && !self.slides.is_empty()
            && (self.animator.is_active() || self.autoplay.is_running())
    }

    /// Returns and clears the dirty flag set by every position write.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Hands over every event queued since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<CarouselEvent> {
        std::mem::take(&mut self.events)
    }

    /// Which driver currently owns the position.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The shared scroll coordinate.
    pub fn position(&self) -> &SlidePosition {
        &self.position
    }

    /// Last fitted frame, `None` until the first [`Self::resize`].
    pub fn geometry(&self) -> Option<FrameGeometry> {
        self.geometry
    }

    pub fn slides(&self) -> &[I] {
        &self.slides
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn autoplay_phase(&self) -> AutoplayPhase {
        self.autoplay.phase()
    }

    /// The pointer gesture in progress, if any.
    pub fn active_gesture(&self) -> Option<&Gesture> {
        self.gestures.active()
    }

    /// Unwrapped slide index the running transition heads to.
    pub fn transition_target(&self) -> Option<isize> {
        self.animator.target_index()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Stops autoplay for good and drops the transition in flight.
    fn interrupt(&mut self) {
        if self.autoplay.stop() {
            log::debug!("autoplay stopped by user interaction");
            self.events.push(CarouselEvent::AutoplayStopped);
        }
        self.animator.cancel();
    }

    fn drag_by(&mut self, delta: f32) {
        let Some(frame) = self.geometry else {
            return;
        };
        let strip_width = frame.width * self.slides.len() as f32;
        if strip_width <= 0.0 {
            return;
        }
        self.apply_position(self.position.normalized_x() - delta / strip_width);
    }

    fn settle(&mut self, gesture: Gesture, reason: EndReason) {
        if self.slides.is_empty() {
            self.enter(Mode::Idle);
            return;
        }
        let advancement = gesture.advancement(self.position.blend());
        let target = self.position.current_index() as isize + advancement;
        log::debug!(
            "{:?} gesture ended ({reason:?}), settling on slide {target}",
            gesture.kind()
        );
        let easing = self.config.snap_easing;
        self.start_transition(target, easing, Completion::Settle);
    }

    fn start_transition(
        &mut self,
        target: isize,
        easing: Easing,
        completion: Completion,
    ) {
        self.animator.restart(
            self.position.normalized_x(),
            target,
            easing,
            completion,
        );
        self.enter(match completion {
            Completion::ResumeAutoplay => Mode::Autoplaying,
            Completion::Settle => Mode::Animating,
        });
    }

    fn finish(&mut self, completion: Completion) {
        self.events.push(CarouselEvent::TransitionFinished {
            middle: self.position.middle_index(),
        });
        match completion {
            Completion::ResumeAutoplay if self.autoplay.is_running() => {
                self.autoplay.advance_finished();
                self.enter(Mode::Autoplaying);
            }
            _ => self.enter(Mode::Idle),
        }
    }

    fn apply_position(&mut self, x: f32) {
        let previous = self.position.middle_index();
        if !self.position.set(x, self.slides.len()) {
            return;
        }
        self.redraw = true;
        let middle = self.position.middle_index();
        if middle != previous {
            self.events.push(CarouselEvent::MiddleChanged(middle));
        }
    }

    fn enter(&mut self, next: Mode) {
        if self.mode != next {
            log::trace!("carousel mode {:?} -> {:?}", self.mode, next);
            self.mode = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::gesture::PointerPhase;

    const FRAME: Duration = Duration::from_millis(16);

    fn carousel(slides: usize) -> Carousel<()> {
        let mut carousel = Carousel::init(
            CarouselConfig::new(0.5),
            Some(Size::new(100.0, 0.0)),
        )
        .unwrap();
        carousel.set_slides(vec![(); slides]);
        carousel
    }

    #[test]
    fn init_rejects_invalid_config() {
        let result = Carousel::<()>::init(CarouselConfig::new(-1.0), None);
        assert!(matches!(result, Err(ConfigError::InvalidAspectRatio(_))));
    }

    #[test]
    fn mode_follows_the_driver() {
        let mut carousel = carousel(3);
        assert_eq!(carousel.mode(), Mode::Autoplaying);

        carousel.handle_pointer(PointerInput::mouse(
            PointerPhase::Down,
            Point::new(50.0, 10.0),
        ));
        assert_eq!(carousel.mode(), Mode::Dragging);

        carousel.handle_pointer(PointerInput::mouse(
            PointerPhase::Up,
            Point::new(50.0, 10.0),
        ));
        assert_eq!(carousel.mode(), Mode::Animating);

        for _ in 0..100 {
            carousel.tick(FRAME);
        }
        assert_eq!(carousel.mode(), Mode::Idle);
        assert!(!carousel.wants_frames());
    }

    #[test]
    fn empty_slide_set_stays_idle() {
        let mut carousel = carousel(0);
        assert_eq!(carousel.mode(), Mode::Idle);
        assert!(!carousel.wants_frames());
        assert!(!carousel.set_current_slide(2));
        carousel.tick(Duration::from_secs(5));
        assert_eq!(carousel.position().normalized_x(), 0.0);
    }

    #[test]
    fn dispose_is_idempotent_and_final() {
        let mut carousel = carousel(2);
        carousel.dispose();
        carousel.dispose();
        assert!(carousel.is_disposed());
        assert_eq!(carousel.mode(), Mode::Idle);

        carousel.tick(Duration::from_secs(5));
        assert_eq!(carousel.position().normalized_x(), 0.0);
        assert!(!carousel.handle_pointer(PointerInput::mouse(
            PointerPhase::Down,
            Point::ORIGIN
        )));

        carousel.set_slides(vec![(); 4]);
        assert_eq!(carousel.mode(), Mode::Idle);
        assert!(!carousel.wants_frames());
    }

    #[test]
    fn redraw_flag_is_consumed() {
        let mut carousel = carousel(2);
        assert!(carousel.take_redraw());
        assert!(!carousel.take_redraw());
        carousel.resize(Some(Size::new(200.0, 0.0)));
        assert!(carousel.take_redraw());
    }
}
