//! Shared fixtures for the carousel integration tests.

#![allow(dead_code)]

use std::time::Duration;

use glide_core::{
    Carousel, CarouselConfig, Color, DrawSurface, Point, PointerInput,
    PointerPhase, Rect, Size, SlideImage,
};

/// Frame step used when driving the carousel by hand.
pub const FRAME: Duration = Duration::from_millis(16);

/// Width of the test container. With a 0.5 aspect ratio the frame is 100x50.
pub const FRAME_WIDTH: f32 = 100.0;

/// Slide stand-in that only knows its dimensions and an id to trace draws by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestSlide {
    pub id: usize,
    pub size: Size,
}

impl SlideImage for TestSlide {
    fn dimensions(&self) -> Size {
        self.size
    }
}

pub fn slides(count: usize) -> Vec<TestSlide> {
    (0..count)
        .map(|id| TestSlide {
            id,
            size: Size::new(200.0, 100.0),
        })
        .collect()
}

pub fn config() -> CarouselConfig {
    CarouselConfig::new(0.5)
        .with_slide_interval(1.0)
        .with_transition(1.0)
}

/// Carousel with `count` slides in a 100 unit wide container.
pub fn carousel(count: usize) -> Carousel<TestSlide> {
    let mut carousel =
        Carousel::init(config(), Some(Size::new(FRAME_WIDTH, 400.0)))
            .expect("valid config");
    carousel.set_slides(slides(count));
    carousel
}

/// Ticks for `total` in [`FRAME`] steps.
pub fn run_for<I>(carousel: &mut Carousel<I>, total: Duration) {
    let mut remaining = total;
    while !remaining.is_zero() {
        let step = remaining.min(FRAME);
        carousel.tick(step);
        remaining -= step;
    }
}

/// Ticks until no transition is in flight.
pub fn settle<I>(carousel: &mut Carousel<I>) {
    for _ in 0..1_000 {
        if carousel.transition_target().is_none() {
            return;
        }
        carousel.tick(FRAME);
    }
    panic!("transition never finished");
}

pub fn mouse(phase: PointerPhase, x: f32, y: f32) -> PointerInput {
    PointerInput::mouse(phase, Point::new(x, y))
}

pub fn touch(phase: PointerPhase, x: f32, y: f32) -> PointerInput {
    PointerInput::touch(phase, Point::new(x, y))
}

/// Presses the mouse at `start` and moves it `steps` times by `step` each.
pub fn drag_mouse<I>(
    carousel: &mut Carousel<I>,
    start: f32,
    step: f32,
    steps: usize,
) -> f32 {
    carousel.handle_pointer(mouse(PointerPhase::Down, start, 20.0));
    let mut x = start;
    for _ in 0..steps {
        x += step;
        carousel.handle_pointer(mouse(PointerPhase::Move, x, 20.0));
    }
    x
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

/// Draw calls recorded by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear(Color),
    Save,
    Restore,
    Draw { id: usize, dest: Rect },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn draws(&self) -> Vec<(usize, Rect)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Draw { id, dest } => Some((*id, *dest)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface<TestSlide> for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.calls.push(Call::Clear(color));
    }

    fn save(&mut self) {
        self.calls.push(Call::Save);
    }

    fn restore(&mut self) {
        self.calls.push(Call::Restore);
    }

    fn draw_image(&mut self, image: &TestSlide, dest: Rect) {
        self.calls.push(Call::Draw { id: image.id, dest });
    }
}
