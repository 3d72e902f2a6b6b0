//! The iced application: state, messages and wiring.

mod subscriptions;
mod update;
mod view;

use std::time::Instant;

use glide_core::{Carousel, FrameClock, PointerInput, Size};
use iced::widget::canvas::Cache;

use crate::settings::Settings;
use crate::slides::Slide;

pub use subscriptions::subscription;
pub use update::update;
pub use view::view;

#[derive(Debug, Clone)]
pub enum Message {
    /// Normalized pointer input from the canvas.
    Pointer(PointerInput),
    /// The canvas was laid out at a new size.
    Resized(Size),
    /// A window frame is about to be drawn.
    Frame(Instant),
    /// Keyboard request to move by this many slides.
    Navigate(isize),
    CloseRequested(iced::window::Id),
}

pub struct State {
    pub carousel: Carousel<Slide>,
    pub clock: FrameClock,
    pub cache: Cache,
}

impl State {
    pub fn new(carousel: Carousel<Slide>) -> Self {
        Self {
            carousel,
            clock: FrameClock::new(),
            cache: Cache::new(),
        }
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("carousel", &self.carousel)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

/// Opens the slideshow window and blocks until it is closed.
pub fn run(settings: Settings, slides: Vec<Slide>) -> anyhow::Result<()> {
    // The canvas reports its size on the first frame.
    let mut carousel = Carousel::init(settings.carousel, None)?;
    carousel.set_slides(slides);

    let window = settings.window;
    iced::application(
        move || State::new(carousel.clone()),
        update,
        view,
    )
    .title("Glide")
    .subscription(subscription)
    .window(iced::window::Settings {
        size: iced::Size::new(window.width, window.height),
        resizable: true,
        exit_on_close_request: false,
        ..Default::default()
    })
    .run()?;

    Ok(())
}
