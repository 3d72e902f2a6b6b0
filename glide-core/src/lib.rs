//! Core of the Glide image carousel.
//!
//! A single horizontal strip of equally spaced slides is scrolled through one
//! normalized coordinate. Three drivers compete for that coordinate: the
//! autoplay loop, a live pointer drag and an eased transition. [`Carousel`]
//! reconciles them through an explicit [`Mode`] so only one of them writes the
//! position at any instant.
//!
//! Nothing here talks to a window system. Hosts feed pointer input, per-frame
//! time deltas and container sizes in, and hand a [`DrawSurface`] to
//! [`Carousel::draw`] to get pixels out.

pub mod animator;
pub mod autoplay;
pub mod carousel;
pub mod clock;
pub mod color;
pub mod config;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod position;
pub mod raster;
pub mod render;
pub mod timer;

pub use animator::{Completion, SlideAnimator, Step};
pub use autoplay::{AutoplayLoop, AutoplayPhase};
pub use carousel::{Carousel, CarouselEvent, Mode};
pub use clock::FrameClock;
pub use color::Color;
pub use config::CarouselConfig;
pub use easing::{Easing, lerp};
pub use error::{ConfigError, RasterError};
pub use geometry::{Point, Rect, Size};
pub use gesture::{
    EndReason, Gesture, GestureEvent, GestureThresholds, GestureTracker,
    MoveOutcome, PointerInput, PointerKind, PointerPhase,
};
pub use layout::FrameGeometry;
pub use position::SlidePosition;
pub use raster::{RasterSlide, RasterSurface};
pub use render::{DrawSurface, FramePlan, Placement, SlideImage};
pub use timer::ProgressTimer;
