//! Desktop host for the Glide carousel.
//!
//! Wires [`glide_core::Carousel`] to an iced window: a canvas widget draws the
//! frame and forwards pointer input, the window frame subscription drives
//! ticks, and the canvas reports its own size for resizes.

pub mod app;
pub mod cli;
pub mod settings;
pub mod slides;
pub mod snapshot;
pub mod widgets;
