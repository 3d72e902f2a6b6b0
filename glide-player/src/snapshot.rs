//! Headless rendering of a single settled frame to an image file.

use std::path::Path;

use anyhow::{Context, bail};
use glide_core::{Carousel, CarouselConfig, RasterSurface, Size};

use crate::slides;

/// Renders `slide` of the images in `images` at `width` pixels and writes the
/// frame to `output`.
pub fn render(
    config: CarouselConfig,
    images: &Path,
    output: &Path,
    width: u32,
    slide: isize,
) -> anyhow::Result<()> {
    let container = Some(Size::new(width as f32, 0.0));
    let mut carousel = Carousel::init(config, container)
        .context("invalid carousel settings")?;
    let Some(frame) = carousel.geometry() else {
        bail!("a {width} pixel wide snapshot has no drawable frame");
    };
    let height = frame.height.round() as u32;
    if height == 0 {
        bail!("a {width} pixel wide snapshot rounds to zero height");
    }

    let slides = slides::load_directory(images, slides::open_raster)?;
    if slides.is_empty() {
        log::warn!(
            "no slides found in {}, snapshot shows the background only",
            images.display()
        );
    }
    carousel.set_slides(slides);

    if carousel.set_current_slide(slide) {
        // One step of the full duration lands exactly on the target.
        let duration = carousel.config().transition_duration();
        carousel.tick(duration);
    }

    let mut surface = RasterSurface::new(width, height)?;
    carousel.draw(&mut surface);
    carousel.dispose();

    surface.save(output)?;
    log::info!(
        "wrote {width}x{height} snapshot of slide {} to {}",
        carousel.current_slide_in_middle(),
        output.display()
    );
    Ok(())
}
