//! Slide placement and draw-call issuing.
//!
//! Rendering is a pure read of the position state: at most two slides are
//! visible, the current one scrolled out to the left by the blend weight and
//! the next one immediately to its right.

use crate::color::Color;
use crate::geometry::{Rect, Size};
use crate::layout::FrameGeometry;
use crate::position::SlidePosition;

/// Anything with intrinsic pixel dimensions that a surface can draw.
pub trait SlideImage {
    fn dimensions(&self) -> Size;
}

/// 2D drawing context the renderer issues calls against.
pub trait DrawSurface<I: ?Sized> {
    fn clear(&mut self, color: Color);

    fn save(&mut self) {}

    fn restore(&mut self) {}

    fn draw_image(&mut self, image: &I, dest: Rect);
}

/// Where one slide lands in the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index into the slide list.
    pub index: usize,
    /// Destination in frame pixels, possibly overhanging the frame.
    pub dest: Rect,
}

/// The 1-2 slides visible for a given position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePlan {
    /// The slide at the current index, shifted left by the blend.
    pub current: Option<Placement>,
    /// The next slide entering from the right, `None` when settled.
    pub incoming: Option<Placement>,
}

impl FramePlan {
    /// The placed slides, current before incoming.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.current.iter().chain(self.incoming.iter())
    }
}

/// Uniform scale that makes `image` cover `frame` entirely.
///
/// Returns `None` for images without a usable size.
pub fn fill_scale(image: Size, frame: Size) -> Option<f32> {
    image
        .is_drawable()
        .then(|| (frame.width / image.width).max(frame.height / image.height))
}

/// Fill-scaled, vertically centered rectangle starting at `x`.
pub fn slide_rect(image: Size, frame: FrameGeometry, x: f32) -> Option<Rect> {
    let scale = fill_scale(image, frame.size())?;
    let width = image.width * scale;
    let height = image.height * scale;
    Some(Rect::new(x, frame.height / 2.0 - height / 2.0, width, height))
}

/// Computes the visible slides. `None` when there is nothing to draw.
pub fn plan_frame<I: SlideImage>(
    position: &SlidePosition,
    frame: FrameGeometry,
    slides: &[I],
) -> Option<FramePlan> {
    if slides.is_empty() {
        return None;
    }

    let current_index = position.current_index();
    let offset = position.blend() * -frame.width;
    let place = |index: usize, x: f32| {
        let image = slides.get(index)?;
        slide_rect(image.dimensions(), frame, x)
            .map(|dest| Placement { index, dest })
    };

    let current = place(current_index, offset);
    let incoming = if position.is_settled() {
        None
    } else {
        place((current_index + 1) % slides.len(), offset + frame.width)
    };

    Some(FramePlan { current, incoming })
}

/// Clears to `background` and draws the visible slides.
pub fn render<I, S>(
    surface: &mut S,
    background: Color,
    frame: Option<FrameGeometry>,
    position: &SlidePosition,
    slides: &[I],
) where
    I: SlideImage,
    S: DrawSurface<I> + ?Sized,
{
    surface.clear(background);

    let Some(frame) = frame else {
        return;
    };
    let Some(plan) = plan_frame(position, frame, slides) else {
        return;
    };

    for placement in plan.iter() {
        surface.save();
        surface.draw_image(&slides[placement.index], placement.dest);
        surface.restore();
    }
}
