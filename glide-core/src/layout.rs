//! Frame geometry derived from the host container.

use crate::geometry::Size;

/// Pixel size of the slide frame: the container width by
/// `width * height_to_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    pub width: f32,
    pub height: f32,
}

impl FrameGeometry {
    /// Returns `None` when there is no usable container width, in which case
    /// the caller keeps whatever geometry it had.
    pub fn from_container(
        container: Option<Size>,
        height_to_width: f32,
    ) -> Option<Self> {
        let width = container?.width;
        let height = width * height_to_width;
        let size = Size::new(width, height);
        size.is_drawable().then_some(Self { width, height })
    }

    /// The frame as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
