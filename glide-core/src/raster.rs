//! Headless [`DrawSurface`] backed by an RGBA pixel buffer.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

use crate::color::Color;
use crate::error::RasterError;
use crate::geometry::{Rect, Size};
use crate::render::{DrawSurface, SlideImage};

/// Decoded slide pixels.
#[derive(Debug, Clone)]
pub struct RasterSlide {
    pixels: RgbaImage,
}

impl RasterSlide {
    /// Decodes the file at `path`, reporting the path on failure.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RasterError> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| RasterError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_image(decoded))
    }

    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            pixels: image.to_rgba8(),
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl SlideImage for RasterSlide {
    fn dimensions(&self) -> Size {
        Size::new(self.pixels.width() as f32, self.pixels.height() as f32)
    }
}

/// Software frame the carousel can be rendered into.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    canvas: RgbaImage,
    filter: FilterType,
}

impl RasterSurface {
    /// A transparent canvas, refused when either side is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptySurface { width, height });
        }
        Ok(Self {
            canvas: RgbaImage::new(width, height),
            filter: FilterType::Triangle,
        })
    }

    /// Resampling filter used when scaling slides.
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// Reallocates the pixel buffer. Contents are discarded.
    pub fn resize(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<(), RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptySurface { width, height });
        }
        self.canvas = RgbaImage::new(width, height);
        Ok(())
    }

    pub fn size(&self) -> Size {
        Size::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Gives up the finished frame.
    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    /// Encodes the frame; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        let path = path.as_ref();
        self.canvas.save(path).map_err(|source| RasterError::Encode {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl DrawSurface<RasterSlide> for RasterSurface {
    fn clear(&mut self, color: Color) {
        let fill = Rgba(color.to_rgba8());
        for pixel in self.canvas.pixels_mut() {
            *pixel = fill;
        }
    }

    fn draw_image(&mut self, image: &RasterSlide, dest: Rect) {
        let (source_width, source_height) = image.pixels.dimensions();
        if source_width == 0
            || source_height == 0
            || !(dest.width >= 1.0 && dest.height >= 1.0)
        {
            return;
        }

        // Only the part of `dest` inside the canvas is ever resampled.
        let left = dest.x.round().max(0.0);
        let top = dest.y.round().max(0.0);
        let right = (dest.x + dest.width)
            .round()
            .min(self.canvas.width() as f32);
        let bottom = (dest.y + dest.height)
            .round()
            .min(self.canvas.height() as f32);
        if !(right - left >= 1.0 && bottom - top >= 1.0) {
            return;
        }

        let (x, width) = source_span(
            left - dest.x,
            right - dest.x,
            source_width as f32 / dest.width,
            source_width,
        );
        let (y, height) = source_span(
            top - dest.y,
            bottom - dest.y,
            source_height as f32 / dest.height,
            source_height,
        );
        let region =
            imageops::crop_imm(&image.pixels, x, y, width, height).to_image();

        let scaled = imageops::resize(
            &region,
            (right - left) as u32,
            (bottom - top) as u32,
            self.filter,
        );
        imageops::overlay(&mut self.canvas, &scaled, left as i64, top as i64);
    }
}

/// Source pixels covering the destination span `start..end`, widened to whole
/// pixels and kept inside `0..limit`. Returns `(offset, length)`.
fn source_span(start: f32, end: f32, scale: f32, limit: u32) -> (u32, u32) {
    let first = ((start * scale).floor().max(0.0) as u32).min(limit - 1);
    let last = ((end * scale).ceil() as u32).clamp(first + 1, limit);
    (first, last - first)
}
