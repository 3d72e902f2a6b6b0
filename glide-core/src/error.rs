//! Error types for the fallible edges of the carousel.
//!
//! Runtime operations on [`crate::Carousel`] never fail; they degrade to
//! no-ops behind guard conditions. Only configuration and asset loading can
//! produce errors.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected carousel configuration
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid colour {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("aspect ratio must be a positive finite number, got {0}")]
    InvalidAspectRatio(f32),

    #[error("{field} must be a finite number of seconds, got {value}")]
    InvalidDuration { field: &'static str, value: f32 },

    #[error("{field} must be a positive finite distance, got {value}")]
    InvalidThreshold { field: &'static str, value: f32 },
}

/// Failures of the headless raster surface
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to decode slide {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write frame to {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("surface size {width}x{height} is not drawable")]
    EmptySurface { width: u32, height: u32 },
}
