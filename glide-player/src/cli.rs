use std::path::PathBuf;

use clap::Parser;
use glide_core::Color;

#[derive(Debug, Clone, Parser)]
#[command(name = "glide", version, about = "Image carousel slideshow")]
pub struct Args {
    /// Directory of images to cycle through
    pub images: PathBuf,

    /// TOML settings file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seconds between autoplay advances
    #[arg(long, value_name = "SECONDS")]
    pub interval: Option<f32>,

    /// Frame height as a fraction of its width
    #[arg(long, value_name = "RATIO")]
    pub aspect: Option<f32>,

    /// Background colour as #rrggbb
    #[arg(long, value_name = "HEX")]
    pub background: Option<Color>,

    /// Render one frame to this image file instead of opening a window
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Snapshot width in pixels
    #[arg(long, default_value_t = 800, requires = "snapshot")]
    pub width: u32,

    /// Slide shown in the snapshot
    #[arg(
        long,
        default_value_t = 0,
        requires = "snapshot",
        allow_negative_numbers = true
    )]
    pub slide: isize,
}
