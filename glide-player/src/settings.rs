//! Player settings: an optional TOML file, then environment overrides, then
//! command-line flags.

use std::fs;
use std::path::Path;

use anyhow::Context;
use glide_core::{CarouselConfig, Color};
use serde::{Deserialize, Serialize};

use crate::cli::Args;

pub const SLIDE_INTERVAL_VAR: &str = "GLIDE_SLIDE_INTERVAL";
pub const BACKGROUND_VAR: &str = "GLIDE_BACKGROUND";

/// Initial window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 640.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub carousel: CarouselConfig,
}

impl Settings {
    /// Builds the effective settings for a run and validates them.
    pub fn resolve(args: &Args) -> anyhow::Result<Self> {
        let mut settings = match args.config.as_deref() {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        settings.apply_env(|key| std::env::var(key).ok());
        settings.apply_args(args);
        settings
            .carousel
            .validate()
            .context("invalid carousel settings")?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| {
            format!("failed to read settings from {}", path.display())
        })?;
        Self::parse(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Applies `GLIDE_*` overrides. Malformed values are logged and skipped.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(SLIDE_INTERVAL_VAR) {
            match raw.trim().parse::<f32>() {
                Ok(seconds) => self.carousel.slide_interval_secs = seconds,
                Err(err) => {
                    log::warn!("ignoring {SLIDE_INTERVAL_VAR}={raw:?}: {err}")
                }
            }
        }

        if let Some(raw) = lookup(BACKGROUND_VAR) {
            match Color::from_hex(raw.trim()) {
                Ok(color) => self.carousel.background = color,
                Err(err) => log::warn!("ignoring {BACKGROUND_VAR}: {err}"),
            }
        }
    }

    pub fn apply_args(&mut self, args: &Args) {
        if let Some(seconds) = args.interval {
            self.carousel.slide_interval_secs = seconds;
        }
        if let Some(ratio) = args.aspect {
            self.carousel.aspect_ratio = ratio;
        }
        if let Some(color) = args.background {
            self.carousel.background = color;
        }
    }
}
