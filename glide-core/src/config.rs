//! Carousel configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! overrides. Call [`CarouselConfig::validate`] before handing a config that
//! came from outside the program to [`crate::Carousel::init`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::easing::Easing;
use crate::error::ConfigError;
use crate::gesture::GestureThresholds;

/// Default height-to-width ratio of the frame (16:9 landscape).
pub const DEFAULT_ASPECT_RATIO: f32 = 9.0 / 16.0;
/// Default time a slide rests before autoplay moves on.
pub const DEFAULT_SLIDE_INTERVAL_SECS: f32 = 1.0;
/// Default length of every programmatic transition.
pub const DEFAULT_TRANSITION_SECS: f32 = 1.0;
/// Default single-move distance that commits a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 20.0;
/// Default travel from origin that resolves the touch axis lock.
pub const DEFAULT_AXIS_LOCK_THRESHOLD: f32 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Frame height divided by frame width.
    pub aspect_ratio: f32,
    /// Seconds a slide rests before autoplay advances.
    pub slide_interval_secs: f32,
    /// Colour the frame is cleared to.
    pub background: Color,
    /// Seconds per transition.
    pub transition_secs: f32,
    /// Device units a single move must cover to commit a swipe.
    pub swipe_threshold: f32,
    /// Device units of travel that resolve the touch axis lock.
    pub axis_lock_threshold: f32,
    /// Curve for user-triggered snaps and explicit slide selection.
    pub snap_easing: Easing,
    /// Curve for autoplay advances.
    pub autoplay_easing: Easing,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            slide_interval_secs: DEFAULT_SLIDE_INTERVAL_SECS,
            background: Color::BLACK,
            transition_secs: DEFAULT_TRANSITION_SECS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            axis_lock_threshold: DEFAULT_AXIS_LOCK_THRESHOLD,
            snap_easing: Easing::EaseOutExpo,
            autoplay_easing: Easing::EaseInOutSine,
        }
    }
}

impl CarouselConfig {
    /// Defaults for everything but the frame's width over height.
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            ..Self::default()
        }
    }

    pub fn with_slide_interval(mut self, seconds: f32) -> Self {
        self.slide_interval_secs = seconds;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_transition(mut self, seconds: f32) -> Self {
        self.transition_secs = seconds;
        self
    }

    /// Rejects non-finite or non-positive ratios and durations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(ConfigError::InvalidAspectRatio(self.aspect_ratio));
        }
        let interval = self.slide_interval_secs;
        if !(interval.is_finite() && interval > 0.0) {
            return Err(ConfigError::InvalidDuration {
                field: "slide_interval_secs",
                value: self.slide_interval_secs,
            });
        }
        if !(self.transition_secs.is_finite() && self.transition_secs >= 0.0) {
            return Err(ConfigError::InvalidDuration {
                field: "transition_secs",
                value: self.transition_secs,
            });
        }
        for (field, value) in [
            ("swipe_threshold", self.swipe_threshold),
            ("axis_lock_threshold", self.axis_lock_threshold),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidThreshold { field, value });
            }
        }
        Ok(())
    }

    pub fn slide_interval(&self) -> Duration {
        Duration::try_from_secs_f32(self.slide_interval_secs)
            .unwrap_or_default()
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.transition_secs).unwrap_or_default()
    }

    /// Drag and swipe thresholds handed to the gesture recognizer.
    pub fn gesture_thresholds(&self) -> GestureThresholds {
        GestureThresholds {
            swipe: self.swipe_threshold,
            axis_lock: self.axis_lock_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CarouselConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.slide_interval(), Duration::from_secs(1));
        assert_eq!(config.transition_duration(), Duration::from_secs(1));
        assert_eq!(config.gesture_thresholds(), GestureThresholds::default());
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config: CarouselConfig = toml::from_str(
            r##"
            aspect_ratio = 0.75
            background = "#102030"
            autoplay_easing = "linear"
            "##,
        )
        .unwrap();

        assert_eq!(config.aspect_ratio, 0.75);
        assert_eq!(config.background, Color::from_rgb8(0x10, 0x20, 0x30));
        assert_eq!(config.autoplay_easing, Easing::Linear);
        assert_eq!(config.snap_easing, Easing::EaseOutExpo);
        assert_eq!(config.slide_interval_secs, DEFAULT_SLIDE_INTERVAL_SECS);
    }

    #[test]
    fn bad_colour_fails_deserialization() {
        let parsed: Result<CarouselConfig, _> =
            toml::from_str(r##"background = "teal""##);
        assert!(parsed.is_err());
    }

    #[test]
    fn validation_rejects_out_of_range_values() {
        assert_eq!(
            CarouselConfig::new(0.0).validate(),
            Err(ConfigError::InvalidAspectRatio(0.0))
        );
        assert!(matches!(
            CarouselConfig::default().with_slide_interval(0.0).validate(),
            Err(ConfigError::InvalidDuration {
                field: "slide_interval_secs",
                ..
            })
        ));
        assert!(matches!(
            CarouselConfig::default().with_transition(f32::NAN).validate(),
            Err(ConfigError::InvalidDuration {
                field: "transition_secs",
                ..
            })
        ));
        let config = CarouselConfig {
            swipe_threshold: -1.0,
            ..CarouselConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold {
                field: "swipe_threshold",
                ..
            })
        ));
    }
}
