//! Easing curves applied to a linear `0..=1` timer.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// `a + (b - a) * t`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Progress-remapping curve chosen per transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// Fast settle used for user-triggered snaps.
    #[default]
    EaseOutExpo,
    EaseOutCubic,
    /// Gentle acceleration and braking used by autoplay.
    EaseInOutSine,
    EaseInOutCubic,
}

impl Easing {
    /// Apply the curve to a progress value. Input is clamped to `0..=1` and
    /// every curve maps `0 -> 0` and `1 -> 1` exactly.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutSine => {
                if t >= 1.0 {
                    1.0
                } else {
                    -((PI * t).cos() - 1.0) / 2.0
                }
            }
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    pub const ALL: [Self; 5] = [
        Self::Linear,
        Self::EaseOutExpo,
        Self::EaseOutCubic,
        Self::EaseInOutSine,
        Self::EaseInOutCubic,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_both_endpoints() {
        for easing in Easing::ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
            assert_eq!(easing.apply(7.0), 1.0, "{easing:?} clamps high");
            assert!(easing.apply(-3.0).abs() < 1e-6, "{easing:?} clamps low");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in Easing::ALL {
            let mut previous = 0.0;
            for step in 1..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!(value + 1e-6 >= previous, "{easing:?} at step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn ease_out_front_loads_and_sine_is_symmetric() {
        assert!(Easing::EaseOutExpo.apply(0.25) > 0.8);
        assert!((Easing::EaseInOutSine.apply(0.5) - 0.5).abs() < 1e-6);
        assert!(Easing::EaseInOutSine.apply(0.1) < 0.1);
    }

    #[test]
    fn lerp_extrapolates_linearly() {
        assert_eq!(lerp(0.0, -0.25, 1.0), -0.25);
        assert_eq!(lerp(0.5, 1.0, 0.5), 0.75);
    }
}
