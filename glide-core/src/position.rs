//! Normalized scroll coordinate and the slide indices derived from it.

/// Wraps `x` into `[0, 1)`. Values are cyclic across slide boundaries, so
/// `-0.25` becomes `0.75` rather than being clamped to `0`.
pub fn wrap_unit(x: f32) -> f32 {
    let wrapped = x - x.floor();
    // `x - floor(x)` rounds up to exactly 1.0 for tiny negative inputs.
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Distance, in slides, within which a position counts as resting exactly on
/// a slide. `k as f32 / n as f32 * n as f32` can land just below `k`, which
/// would otherwise put the strip one slide behind its target.
pub const SNAP_EPSILON: f32 = 1e-4;

/// Single source of truth for where the strip is scrolled to.
///
/// `normalized_x` is measured in whole-strip widths, `0.0` meaning slide 0 is
/// centered in the frame. Everything else is derived on each write.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlidePosition {
    normalized_x: f32,
    slides_scrolled: f32,
    current_index: usize,
    middle_index: usize,
}

impl SlidePosition {
    /// Slide 0 centered in the frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a new position for a strip of `slide_count` slides.
    ///
    /// Returns `false` and leaves every field untouched when there are no
    /// slides or `x` is not finite.
    pub fn set(&mut self, x: f32, slide_count: usize) -> bool {
        if slide_count == 0 {
            return false;
        }
        if !x.is_finite() {
            log::warn!("ignoring non-finite slide position {x}");
            return false;
        }

        let count = slide_count as f32;
        let mut normalized_x = wrap_unit(x);
        let mut slides_scrolled = normalized_x * count;

        let nearest = slides_scrolled.round();
        if (slides_scrolled - nearest).abs() < SNAP_EPSILON {
            let index = nearest as usize % slide_count;
            slides_scrolled = index as f32;
            normalized_x = slides_scrolled / count;
        }

        self.normalized_x = normalized_x;
        self.slides_scrolled = slides_scrolled;

        let floor = self.slides_scrolled.floor();
        self.current_index = (floor as usize).min(slide_count - 1);
        let rounds_up = self.slides_scrolled - floor >= 0.5;
        self.middle_index =
            (self.current_index + usize::from(rounds_up)) % slide_count;
        true
    }

    /// Scroll offset in whole-strip widths, always in `[0, 1)`.
    pub fn normalized_x(&self) -> f32 {
        self.normalized_x
    }

    /// `normalized_x * slide_count`.
    pub fn slides_scrolled(&self) -> f32 {
        self.slides_scrolled
    }

    /// Slide at the left edge of the frame, the floor of
    /// [`Self::slides_scrolled`].
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Slide considered selected: the nearest one to the frame.
    pub fn middle_index(&self) -> usize {
        self.middle_index
    }

    /// Fraction of the way from the current slide towards the next one.
    pub fn blend(&self) -> f32 {
        self.slides_scrolled - self.current_index as f32
    }

    /// True when a slide sits exactly in the frame.
    pub fn is_settled(&self) -> bool {
        self.slides_scrolled == self.current_index as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn wraps_negative_values_around() {
        assert_eq!(wrap_unit(-0.25), 0.75);
        assert_eq!(wrap_unit(1.25), 0.25);
        assert_eq!(wrap_unit(3.0), 0.0);
        assert_eq!(wrap_unit(-1e-12), 0.0);
    }

    #[test]
    fn normalization_sweep_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut position = SlidePosition::new();
        for _ in 0..10_000 {
            let x: f32 = rng.random_range(-50.0..50.0);
            assert!(position.set(x, 7));
            let stored = position.normalized_x();
            assert!((0.0..1.0).contains(&stored), "{x} -> {stored}");
            let expected = x.rem_euclid(1.0);
            let diff = (stored - expected).abs();
            assert!(diff < 1e-4 || (1.0 - diff) < 1e-4, "{x} -> {stored}");
        }
    }

    #[test]
    fn middle_index_rounds_to_nearest_slide() {
        let mut position = SlidePosition::new();
        position.set(0.2, 4);
        assert_eq!(position.current_index(), 0);
        assert_eq!(position.middle_index(), 1);

        position.set(0.1, 4);
        assert_eq!(position.middle_index(), 0);

        // Past the last slide the middle wraps back to the first.
        position.set(0.9, 4);
        assert_eq!(position.current_index(), 3);
        assert_eq!(position.middle_index(), 0);
    }

    #[test]
    fn middle_index_matches_formula_for_random_positions() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut position = SlidePosition::new();
        for _ in 0..5_000 {
            let n = rng.random_range(1..12usize);
            let x: f32 = rng.random_range(0.0..1.0);
            position.set(x, n);

            let scrolled = position.slides_scrolled();
            let floor = scrolled.floor();
            let expected = ((floor as usize).min(n - 1)
                + usize::from(scrolled - floor >= 0.5))
                % n;
            assert_eq!(position.middle_index(), expected, "x={x} n={n}");
        }
    }

    #[test]
    fn empty_strip_leaves_state_untouched() {
        let mut position = SlidePosition::new();
        position.set(0.5, 2);
        let before = position;

        assert!(!position.set(0.3, 0));
        assert!(!position.set(f32::NAN, 2));
        assert!(!position.set(f32::INFINITY, 2));
        assert_eq!(position, before);
    }

    #[test]
    fn slide_fractions_land_on_their_slide() {
        let mut position = SlidePosition::new();
        for n in 1..=64usize {
            for k in 0..n {
                position.set(k as f32 / n as f32, n);
                assert_eq!(position.current_index(), k, "n={n} k={k}");
                assert_eq!(position.middle_index(), k, "n={n} k={k}");
                assert!(position.is_settled(), "n={n} k={k}");
            }
        }
    }

    #[test]
    fn near_boundary_positions_snap_to_the_slide() {
        let mut position = SlidePosition::new();
        position.set(0.59090906, 22);
        assert_eq!(position.current_index(), 13);
        assert_eq!(position.blend(), 0.0);

        // Just short of a full turn wraps to the first slide.
        position.set(0.99999994, 5);
        assert_eq!(position.current_index(), 0);
        assert_eq!(position.normalized_x(), 0.0);
    }

    #[test]
    fn settled_only_on_exact_slide_boundary() {
        let mut position = SlidePosition::new();
        position.set(0.5, 4);
        assert!(position.is_settled());
        assert_eq!(position.blend(), 0.0);

        position.set(0.55, 4);
        assert!(!position.is_settled());
        assert!((position.blend() - 0.2).abs() < 1e-5);
    }
}
