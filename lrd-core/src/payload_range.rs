//! Inclusive payload mass interval selected with the range slider.

use serde::{Deserialize, Serialize};

/// Slider lower limit (kg).
pub const SLIDER_MIN: f64 = 0.0;
/// Slider upper limit (kg).
pub const SLIDER_MAX: f64 = 10000.0;
/// Slider step and mark spacing (kg).
pub const SLIDER_STEP: f64 = 1000.0;

/// Slider marks, one per step from [`SLIDER_MIN`] to [`SLIDER_MAX`].
pub fn slider_marks() -> Vec<f64> {
    let steps = ((SLIDER_MAX - SLIDER_MIN) / SLIDER_STEP).round() as usize;
    (0..=steps)
        .map(|i| SLIDER_MIN + SLIDER_STEP * i as f64)
        .collect()
}

/// Payload mass interval in kilograms, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> anyhow::Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            anyhow::bail!("payload range bounds must be finite: [{}, {}]", low, high);
        }
        if low > high {
            anyhow::bail!("payload range is inverted: [{}, {}]", low, high);
        }
        Ok(Self { low, high })
    }

    /// The full slider span.
    pub fn slider() -> Self {
        Self {
            low: SLIDER_MIN,
            high: SLIDER_MAX,
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }

    /// Move the lower handle to `value`.
    ///
    /// The handle stays on the slider track and cannot pass the upper bound,
    /// so the result still has `low <= high`.
    pub fn with_low(self, value: f64) -> Self {
        Self {
            low: value.max(SLIDER_MIN).min(self.high),
            high: self.high,
        }
    }

    /// Move the upper handle to `value`, mirroring [`PayloadRange::with_low`].
    pub fn with_high(self, value: f64) -> Self {
        Self {
            low: self.low,
            high: value.min(SLIDER_MAX).max(self.low),
        }
    }

    /// Slider positions `(low, high)` for the two handles.
    ///
    /// The track only has positions every [`SLIDER_STEP`] between
    /// [`SLIDER_MIN`] and [`SLIDER_MAX`], so a bound such as an observed
    /// maximum of 9600 kg sits on the 10000 mark while the range itself
    /// keeps 9600.
    pub fn handle_positions(&self) -> (f64, f64) {
        (snap_to_step(self.low), snap_to_step(self.high))
    }
}

/// Nearest slider position for `value`, clamped to the track.
pub fn snap_to_step(value: f64) -> f64 {
    let steps = ((value - SLIDER_MIN) / SLIDER_STEP).round();
    (SLIDER_MIN + steps * SLIDER_STEP).clamp(SLIDER_MIN, SLIDER_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted() {
        assert!(PayloadRange::new(2000.0, 1000.0).is_err());
        assert!(PayloadRange::new(f64::NAN, 1000.0).is_err());
        assert!(PayloadRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = PayloadRange::new(1000.0, 5000.0).unwrap();
        assert!(range.contains(1000.0));
        assert!(range.contains(5000.0));
        assert!(range.contains(2500.5));
        assert!(!range.contains(999.9));
        assert!(!range.contains(5000.1));
    }

    #[test]
    fn test_degenerate_range() {
        let range = PayloadRange::new(500.0, 500.0).unwrap();
        assert!(range.contains(500.0));
        assert!(!range.contains(499.0));
    }

    #[test]
    fn test_slider_marks() {
        let marks = slider_marks();
        assert_eq!(marks.len(), 11);
        assert_eq!(marks[0], 0.0);
        assert_eq!(marks[1], 1000.0);
        assert_eq!(marks[10], 10000.0);
    }

    #[test]
    fn test_handles_cannot_cross() {
        let range = PayloadRange::new(2000.0, 6000.0).unwrap();

        let low_past_high = range.with_low(8000.0);
        assert_eq!(low_past_high.low(), 6000.0);
        assert_eq!(low_past_high.high(), 6000.0);

        let high_past_low = range.with_high(1000.0);
        assert_eq!(high_past_low.low(), 2000.0);
        assert_eq!(high_past_low.high(), 2000.0);

        let moved = range.with_low(3000.0).with_high(5000.0);
        assert_eq!((moved.low(), moved.high()), (3000.0, 5000.0));
    }

    #[test]
    fn test_handles_stay_on_track() {
        let range = PayloadRange::slider();
        assert_eq!(range.with_low(-500.0).low(), SLIDER_MIN);
        assert_eq!(range.with_high(12000.0).high(), SLIDER_MAX);
    }

    #[test]
    fn test_observed_bounds_outside_track() {
        // Observed payloads can exceed the 10000 kg track
        let range = PayloadRange::new(0.0, 15600.0).unwrap();
        let moved = range.with_low(9000.0);
        assert_eq!((moved.low(), moved.high()), (9000.0, 15600.0));
        assert_eq!(range.with_high(12000.0).high(), SLIDER_MAX);

        let high_only = PayloadRange::new(12000.0, 15000.0).unwrap();
        let pinned = high_only.with_high(3000.0);
        assert_eq!((pinned.low(), pinned.high()), (12000.0, 12000.0));
        assert_eq!(high_only.handle_positions(), (SLIDER_MAX, SLIDER_MAX));
    }

    #[test]
    fn test_equal_handles() {
        let range = PayloadRange::new(4000.0, 4000.0).unwrap();
        let lower = range.with_low(4000.0);
        assert_eq!((lower.low(), lower.high()), (4000.0, 4000.0));
        let raised = range.with_high(7000.0);
        assert_eq!((raised.low(), raised.high()), (4000.0, 7000.0));
        assert_eq!(range.with_low(5000.0).low(), 4000.0);
    }

    #[test]
    fn test_handle_positions_snap_to_marks() {
        let range = PayloadRange::new(0.0, 9600.0).unwrap();
        assert_eq!(range.handle_positions(), (0.0, 10000.0));
        assert_eq!(snap_to_step(1400.0), 1000.0);
        assert_eq!(snap_to_step(1500.0), 2000.0);
        assert_eq!(snap_to_step(-300.0), 0.0);
    }
}
