// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge-triggered scroll-offset thresholds.
//!
//! Two behaviors hang off a plain "is the page scrolled past N pixels?"
//! test: the navbar compact state (80 px) and the reservation button
//! (400 px). [`ThresholdToggle`] tracks which side of the threshold the last
//! observed offset was on and reports only *crossings*, so consumers apply
//! their class or style writes exactly once per transition instead of on
//! every scroll event.

/// Scroll offset above which the navbar enters its compact "scrolled" state.
pub const NAVBAR_THRESHOLD: f64 = 80.0;

/// Scroll offset above which the reservation button becomes visible.
pub const FAB_THRESHOLD: f64 = 400.0;

/// An edge-triggered scroll-offset threshold.
///
/// [`update`](Self::update) returns `Some(engaged)` on the first observation
/// and whenever the offset crosses the threshold, `None` otherwise. The
/// threshold test is strict: an offset exactly at the threshold counts as
/// not engaged.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdToggle {
    threshold: f64,
    engaged: Option<bool>,
}

impl ThresholdToggle {
    /// Creates a toggle that has not yet observed an offset.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            engaged: None,
        }
    }

    /// Observes a scroll offset.
    ///
    /// Returns `Some(true)` when the offset first exceeds the threshold,
    /// `Some(false)` when it first falls back to (or below) it, and on the
    /// very first call. Returns `None` while the state is unchanged.
    pub fn update(&mut self, offset: f64) -> Option<bool> {
        let engaged = offset > self.threshold;
        if self.engaged == Some(engaged) {
            return None;
        }
        self.engaged = Some(engaged);
        Some(engaged)
    }

    /// Returns the state as of the last observation, if any.
    #[must_use]
    pub fn engaged(&self) -> Option<bool> {
        self.engaged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_always_reports() {
        let mut t = ThresholdToggle::new(NAVBAR_THRESHOLD);
        assert_eq!(t.update(0.0), Some(false));

        let mut t = ThresholdToggle::new(NAVBAR_THRESHOLD);
        assert_eq!(t.update(200.0), Some(true));
    }

    #[test]
    fn threshold_is_strict() {
        let mut t = ThresholdToggle::new(80.0);
        assert_eq!(t.update(80.0), Some(false));
        assert_eq!(t.update(80.1), Some(true));
    }

    #[test]
    fn reports_each_crossing_exactly_once() {
        let mut t = ThresholdToggle::new(FAB_THRESHOLD);
        // Scroll 0 → 500 in steps: exactly one engagement, at the crossing.
        let mut reports = 0;
        for offset in [0.0, 100.0, 300.0, 399.9, 401.0, 450.0, 500.0] {
            if t.update(offset) == Some(true) {
                reports += 1;
            }
        }
        assert_eq!(reports, 1);
        assert_eq!(t.engaged(), Some(true));

        // Back below: one disengagement.
        assert_eq!(t.update(390.0), Some(false));
        assert_eq!(t.update(10.0), None);
    }

    #[test]
    fn steady_offsets_report_nothing() {
        let mut t = ThresholdToggle::new(80.0);
        t.update(100.0);
        assert_eq!(t.update(120.0), None);
        assert_eq!(t.update(100.0), None);
    }
}
