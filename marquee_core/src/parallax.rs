// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gallery-strip parallax drift.
//!
//! As the gallery strip scrolls through the viewport, its images drift
//! vertically around a fixed up-scale, producing a subtle depth effect. The
//! drift is a function of how far the strip has progressed through the
//! viewport: 0 when its top edge is at the viewport bottom, approaching 1 as
//! its bottom edge leaves the top.
//!
//! The strip rectangle is in *viewport* coordinates (a
//! `getBoundingClientRect` result), expressed as a [`kurbo::Rect`] with
//! `y0` = top and `y1` = bottom.

use kurbo::Rect;

/// Fixed up-scale applied to every strip image.
pub const SCALE: f64 = 1.08;

/// Total vertical drift range in pixels, applied around the midpoint.
const DRIFT_RANGE: f64 = -20.0;

/// Computes the vertical drift for a strip at `strip` within a viewport of
/// `viewport_height` pixels.
///
/// Returns `None` when the strip is entirely off-screen (bottom above the
/// viewport top, or top below the viewport bottom) so callers can skip the
/// per-image style writes. On-screen, the drift is
/// `(ratio − 0.5) × −20` where
/// `ratio = (viewport_height − top) / (viewport_height + height)`.
#[must_use]
pub fn drift(strip: Rect, viewport_height: f64) -> Option<f64> {
    if strip.y1 < 0.0 || strip.y0 > viewport_height {
        return None;
    }
    let ratio = (viewport_height - strip.y0) / (viewport_height + strip.height());
    Some((ratio - 0.5) * DRIFT_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(top: f64, height: f64) -> Rect {
        Rect::new(0.0, top, 800.0, top + height)
    }

    #[test]
    fn off_screen_skips_recompute() {
        // Bottom above the viewport top.
        assert_eq!(drift(strip(-500.0, 300.0), 900.0), None);
        // Top below the viewport bottom.
        assert_eq!(drift(strip(1000.0, 300.0), 900.0), None);
    }

    #[test]
    fn centered_strip_has_no_drift() {
        // ratio = 0.5 when the strip's progression is exactly halfway:
        // (vh − top) = (vh + h) / 2.
        let vh = 900.0;
        let h = 300.0;
        let top = vh - (vh + h) / 2.0;
        let d = drift(strip(top, h), vh).expect("on-screen");
        assert!(d.abs() < 1e-9, "drift at midpoint was {d}");
    }

    #[test]
    fn drift_decreases_as_strip_rises() {
        // Negative range: the images drift up as the strip scrolls up.
        let vh = 900.0;
        let h = 300.0;
        let low = drift(strip(800.0, h), vh).expect("on-screen");
        let high = drift(strip(100.0, h), vh).expect("on-screen");
        assert!(high < low, "expected {high} < {low}");
    }

    #[test]
    fn drift_is_bounded_by_half_range() {
        let vh = 900.0;
        let h = 300.0;
        for top in [-299.0, -150.0, 0.0, 300.0, 600.0, 899.0] {
            let d = drift(strip(top, h), vh).expect("on-screen");
            assert!(d.abs() <= 10.0 + 1e-9, "drift {d} out of range at {top}");
        }
    }

    #[test]
    fn edges_are_inclusive() {
        // A strip touching either viewport edge still computes.
        assert!(drift(strip(900.0, 300.0), 900.0).is_some());
        assert!(drift(strip(-300.0, 300.0), 900.0).is_some());
    }
}
