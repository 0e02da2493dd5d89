// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth-scroll target math.
//!
//! In-page anchor clicks scroll to the target section's document position,
//! pulled up by the fixed navbar's rendered height so the section heading
//! isn't hidden underneath it. Pages without a navbar use a fixed fallback.

/// Offset used when the page has no navbar to measure.
pub const FALLBACK_OFFSET: f64 = 80.0;

/// Computes the document scroll position for an anchor target.
///
/// `viewport_top` is the target's `getBoundingClientRect().top`, `scroll_y`
/// the current scroll offset, and `navbar_height` the navbar's rendered
/// height when one exists.
#[must_use]
pub fn scroll_target(viewport_top: f64, scroll_y: f64, navbar_height: Option<f64>) -> f64 {
    let offset = navbar_height.unwrap_or(FALLBACK_OFFSET);
    viewport_top + scroll_y - offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_navbar_height() {
        assert_eq!(scroll_target(500.0, 1000.0, Some(64.0)), 1436.0);
    }

    #[test]
    fn missing_navbar_uses_fallback() {
        assert_eq!(scroll_target(500.0, 1000.0, None), 1420.0);
    }

    #[test]
    fn target_above_viewport() {
        // Scrolling up to an earlier section: negative viewport top.
        assert_eq!(scroll_target(-300.0, 2000.0, Some(80.0)), 1620.0);
    }
}
