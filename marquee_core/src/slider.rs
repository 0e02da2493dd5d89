// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hero-slider index arithmetic.
//!
//! [`Slider`] tracks the single active slide index and produces a
//! [`SlideChange`] for every navigation: which slide/dot pair to deactivate
//! and which to activate. Indices wrap modulo the slide count, including for
//! negative inputs, so "previous" from slide 0 lands on the last slide.
//!
//! Timing (the auto-advance interval and its phase reset on manual
//! navigation) is owned by the web layer; this module is pure arithmetic.

/// Milliseconds between auto-advance steps.
pub const ADVANCE_INTERVAL_MS: i32 = 5500;

/// Deactivate/activate pair produced by one navigation.
///
/// `deactivate` and `activate` are equal when a navigation lands on the
/// already-active slide (e.g. clicking the current dot); applying it is then
/// a harmless re-activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlideChange {
    /// Index of the previously active slide and dot.
    pub deactivate: usize,
    /// Index of the newly active slide and dot.
    pub activate: usize,
}

/// The active-slide tracker.
#[derive(Clone, Copy, Debug)]
pub struct Slider {
    current: usize,
    count: usize,
}

impl Slider {
    /// Creates a slider over `count` slides with slide 0 active.
    ///
    /// Returns `None` for zero slides; the behavior is absent on pages
    /// without a hero.
    #[must_use]
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self { current: 0, count })
    }

    /// The currently active slide index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// The slide count.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Navigates to `index`, wrapping modulo the slide count.
    ///
    /// Accepts any integer; `-1` is the last slide, `count` is slide 0.
    pub fn go_to(&mut self, index: isize) -> SlideChange {
        #[expect(
            clippy::cast_possible_wrap,
            reason = "slide counts are tiny; a DOM can't hold isize::MAX slides"
        )]
        let count = self.count as isize;
        #[expect(
            clippy::cast_sign_loss,
            reason = "rem_euclid of a positive count is non-negative"
        )]
        let next = index.rem_euclid(count) as usize;
        let change = SlideChange {
            deactivate: self.current,
            activate: next,
        };
        self.current = next;
        change
    }

    /// Advances to the next slide, wrapping to 0 after the last.
    pub fn advance(&mut self) -> SlideChange {
        #[expect(
            clippy::cast_possible_wrap,
            reason = "slide counts are tiny; a DOM can't hold isize::MAX slides"
        )]
        let current = self.current as isize;
        self.go_to(current + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_slides_is_absent() {
        assert!(Slider::new(0).is_none());
    }

    #[test]
    fn go_to_wraps_like_euclidean_mod() {
        let mut s = Slider::new(4).expect("nonzero count");
        for i in -9_isize..9 {
            let change = s.go_to(i);
            let expected = i.rem_euclid(4) as usize;
            assert_eq!(change.activate, expected, "go_to({i})");
            assert_eq!(s.current(), expected);
        }
    }

    #[test]
    fn change_pairs_chain() {
        // Each change deactivates exactly the slide the previous one
        // activated, so applying them in order leaves one active pair.
        let mut s = Slider::new(3).expect("nonzero count");
        let mut previous = 0;
        for i in [2_isize, 1, -1, 5] {
            let change = s.go_to(i);
            assert_eq!(change.deactivate, previous);
            previous = change.activate;
        }
    }

    #[test]
    fn advance_steps_forward_and_wraps() {
        let mut s = Slider::new(3).expect("nonzero count");
        assert_eq!(
            s.advance(),
            SlideChange {
                deactivate: 0,
                activate: 1
            }
        );
        assert_eq!(s.advance().activate, 2);
        assert_eq!(s.advance().activate, 0);
    }

    #[test]
    fn single_slide_advance_is_self() {
        let mut s = Slider::new(1).expect("nonzero count");
        let change = s.advance();
        assert_eq!(change.deactivate, 0);
        assert_eq!(change.activate, 0);
    }
}
