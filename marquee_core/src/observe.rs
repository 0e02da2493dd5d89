// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot intersection effects.
//!
//! Two behaviors react to elements entering the viewport and must fire at
//! most once per element: the fade-in reveal (adds a `visible` class and
//! never re-hides) and the lazy image loader (copies `data-src` into `src`).
//! [`OneShotSet`] provides the at-most-once guarantee independently of the
//! browser observer, which can deliver a second entry for a target before an
//! `unobserve` call takes effect.
//!
//! [`RevealConfig`] and [`LazyConfig`] bundle the observer tuning so the web
//! layer and tests agree on the numbers.

use alloc::vec;
use alloc::vec::Vec;

/// Observer tuning for the scroll-triggered reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible before it reveals.
    pub threshold: f64,
    /// Bottom root-margin shrink in pixels (negative pulls the trigger line
    /// up from the viewport bottom).
    pub bottom_margin: f64,
}

impl RevealConfig {
    /// The page defaults: 12% visibility, 40 px bottom shrink.
    #[must_use]
    pub const fn page() -> Self {
        Self {
            threshold: 0.12,
            bottom_margin: -40.0,
        }
    }
}

/// Observer tuning for the lazy image loader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LazyConfig {
    /// Root-margin expansion in pixels: images start loading this far
    /// before they reach the viewport.
    pub margin: f64,
}

impl LazyConfig {
    /// The page default: load 200 px ahead.
    #[must_use]
    pub const fn page() -> Self {
        Self { margin: 200.0 }
    }
}

/// At-most-once marking over a fixed set of observed targets.
#[derive(Clone, Debug)]
pub struct OneShotSet {
    fired: Vec<bool>,
}

impl OneShotSet {
    /// Creates a set for `len` targets, none fired.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            fired: vec![false; len],
        }
    }

    /// Marks `index` as fired.
    ///
    /// Returns `true` only the first time; repeat marks and out-of-range
    /// indices return `false`.
    pub fn mark(&mut self, index: usize) -> bool {
        match self.fired.get_mut(index) {
            Some(fired) if !*fired => {
                *fired = true;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` once every target has fired; the owning observer can
    /// then disconnect entirely.
    #[must_use]
    pub fn exhausted(&self) -> bool {
        self.fired.iter().all(|&f| f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_each_target_once() {
        let mut set = OneShotSet::new(3);
        assert!(set.mark(1));
        // A duplicate delivery for the same target is swallowed.
        assert!(!set.mark(1));
        assert!(set.mark(0));
        assert!(!set.mark(0));
    }

    #[test]
    fn out_of_range_never_fires() {
        let mut set = OneShotSet::new(2);
        assert!(!set.mark(2));
        assert!(!set.mark(usize::MAX));
    }

    #[test]
    fn exhausted_after_all_targets_fire() {
        let mut set = OneShotSet::new(2);
        assert!(!set.exhausted());
        set.mark(0);
        assert!(!set.exhausted());
        set.mark(1);
        assert!(set.exhausted());
    }

    #[test]
    fn empty_set_is_exhausted() {
        assert!(OneShotSet::new(0).exhausted());
    }

    #[test]
    fn page_defaults() {
        let reveal = RevealConfig::page();
        assert_eq!(reveal.threshold, 0.12);
        assert_eq!(reveal.bottom_margin, -40.0);
        assert_eq!(LazyConfig::page().margin, 200.0);
    }
}
