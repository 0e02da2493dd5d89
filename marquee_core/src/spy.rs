// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-spy resolution.
//!
//! Determines which page section the viewport is "in" so the matching
//! navigation link can be highlighted. The probe position is the scroll
//! offset plus a fixed lookahead, so a section lights up slightly before its
//! top edge reaches the top of the viewport.
//!
//! When sections overlap, the *last* matching section in iteration order
//! wins. That matches how the highlight behaves on real pages and is relied
//! on by existing markup, so it is deliberate.

/// Lookahead added to the scroll offset before testing section spans.
pub const LOOKAHEAD: f64 = 150.0;

/// The vertical span of one section, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    /// Distance from the document top to the section's top edge.
    pub top: f64,
    /// The section's rendered height.
    pub height: f64,
}

impl SectionSpan {
    /// Returns `true` if `probe` falls within `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// Resolves the active section for a scroll offset.
///
/// Returns the index of the last span containing `scroll_y + LOOKAHEAD`, or
/// `None` when the probe is between sections — in which case the previous
/// highlight is left in place.
#[must_use]
pub fn active_section(spans: &[SectionSpan], scroll_y: f64) -> Option<usize> {
    let probe = scroll_y + LOOKAHEAD;
    let mut hit = None;
    for (index, span) in spans.iter().enumerate() {
        if span.contains(probe) {
            hit = Some(index);
        }
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> [SectionSpan; 3] {
        [
            SectionSpan {
                top: 0.0,
                height: 600.0,
            },
            SectionSpan {
                top: 600.0,
                height: 800.0,
            },
            SectionSpan {
                top: 1400.0,
                height: 400.0,
            },
        ]
    }

    #[test]
    fn lookahead_shifts_the_probe() {
        let spans = page();
        // scroll_y 500 probes at 650, inside the second section.
        assert_eq!(active_section(&spans, 500.0), Some(1));
        // scroll_y 400 probes at 550, still in the first.
        assert_eq!(active_section(&spans, 400.0), Some(0));
    }

    #[test]
    fn span_end_is_exclusive() {
        let spans = page();
        // Probe exactly at 600 belongs to the second section, not the first.
        assert_eq!(active_section(&spans, 450.0), Some(1));
    }

    #[test]
    fn between_sections_resolves_to_none() {
        let spans = [
            SectionSpan {
                top: 0.0,
                height: 100.0,
            },
            SectionSpan {
                top: 2000.0,
                height: 100.0,
            },
        ];
        assert_eq!(active_section(&spans, 500.0), None);
    }

    #[test]
    fn overlapping_sections_last_match_wins() {
        let spans = [
            SectionSpan {
                top: 0.0,
                height: 1000.0,
            },
            SectionSpan {
                top: 300.0,
                height: 1000.0,
            },
        ];
        // Probe at 450 is inside both; the later span wins.
        assert_eq!(active_section(&spans, 300.0), Some(1));
    }

    #[test]
    fn empty_page_has_no_active_section() {
        assert_eq!(active_section(&[], 0.0), None);
    }
}
