// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hero-slider wiring.
//!
//! Owns the auto-advance [`Interval`] and the dot click listeners. Index
//! arithmetic lives in [`marquee_core::slider`]; this module applies the
//! resulting [`SlideChange`] pairs to the slide and dot elements. A dot
//! click stops the timer, jumps, and restarts it, so the next auto-advance
//! fires a full interval after the click.
//!
//! The markup is expected to mark the initial slide/dot pair `active`;
//! navigation only moves the flags. Absent entirely on pages with no
//! slides, and a dot index with no matching dot is skipped rather than an
//! error — slide and dot counts can disagree.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use marquee_core::slider::{ADVANCE_INTERVAL_MS, SlideChange, Slider};
use marquee_core::trace::Tracer;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom;
use crate::events::{EventListener, Interval};

/// The wired hero slider.
pub(crate) struct HeroSlider {
    _interval: Rc<Interval>,
    _dot_clicks: Vec<EventListener>,
    _inner: Rc<SliderInner>,
}

struct SliderInner {
    slider: Cell<Slider>,
    slides: Vec<Element>,
    dots: Vec<Element>,
    tracer: Tracer,
}

impl SliderInner {
    fn advance(&self) {
        let mut slider = self.slider.get();
        let change = slider.advance();
        self.slider.set(slider);
        self.apply(change);
        self.tracer.slide_changed(change, false);
    }

    fn jump(&self, index: isize) {
        let mut slider = self.slider.get();
        let change = slider.go_to(index);
        self.slider.set(slider);
        self.apply(change);
        self.tracer.slide_changed(change, true);
    }

    fn apply(&self, change: SlideChange) {
        if let Some(slide) = self.slides.get(change.deactivate) {
            dom::set_class(slide, "active", false);
        }
        if let Some(dot) = self.dots.get(change.deactivate) {
            dom::set_class(dot, "active", false);
        }
        if let Some(slide) = self.slides.get(change.activate) {
            dom::set_class(slide, "active", true);
        }
        if let Some(dot) = self.dots.get(change.activate) {
            dom::set_class(dot, "active", true);
        }
    }
}

impl HeroSlider {
    /// Wires the slider and starts auto-advancing, or returns `None` on
    /// pages without hero slides.
    pub(crate) fn install(document: &Document, tracer: Tracer) -> Result<Option<Self>, JsValue> {
        let slides = dom::query_all(document, ".hero-slide");
        let Some(slider) = Slider::new(slides.len()) else {
            return Ok(None);
        };
        let dots = dom::query_all(document, ".hero-dot");

        let inner = Rc::new(SliderInner {
            slider: Cell::new(slider),
            slides,
            dots,
            tracer,
        });

        let interval = Rc::new(Interval::new(ADVANCE_INTERVAL_MS, {
            let inner = Rc::clone(&inner);
            move || inner.advance()
        }));

        let mut dot_clicks = Vec::with_capacity(inner.dots.len());
        for (i, dot) in inner.dots.iter().enumerate() {
            #[expect(
                clippy::cast_possible_wrap,
                reason = "dot counts are tiny; a DOM can't hold isize::MAX dots"
            )]
            let index = i as isize;
            let inner = Rc::clone(&inner);
            let interval = Rc::clone(&interval);
            // Manual navigation resets the auto-advance phase.
            dot_clicks.push(EventListener::new(dot, "click", move |_| {
                interval.stop();
                inner.jump(index);
                interval.start();
            })?);
        }

        interval.start();
        Ok(Some(Self {
            _interval: interval,
            _dot_clicks: dot_clicks,
            _inner: inner,
        }))
    }
}
