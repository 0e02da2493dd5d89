// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM wiring for the marquee page-enhancement layer.
//!
//! [`Enhancer::install`] attaches the whole layer to an already-rendered
//! document:
//!
//! - navbar scroll state and the reservation button ([`ThresholdToggle`]-driven)
//! - the mobile menu with its scroll lock
//! - scroll-spy link highlighting
//! - the auto-advancing hero slider
//! - one-shot fade-in reveal and lazy image loading
//! - smooth in-page anchor scrolling
//! - the gallery-strip parallax drift
//! - the footer year stamp
//!
//! Every behavior checks for its markup and silently stays out when it is
//! absent, so partial pages lose individual effects, never the layer. The
//! decision logic lives in [`marquee_core`]; this crate only feeds it DOM
//! events and applies its change-sets.
//!
//! All JS closures are owned by RAII wrappers, so dropping the `Enhancer`
//! detaches every listener, observer, and timer. A page-lifetime install
//! can `core::mem::forget` it instead — there is no graceful shutdown on
//! the web.
//!
//! [`ThresholdToggle`]: marquee_core::scroll::ThresholdToggle

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

mod anchor;
mod dom;
mod events;
mod menu;
mod navfx;
mod parallax;
mod reveal;
mod slider;
mod spy;

use alloc::format;

use marquee_core::trace::Tracer;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::anchor::AnchorScroll;
use crate::menu::MenuController;
use crate::navfx::{NavbarScroll, ReservationFab};
use crate::parallax::GalleryParallax;
use crate::reveal::{LazyImages, Reveal};
use crate::slider::HeroSlider;
use crate::spy::ScrollSpy;

/// The installed enhancement layer.
///
/// Owns every listener, observer, and timer the layer registered; dropping
/// it detaches them all.
pub struct Enhancer {
    _navbar: Option<NavbarScroll>,
    _menu: Option<MenuController>,
    _spy: Option<ScrollSpy>,
    _slider: Option<HeroSlider>,
    _reveal: Option<Reveal>,
    _lazy: Option<LazyImages>,
    _anchors: Option<AnchorScroll>,
    _fab: Option<ReservationFab>,
    _parallax: Option<GalleryParallax>,
}

impl core::fmt::Debug for Enhancer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Enhancer").finish_non_exhaustive()
    }
}

impl Enhancer {
    /// Installs the layer on `document` without diagnostics.
    ///
    /// Errors only when the document itself is unusable (e.g. the selector
    /// API fails); absent markup is not an error.
    pub fn install(window: &Window, document: &Document) -> Result<Self, JsValue> {
        Self::install_traced(window, document, Tracer::none())
    }

    /// Installs the layer, reporting interaction events to `tracer`.
    pub fn install_traced(
        window: &Window,
        document: &Document,
        tracer: Tracer,
    ) -> Result<Self, JsValue> {
        let navbar = document.get_element_by_id("navbar");
        let navbar_html: Option<HtmlElement> =
            navbar.clone().and_then(|el| el.dyn_into().ok());

        stamp_year(document);

        let fab: Option<HtmlElement> = document
            .query_selector(".reservation-fab")?
            .and_then(|el| el.dyn_into().ok());

        Ok(Self {
            _navbar: match &navbar {
                Some(nav) => Some(NavbarScroll::install(window, nav, tracer.clone())?),
                None => None,
            },
            _menu: MenuController::install(document, navbar.as_ref(), tracer.clone())?,
            _spy: ScrollSpy::install(window, document, tracer.clone())?,
            _slider: HeroSlider::install(document, tracer.clone())?,
            _reveal: Reveal::install(document, tracer.clone())?,
            _lazy: LazyImages::install(window, document, tracer.clone())?,
            _anchors: AnchorScroll::install(window, document, navbar_html.as_ref())?,
            _fab: match &fab {
                Some(fab) => Some(ReservationFab::install(window, fab, tracer)?),
                None => None,
            },
            _parallax: GalleryParallax::install(window, document)?,
        })
    }
}

/// Writes the current four-digit year into `#year`, if the page has one.
pub fn stamp_year(document: &Document) {
    if let Some(el) = document.get_element_by_id("year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&format!("{year}")));
    }
}
