// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-threshold effects: the navbar compact state and the reservation
//! button.
//!
//! Both are [`ThresholdToggle`]-driven scroll listeners; the toggle reports
//! only crossings, so the class/style writes happen once per transition
//! rather than on every scroll event.

use marquee_core::scroll::{FAB_THRESHOLD, NAVBAR_THRESHOLD, ThresholdToggle};
use marquee_core::trace::{ToggleKind, Tracer};
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, Window};

use crate::dom;
use crate::events::EventListener;

/// Toggles the `scrolled` class on the navbar past 80 px.
pub(crate) struct NavbarScroll {
    _scroll: EventListener,
}

impl NavbarScroll {
    /// Wires the navbar compact state, evaluating it once immediately so a
    /// page restored mid-scroll starts in the right state.
    pub(crate) fn install(
        window: &Window,
        navbar: &Element,
        tracer: Tracer,
    ) -> Result<Self, JsValue> {
        let mut toggle = ThresholdToggle::new(NAVBAR_THRESHOLD);
        if let Some(on) = toggle.update(dom::scroll_y(window)) {
            dom::set_class(navbar, "scrolled", on);
        }

        let win = window.clone();
        let navbar = navbar.clone();
        let scroll = EventListener::passive(window, "scroll", move |_| {
            if let Some(on) = toggle.update(dom::scroll_y(&win)) {
                dom::set_class(&navbar, "scrolled", on);
                tracer.threshold_crossed(ToggleKind::Navbar, on);
            }
        })?;
        Ok(Self { _scroll: scroll })
    }
}

/// Shows the reservation button once the page has scrolled past 400 px.
pub(crate) struct ReservationFab {
    _scroll: EventListener,
}

impl ReservationFab {
    /// Wires the button: pre-sets its transition, hides it, and toggles
    /// visibility on threshold crossings.
    pub(crate) fn install(
        window: &Window,
        fab: &HtmlElement,
        tracer: Tracer,
    ) -> Result<Self, JsValue> {
        let _ = fab.style().set_property(
            "transition",
            "opacity 0.4s ease, transform 0.4s ease, box-shadow 0.4s ease",
        );
        apply(fab, false);

        let mut toggle = ThresholdToggle::new(FAB_THRESHOLD);
        let win = window.clone();
        let fab = fab.clone();
        let scroll = EventListener::passive(window, "scroll", move |_| {
            if let Some(on) = toggle.update(dom::scroll_y(&win)) {
                apply(&fab, on);
                tracer.threshold_crossed(ToggleKind::Fab, on);
            }
        })?;
        Ok(Self { _scroll: scroll })
    }
}

/// Makes the button visible and clickable, or neither.
fn apply(fab: &HtmlElement, on: bool) {
    let style = fab.style();
    let _ = style.set_property("opacity", if on { "1" } else { "0" });
    let _ = style.set_property("pointer-events", if on { "auto" } else { "none" });
}
