// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth in-page anchor scrolling.
//!
//! Intercepts clicks on `a[href^="#"]` links whose target exists, and
//! animates the scroll to the target's position minus the navbar height
//! (offset math in [`marquee_core::anchor`]). Links with a bare `#` or a
//! dangling fragment keep the browser's default behavior.

use alloc::vec::Vec;

use marquee_core::anchor::scroll_target;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;
use crate::events::EventListener;

/// The wired anchor navigation.
pub(crate) struct AnchorScroll {
    _clicks: Vec<EventListener>,
}

impl AnchorScroll {
    /// Wires every in-page anchor, or returns `None` when there are none.
    pub(crate) fn install(
        window: &Window,
        document: &Document,
        navbar: Option<&HtmlElement>,
    ) -> Result<Option<Self>, JsValue> {
        let anchors = dom::query_all(document, "a[href^=\"#\"]");
        if anchors.is_empty() {
            return Ok(None);
        }

        let mut clicks = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            let win = window.clone();
            let doc = document.clone();
            let navbar = navbar.cloned();
            let link = anchor.clone();
            clicks.push(EventListener::new(&anchor, "click", move |event| {
                if let Some(target) = resolve_target(&doc, &link) {
                    event.prevent_default();
                    let offset = navbar.as_ref().map(|n| f64::from(n.offset_height()));
                    let top = scroll_target(
                        target.get_bounding_client_rect().top(),
                        dom::scroll_y(&win),
                        offset,
                    );
                    let options = ScrollToOptions::new();
                    options.set_top(top);
                    options.set_behavior(ScrollBehavior::Smooth);
                    win.scroll_to_with_scroll_to_options(&options);
                }
            })?);
        }
        Ok(Some(Self { _clicks: clicks }))
    }
}

/// Resolves a link's fragment to an element, if the fragment names one.
fn resolve_target(document: &Document, link: &Element) -> Option<Element> {
    let href = link.get_attribute("href")?;
    let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
    document.get_element_by_id(id)
}
