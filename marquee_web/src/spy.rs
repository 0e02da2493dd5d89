// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-spy wiring.
//!
//! Re-reads section offsets on every scroll event (layout can change under
//! us), resolves the active section via [`marquee_core::spy`], and moves the
//! `active` flag to the navigation link whose `href` names that section.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use marquee_core::spy::{self, SectionSpan};
use marquee_core::trace::Tracer;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom;
use crate::events::EventListener;

/// The wired scroll-spy highlighter.
pub(crate) struct ScrollSpy {
    _scroll: EventListener,
}

impl ScrollSpy {
    /// Wires the highlighter, or returns `None` when the page has no
    /// identified sections or no in-page navigation links.
    pub(crate) fn install(
        window: &Window,
        document: &Document,
        tracer: Tracer,
    ) -> Result<Option<Self>, JsValue> {
        let sections: Vec<HtmlElement> = dom::query_all(document, "section[id]")
            .into_iter()
            .filter_map(|el| el.dyn_into().ok())
            .collect();
        let links = dom::query_all(document, ".nav-menu a[href^=\"#\"]");
        if sections.is_empty() || links.is_empty() {
            return Ok(None);
        }

        let ids: Vec<String> = sections
            .iter()
            .map(|s| s.get_attribute("id").unwrap_or_default())
            .collect();

        let win = window.clone();
        let mut active: Option<usize> = None;
        let scroll = EventListener::passive(window, "scroll", move |_| {
            let spans: Vec<SectionSpan> = sections
                .iter()
                .map(|s| SectionSpan {
                    top: f64::from(s.offset_top()),
                    height: f64::from(s.offset_height()),
                })
                .collect();
            if let Some(index) = spy::active_section(&spans, dom::scroll_y(&win))
                && active != Some(index)
            {
                active = Some(index);
                highlight(&links, &ids[index]);
                tracer.section_activated(index);
            }
        })?;
        Ok(Some(Self { _scroll: scroll }))
    }
}

/// Moves the `active` flag to the link pointing at `#id`.
fn highlight(links: &[Element], id: &str) {
    let href = format!("#{id}");
    for link in links {
        let matches = link.get_attribute("href").as_deref() == Some(href.as_str());
        dom::set_class(link, "active", matches);
    }
}
