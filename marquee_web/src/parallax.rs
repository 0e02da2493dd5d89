// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gallery-strip parallax wiring.
//!
//! On each scroll event the strip's viewport rectangle is re-measured; when
//! it is on-screen, every strip image gets a fixed up-scale plus the
//! vertical drift computed by [`marquee_core::parallax`]. Off-screen strips
//! skip the per-image writes entirely.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use marquee_core::parallax::{self, SCALE};
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::dom;
use crate::events::EventListener;

/// The wired gallery parallax.
pub(crate) struct GalleryParallax {
    _scroll: EventListener,
}

impl GalleryParallax {
    /// Wires the drift effect, or returns `None` on pages without gallery
    /// images.
    pub(crate) fn install(window: &Window, document: &Document) -> Result<Option<Self>, JsValue> {
        let images: Vec<HtmlElement> = dom::query_all(document, ".galerie-strip-item img")
            .into_iter()
            .filter_map(|el| el.dyn_into().ok())
            .collect();
        if images.is_empty() {
            return Ok(None);
        }

        let win = window.clone();
        let doc = document.clone();
        let scroll = EventListener::passive(window, "scroll", move |_| {
            let Ok(Some(strip)) = doc.query_selector(".galerie-strip") else {
                return;
            };
            let rect = strip.get_bounding_client_rect();
            let strip_rect = Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom());
            let Some(dy) = parallax::drift(strip_rect, dom::inner_height(&win)) else {
                return;
            };
            let transform = drift_transform(dy);
            for img in &images {
                let _ = img.style().set_property("transform", &transform);
            }
        })?;
        Ok(Some(Self { _scroll: scroll }))
    }
}

/// Formats the per-image transform for a drift of `dy` pixels.
fn drift_transform(dy: f64) -> String {
    format!("scale({SCALE}) translateY({dy}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_combines_scale_and_drift() {
        assert_eq!(drift_transform(-6.25), "scale(1.08) translateY(-6.25px)");
    }

    #[test]
    fn zero_drift_keeps_the_scale() {
        assert_eq!(drift_transform(0.0), "scale(1.08) translateY(0px)");
    }
}
