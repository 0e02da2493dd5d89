// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small web-sys helpers shared by the behavior wirings.

use alloc::vec::Vec;

use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, Window};

/// Collects every element matching `selector`, or an empty vec if the
/// selector fails.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut elements = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.get(i)
                && let Ok(el) = node.dyn_into::<Element>()
            {
                elements.push(el);
            }
        }
    }
    elements
}

/// Like [`query_all`], scoped to the subtree under `root`.
pub(crate) fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    let mut elements = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.get(i)
                && let Ok(el) = node.dyn_into::<Element>()
            {
                elements.push(el);
            }
        }
    }
    elements
}

/// The vertical scroll offset, or 0 if the window can't report one.
pub(crate) fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// The viewport height in pixels, or 0 if the window can't report one.
pub(crate) fn inner_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Adds or removes a class flag.
pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}
