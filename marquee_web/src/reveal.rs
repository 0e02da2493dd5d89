// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot intersection wiring: scroll-triggered reveal and lazy images.
//!
//! [`Observed`] wraps an `IntersectionObserver` over a fixed target set and
//! runs an effect at most once per target, backed by
//! [`marquee_core::observe::OneShotSet`] — the observer can deliver a second
//! entry for a target before `unobserve` takes effect, and the set swallows
//! the duplicate.
//!
//! Reveal degrades to nothing when the observer API is unavailable; lazy
//! loading additionally feature-detects up front, leaving old browsers to
//! the native `loading="lazy"` attribute.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use js_sys::Object;
use marquee_core::observe::{LazyConfig, OneShotSet, RevealConfig};
use marquee_core::trace::Tracer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::dom;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An `IntersectionObserver` over a fixed target set, firing an effect at
/// most once per target. Disconnects on `Drop`.
struct Observed {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Observed {
    fn install(
        targets: Vec<Element>,
        init: &IntersectionObserverInit,
        mut effect: impl FnMut(usize, &Element) + 'static,
    ) -> Result<Self, JsValue> {
        let mut seen = OneShotSet::new(targets.len());
        let lookup = targets.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(index) = lookup
                        .iter()
                        .position(|t| Object::is(t.as_ref(), target.as_ref()))
                        && seen.mark(index)
                    {
                        effect(index, &target);
                    }
                    observer.unobserve(&target);
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)?;
        for target in &targets {
            observer.observe(target);
        }
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Observed {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// The wired fade-in reveal.
pub(crate) struct Reveal {
    _observed: Observed,
}

impl Reveal {
    /// Wires the reveal, or returns `None` when nothing is marked for it or
    /// the observer API is unavailable.
    pub(crate) fn install(document: &Document, tracer: Tracer) -> Result<Option<Self>, JsValue> {
        let targets = dom::query_all(document, ".fade-up, .fade-in");
        if targets.is_empty() {
            return Ok(None);
        }

        let config = RevealConfig::page();
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&reveal_margin(&config));

        let observed = Observed::install(targets, &init, move |index, el| {
            dom::set_class(el, "visible", true);
            tracer.revealed(index);
        });
        // An observer-less browser loses the reveal, nothing else.
        Ok(observed.ok().map(|observed| Self {
            _observed: observed,
        }))
    }
}

/// The wired lazy image loader.
pub(crate) struct LazyImages {
    _observed: Observed,
}

impl LazyImages {
    /// Wires the loader, or returns `None` when the observer API is absent
    /// (native `loading="lazy"` takes over) or no images are marked.
    pub(crate) fn install(
        window: &Window,
        document: &Document,
        tracer: Tracer,
    ) -> Result<Option<Self>, JsValue> {
        let has_observer =
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false);
        if !has_observer {
            return Ok(None);
        }

        let targets = dom::query_all(document, "img[loading=\"lazy\"]");
        if targets.is_empty() {
            return Ok(None);
        }

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&lazy_margin(&LazyConfig::page()));

        let observed = Observed::install(targets, &init, move |index, el| {
            if let Some(src) = el.get_attribute("data-src")
                && let Some(img) = el.dyn_ref::<HtmlImageElement>()
            {
                img.set_src(&src);
                tracer.image_loaded(index);
            }
        })?;
        Ok(Some(Self {
            _observed: observed,
        }))
    }
}

/// Formats the reveal root margin: no shrink except at the bottom edge.
fn reveal_margin(config: &RevealConfig) -> String {
    format!("0px 0px {}px 0px", config.bottom_margin)
}

/// Formats the lazy-load root margin, a uniform expansion.
fn lazy_margin(config: &LazyConfig) -> String {
    format!("{}px", config.margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_margin_pulls_bottom_edge_up() {
        assert_eq!(reveal_margin(&RevealConfig::page()), "0px 0px -40px 0px");
    }

    #[test]
    fn lazy_margin_expands_uniformly() {
        assert_eq!(lazy_margin(&LazyConfig::page()), "200px");
    }
}
