// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile-menu wiring.
//!
//! The state machine lives in [`marquee_core::menu`]; this module feeds it
//! DOM events and applies its transitions: the `active`/`open` class flags,
//! `aria-expanded`, and the page scroll lock. Absent unless both the toggle
//! button and the menu exist.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use marquee_core::menu::{MenuEvent, MenuState, MenuTransition};
use marquee_core::trace::Tracer;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element, HtmlElement, Node};

use crate::dom;
use crate::events::EventListener;

/// The wired mobile-menu controller.
pub(crate) struct MenuController {
    _toggle_click: EventListener,
    _link_clicks: Vec<EventListener>,
    _outside_click: EventListener,
}

struct MenuInner {
    state: Cell<MenuState>,
    toggle: Element,
    menu: Element,
    /// Containment root for outside-click detection: the navbar when the
    /// page has one, otherwise the menu itself.
    container: Element,
    document: Document,
    tracer: Tracer,
}

impl MenuInner {
    fn dispatch(&self, event: MenuEvent) {
        let mut state = self.state.get();
        let transition = state.apply(event);
        self.state.set(state);
        if transition.changed {
            self.apply(transition);
        }
    }

    fn apply(&self, transition: MenuTransition) {
        let open = transition.open;
        dom::set_class(&self.toggle, "active", open);
        dom::set_class(&self.menu, "open", open);
        let _ = self
            .toggle
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
        set_scroll_lock(&self.document, open);
        self.tracer.menu_changed(open);
    }
}

impl MenuController {
    /// Wires the menu, or returns `None` when the toggle or menu markup is
    /// absent.
    pub(crate) fn install(
        document: &Document,
        navbar: Option<&Element>,
        tracer: Tracer,
    ) -> Result<Option<Self>, JsValue> {
        let (Some(toggle), Some(menu)) = (
            document.query_selector(".nav-toggle")?,
            document.query_selector(".nav-menu")?,
        ) else {
            return Ok(None);
        };

        let container = navbar.cloned().unwrap_or_else(|| menu.clone());
        let inner = Rc::new(MenuInner {
            state: Cell::new(MenuState::default()),
            toggle: toggle.clone(),
            menu: menu.clone(),
            container,
            document: document.clone(),
            tracer,
        });

        // The toggle stops propagation so the document-level outside-click
        // handler never sees its own clicks.
        let toggle_click = {
            let inner = Rc::clone(&inner);
            EventListener::new(&toggle, "click", move |event| {
                event.stop_propagation();
                inner.dispatch(MenuEvent::ToggleClick);
            })?
        };

        // Any link inside the menu closes it.
        let mut link_clicks = Vec::new();
        for link in dom::query_all_within(&menu, "a") {
            let inner = Rc::clone(&inner);
            link_clicks.push(EventListener::new(&link, "click", move |_| {
                inner.dispatch(MenuEvent::LinkClick);
            })?);
        }

        // A click outside the navbar closes the menu.
        let outside_click = {
            let inner = Rc::clone(&inner);
            EventListener::new(document, "click", move |event| {
                if !inner.state.get().is_open() {
                    return;
                }
                let inside = event
                    .target()
                    .as_ref()
                    .and_then(|t| t.dyn_ref::<Node>())
                    .is_some_and(|node| inner.container.contains(Some(node)));
                if !inside {
                    inner.dispatch(MenuEvent::OutsideClick);
                }
            })?
        };

        Ok(Some(Self {
            _toggle_click: toggle_click,
            _link_clicks: link_clicks,
            _outside_click: outside_click,
        }))
    }
}

/// Locks or unlocks page scrolling on both `body` and the root element,
/// since browsers disagree on which one scrolls the page.
fn set_scroll_lock(document: &Document, locked: bool) {
    if let Some(body) = document.body() {
        apply_overflow(&body, locked);
    }
    if let Some(root) = document.document_element()
        && let Ok(root) = root.dyn_into::<HtmlElement>()
    {
        apply_overflow(&root, locked);
    }
}

fn apply_overflow(el: &HtmlElement, locked: bool) {
    let style = el.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}
