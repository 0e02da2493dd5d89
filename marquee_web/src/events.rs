// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! RAII wrappers for JS event listeners and interval timers.
//!
//! A wasm-bindgen [`Closure`] must outlive every JS call into it, so each
//! wrapper stores its closure and deregisters on `Drop`:
//!
//! - [`EventListener`] — one `addEventListener` registration, optionally
//!   passive for scroll handlers.
//! - [`Interval`] — a restartable `setInterval` timer.
//!   [`restart`](Interval::restart) is stop-then-start, so it also resets
//!   the timer phase.

use alloc::boxed::Box;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

// Direct global bindings — avoids fetching (and unwrapping) the Window
// object around every timer operation.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, period_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);
}

/// A single `addEventListener` registration, removed on `Drop`.
pub(crate) struct EventListener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Registers `handler` for `kind` events on `target`.
    pub(crate) fn new(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    /// Registers `handler` as a passive listener, promising not to block
    /// scrolling.
    pub(crate) fn passive(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventListener")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// A restartable `setInterval` timer.
///
/// Created stopped; call [`start`](Self::start) to begin ticking. The
/// pending registration is cleared on `Drop`.
pub(crate) struct Interval {
    /// The JS closure registered with `setInterval`, dropped last.
    closure: RefCell<Option<Closure<dyn FnMut()>>>,
    /// The ID of the live registration, if any.
    id: Cell<Option<i32>>,
    period_ms: i32,
}

impl Interval {
    /// Creates a timer that will invoke `tick` every `period_ms` once
    /// started.
    pub(crate) fn new(period_ms: i32, tick: impl FnMut() + 'static) -> Self {
        Self {
            closure: RefCell::new(Some(Closure::wrap(Box::new(tick) as Box<dyn FnMut()>))),
            id: Cell::new(None),
            period_ms,
        }
    }

    /// Starts the timer. No-op if already running.
    pub(crate) fn start(&self) {
        if self.id.get().is_some() {
            return;
        }
        if let Some(closure) = &*self.closure.borrow() {
            let id = set_interval(closure.as_ref(), self.period_ms);
            self.id.set(Some(id));
        }
    }

    /// Stops the timer. No-op if already stopped.
    pub(crate) fn stop(&self) {
        if let Some(id) = self.id.take() {
            clear_interval(id);
        }
    }

    /// Stops and immediately restarts the timer, resetting its phase: the
    /// next tick fires a full period from now.
    pub(crate) fn restart(&self) {
        self.stop();
        self.start();
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.stop();
        // Drop the JS closure so it doesn't leak.
        self.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for Interval {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Interval")
            .field("period_ms", &self.period_ms)
            .field("running", &self.id.get().is_some())
            .finish_non_exhaustive()
    }
}
