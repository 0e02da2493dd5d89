// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction diagnostics.
//!
//! This module provides a [`TraceSink`] trait with per-event methods the web
//! wiring calls as behaviors fire. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional shared sink handle. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead).
//! When **on**, each method performs a single `Option` branch before
//! dispatching. The handle is an `Rc` because the web layer's event closures
//! are `'static` and the same tracer is cloned into each of them; sinks that
//! accumulate state use interior mutability.

use alloc::rc::Rc;

use crate::slider::SlideChange;

/// Which scroll-threshold toggle crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToggleKind {
    /// The navbar compact-state threshold (80 px).
    Navbar,
    /// The reservation-button threshold (400 px).
    Fab,
}

/// Receives interaction events. All methods default to no-ops.
pub trait TraceSink {
    /// A scroll-threshold toggle crossed its threshold.
    fn threshold_crossed(&self, kind: ToggleKind, engaged: bool) {
        let _ = (kind, engaged);
    }

    /// The mobile menu opened or closed.
    fn menu_changed(&self, open: bool) {
        let _ = open;
    }

    /// The hero slider navigated. `manual` is `true` for dot clicks.
    fn slide_changed(&self, change: SlideChange, manual: bool) {
        let _ = (change, manual);
    }

    /// Scroll-spy activated the section at `index`.
    fn section_activated(&self, index: usize) {
        let _ = index;
    }

    /// The reveal observer made the element at `index` visible.
    fn revealed(&self, index: usize) {
        let _ = index;
    }

    /// The lazy loader swapped in the real source for the image at `index`.
    fn image_loaded(&self, index: usize) {
        let _ = index;
    }
}

/// A cloneable handle that dispatches events to an optional [`TraceSink`].
#[derive(Clone, Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Rc<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: Rc<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Emits a threshold crossing.
    #[inline]
    pub fn threshold_crossed(&self, kind: ToggleKind, engaged: bool) {
        #[cfg(feature = "trace")]
        if let Some(s) = &self.sink {
            s.threshold_crossed(kind, engaged);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = (kind, engaged);
        }
    }

    /// Emits a menu transition.
    #[inline]
    pub fn menu_changed(&self, open: bool) {
        #[cfg(feature = "trace")]
        if let Some(s) = &self.sink {
            s.menu_changed(open);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = open;
        }
    }

    /// Emits a slide navigation.
    #[inline]
    pub fn slide_changed(&self, change: SlideChange, manual: bool) {
        #[cfg(feature = "trace")]
        if let Some(s) = &self.sink {
            s.slide_changed(change, manual);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = (change, manual);
        }
    }

    /// Emits a scroll-spy activation.
    #[inline]
    pub fn section_activated(&self, index: usize) {
        #[cfg(feature = "trace")]
        if let Some(s) = &self.sink {
            s.section_activated(index);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = index;
        }
    }

    /// Emits a reveal.
    #[inline]
    pub fn revealed(&self, index: usize) {
        #[cfg(feature = "trace")]
        if let Some(s) = &self.sink {
            s.revealed(index);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = index;
        }
    }

    /// Emits a lazy image load.
    #[inline]
    pub fn image_loaded(&self, index: usize) {
        #[cfg(feature = "trace")]
        if let Some(s) = &self.sink {
            s.image_loaded(index);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = index;
        }
    }
}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[derive(Default)]
    struct CountingSink {
        events: Cell<u32>,
        last_open: Cell<Option<bool>>,
    }

    impl TraceSink for CountingSink {
        fn menu_changed(&self, open: bool) {
            self.events.set(self.events.get() + 1);
            self.last_open.set(Some(open));
        }

        fn slide_changed(&self, _change: SlideChange, _manual: bool) {
            self.events.set(self.events.get() + 1);
        }
    }

    #[test]
    fn dispatches_to_sink() {
        let sink = Rc::new(CountingSink::default());
        let tracer = Tracer::new(Rc::clone(&sink) as Rc<dyn TraceSink>);

        tracer.menu_changed(true);
        tracer.slide_changed(
            SlideChange {
                deactivate: 0,
                activate: 1,
            },
            false,
        );
        // Unimplemented events fall through to the default no-op.
        tracer.revealed(3);

        assert_eq!(sink.events.get(), 2);
        assert_eq!(sink.last_open.get(), Some(true));
    }

    #[test]
    fn none_discards_everything() {
        let tracer = Tracer::none();
        tracer.menu_changed(false);
        tracer.threshold_crossed(ToggleKind::Fab, true);
    }

    #[test]
    fn clones_share_the_sink() {
        let sink = Rc::new(CountingSink::default());
        let tracer = Tracer::new(Rc::clone(&sink) as Rc<dyn TraceSink>);
        let clone = tracer.clone();

        tracer.menu_changed(true);
        clone.menu_changed(false);
        assert_eq!(sink.events.get(), 2);
    }
}
