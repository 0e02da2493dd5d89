// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core state machines and math for the marquee page-enhancement layer.
//!
//! `marquee_core` holds everything about the enhancement layer that is not the
//! DOM itself: which behaviors fire, when, and with what values. It is
//! `no_std` compatible (with `alloc`) and contains no browser types, so every
//! decision the layer makes can be unit-tested on the native host. The
//! wasm-bindgen/web-sys wiring lives in `marquee_web`.
//!
//! # Architecture
//!
//! Each behavior is an isolated state machine or pure function. DOM events
//! flow in, change-sets flow out, and the web layer applies them:
//!
//! ```text
//!   DOM event (scroll, click, timer tick, intersection)
//!       │
//!       ▼
//!   state machine / pure fn ──► change-set (indices, flags, offsets)
//!                                    │
//!                                    ▼
//!                    marquee_web applies classes / styles / scrolls
//! ```
//!
//! **[`scroll`]** — [`ThresholdToggle`](scroll::ThresholdToggle), an
//! edge-triggered scroll-offset threshold used for the navbar scrolled state
//! and the reservation button.
//!
//! **[`menu`]** — the two-state mobile-menu machine and its transitions.
//!
//! **[`spy`]** — scroll-spy resolution: which section the viewport is in.
//!
//! **[`slider`]** — hero-slider index arithmetic with wrapping.
//!
//! **[`observe`]** — one-shot tracking for reveal/lazy-load targets and the
//! intersection-observer configuration bundles.
//!
//! **[`parallax`]** — gallery-strip drift math over viewport rectangles.
//!
//! **[`anchor`]** — smooth-scroll target offset math.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and the
//! zero-overhead [`Tracer`](trace::Tracer) wrapper for interaction
//! diagnostics.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod anchor;
pub mod menu;
pub mod observe;
pub mod parallax;
pub mod scroll;
pub mod slider;
pub mod spy;
pub mod trace;
