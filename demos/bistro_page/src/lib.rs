// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo: a static bistro landing page enhanced by marquee.
//!
//! The page itself is plain HTML/CSS (`index.html`); this crate only
//! installs the enhancement layer on load.
//!
//! Build with: `wasm-pack build --target web demos/bistro_page`
//!
//! Then serve `demos/bistro_page/` and open `index.html` in a browser.

#![no_std]

use marquee_web::Enhancer;
use wasm_bindgen::prelude::*;

/// Entry point — called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().expect("no global window");
    let document = window.document().expect("no document");

    let enhancer = Enhancer::install(&window, &document)?;
    // Keep the layer alive — there is no graceful shutdown on the web.
    core::mem::forget(enhancer);

    Ok(())
}
