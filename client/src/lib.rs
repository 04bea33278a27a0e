//! # client
//!
//! Leptos + WASM frontend for the portfolio and blog site.
//!
//! This crate contains pages, components, the hard-coded site content,
//! client-side state, and the browser-boundary utilities (localStorage
//! persistence, pointer mapping, dark mode). The interactive hotspot
//! editor on workspace pages delegates all of its logic to the `hotspot`
//! crate; this crate only renders its state and feeds it events.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed; nothing to do.
    }
    leptos::mount::hydrate_body(app::App);
}
