//! # client
//!
//! Leptos + WASM frontend for the Afmerica Technology marketing site.
//!
//! The interactive core is two independent state machines: the inquiry form
//! (`state::inquiry`, driven by `net::submit`) and the location map
//! (`state::map`). Everything under `components` renders from those models
//! or from the static copy in `content`.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
