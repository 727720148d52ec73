//! # courseforge
//!
//! Leptos + WASM authoring frontend for a language-learning curriculum:
//! course metadata editing, chapter/lesson list management, and typed
//! per-lesson-step editors.
//!
//! This crate contains pages, components, editor state, and the REST client
//! for the external course-data service. All persistence goes through that
//! service; the only state held here is the in-memory working copy.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: attach the app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
