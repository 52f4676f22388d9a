//! # fabric-console
//!
//! Leptos + WASM front-end for the Fabric data-platform administration
//! console. Replaces the legacy JavaScript admin UI with a Rust-native
//! view layer.
//!
//! This crate contains pages, components, application state, network
//! types, and the REST helpers used for status polling and workspace
//! configuration. Rendering is plain HTML with class hooks; styling and
//! icon assets live outside the crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
