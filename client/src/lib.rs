//! # client
//!
//! Leptos + WASM frontend for the freight quoting desk.
//!
//! This crate contains pages, components, application state and the REST
//! helpers that talk to the quoting backend. Browser-only code sits behind the
//! `hydrate` feature; the host server renders the same components with `ssr`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
