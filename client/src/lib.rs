//! # client
//!
//! Leptos + WASM frontend for the document assistant.
//!
//! This crate contains the root layout, the assistant page and its
//! components, the summarize state machine, theme tokens, and the REST
//! helpers that talk to the document API through the server's `/api`
//! forwarder. The `ssr` feature renders it inside the Axum server; the
//! `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod theme;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
