//! RideMumbai web client: a metro commuter app for route planning, ticket
//! booking, wallet top-up, and travel history.
//!
//! SYSTEM CONTEXT
//! ==============
//! The crate compiles to WASM (`hydrate` feature) for the browser and to a
//! plain rlib for server-side rendering (`ssr`) and native unit tests. All
//! browser-only behavior is feature-gated so the pure session, guard, and
//! wire-schema logic stays testable with `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
