//! # storefront
//!
//! Leptos + WASM storefront for the EV showroom: a featured-model teaser on
//! the home page, the filterable vehicle listing with two-slot comparison,
//! vehicle detail pages and the test-drive booking form.
//!
//! Domain logic (filtering, selection, validation, submission, fallback to
//! the bundled catalog) lives in the `catalog` crate; this crate wires it to
//! reactive state, routing and the browser HTTP transport.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
