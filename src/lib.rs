//! # storefront
//!
//! Leptos + WASM front-end hosting two independent widgets on one page:
//! a logo compositor that places an uploaded image over a product photo and
//! exports the composite as a PNG, and a searchable, paginated data table
//! backed by a remote JSON endpoint.
//!
//! The compositor's geometry and rasterization live in the `compositor`
//! crate; this crate holds the table state machine, networking, formatting
//! helpers and the Leptos components that bridge both models to the DOM.
//! Browser-only code is compiled under the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    log::info!("storefront starting");
    leptos::mount::mount_to_body(app::App);
}
