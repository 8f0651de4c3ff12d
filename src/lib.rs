//! # storefront
//!
//! Leptos + WASM storefront: catalog pages, cart, admin panel and marketing
//! sections behind a URL-hash router with faded page transitions.
//!
//! The router core (`state::page`, `state::transition`, `util::driver`) is
//! plain Rust and runs natively; browser glue is gated on the `hydrate`
//! feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

pub use error::{Error, Result};

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let config = config::StorefrontConfig::load();
    if let Err(err) = console_log::init_with_level(config.log_level.into()) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
