//! MedSupply web client.
//!
//! Leptos application shared by the SSR host (`ssr` feature) and the
//! browser bundle (`hydrate` feature).

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating medsupply client");
    leptos::mount::hydrate_body(app::App);
}
