//! # danubit-web
//!
//! Leptos + WASM frontend for the Danubit student-association platform.
//!
//! This crate contains pages, components, the session store, the remote
//! fetch lifecycle, and typed REST helpers for the Danubit API. Build with
//! the `csr` feature for the browser bundle; without it every HTTP helper
//! compiles to a stub so the crate's logic can be tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and mounts the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::ClientConfig::from_env();
    let level = config.log_level.parse().unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
    log::info!("danubit-web starting against {}", config.base_url());
    leptos::mount::mount_to_body(app::App);
}
