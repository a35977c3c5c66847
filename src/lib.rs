//! # folio
//!
//! Leptos + WASM single-page developer portfolio.
//!
//! The page is one [`state::page::PageState`] held in a Leptos signal: theme
//! preference, scroll reveal with counting stats, toasts, navigation, the
//! hero typewriter and the mailto contact form. Browser access lives in
//! [`util`] behind the `csr` feature; everything in [`state`] runs natively
//! under a fake clock.

pub mod app;
pub mod components;
pub mod config;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
