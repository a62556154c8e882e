//! # repboard
//!
//! Leptos + WASM frontend for the sales representatives dashboard.
//! Replaces the React + Chart.js single-page view with a Rust-native UI
//! layer.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST helpers that talk to the sales-data and AI endpoints. The
//! data shaping pipeline (filter, sort, aggregate, chart projection) lives
//! in `state` as plain functions so it compiles and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
