//! # login-page
//!
//! Leptos + WASM login page. Collects an email and password, hands them to an
//! authenticator, and either navigates to the page that required sign-in or
//! shows a blocking alert describing why the attempt failed.
//!
//! Decision logic lives in plain types (`state::login`, `pages::login_flow`)
//! behind small capability traits, so it is testable without a browser. The
//! `LoginPage` component binds those types to the DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only fails because a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
