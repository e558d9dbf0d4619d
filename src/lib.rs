//! # login-screen
//!
//! Leptos + WASM login screen: form state, a mock authentication client,
//! and the switch between the login form and the signed-in panel.
//!
//! The state machine and the auth clients are plain Rust types so they can be
//! exercised natively; components and pages are thin Leptos views over them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logging unavailable: {e}");
    }

    let config = config::AuthConfig::load();
    leptos::mount::hydrate_body(move || view! { <App config=config.clone()/> });
}
