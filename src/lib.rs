//! Progress Checklist Frontend
//!
//! Leptos CSR app around a submit-gated checklist. `main.rs` only calls
//! [`run`]; the browser tests mount [`App`] directly.

pub mod config;
pub mod logging;
pub mod store;
pub mod context;
pub mod components;
pub mod app;

pub use app::App;
pub use config::AppConfig;

use leptos::prelude::*;

/// Read the page config, install logging and mount the app on `<body>`
pub fn run() {
    console_error_panic_hook::set_once();

    let (config, load_error) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::init(config.log_level);
    if let Some(err) = load_error {
        log::warn!(target: "config", "{}, using defaults", err);
    }
    log::info!(target: "app", "starting with {:?}", config);

    mount_to_body(move || view! { <App config=config /> });
}
