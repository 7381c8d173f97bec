// ============================================================================
// STORRMBOX WEB - media library front end (Rust + Yew, WASM)
// ============================================================================
// - Components: Yew function components (auth gate, search, seasons)
// - Hooks: context + store subscriptions
// - Services: HTTP only (gloo-net) + auth/session flows
// - State: reducer session + observable search store
// - Models: wire types shared with the API
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;

use crate::components::App;
use crate::config::CONFIG;

/// Installs the panic hook and logger, then mounts `App` on `<body>`
pub fn run() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Storrmbox starting (API: {})", CONFIG.api_url);

    yew::Renderer::<App>::new().render();
}
