//! Leptos frontend for Tauri desktop app.

pub mod api;
pub mod app;

/// Mount the frontend. Called from the wasm32 binary entry point.
pub fn mount() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Leptos app to the body
    leptos::mount_to_body(app::App);
}
