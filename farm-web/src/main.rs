//! AgriSense Farm Portal - Leptos Frontend
//!
//! Marketing site plus farmer flows (registration, KYC, devices, crop
//! library) and the admin console. All data comes from the remote farm API
//! through [`services::api`].

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Readable panics in the browser console
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("AgriSense portal starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static splash once the WASM bundle has taken over.
fn hide_loading_screen() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };
    if let Some(loading) = document.get_element_by_id("leptos-loading") {
        loading
            .set_attribute("style", "display: none !important;")
            .ok();
    }
}
