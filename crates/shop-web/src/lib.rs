//! rust-shop Web Frontend
//!
//! Leptos-based WASM frontend for the storefront.

mod app;
mod api;
mod checkout;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
