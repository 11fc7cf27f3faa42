//! Job Board Web App (Leptos + WASM)
//!
//! `api` はJavaScriptからも `apiRequest` / `legacyApiRequest` として呼べる。

mod app;
mod components;
pub mod api;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
