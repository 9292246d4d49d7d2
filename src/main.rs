//! Storage browser: a Leptos single-page admin UI for remote file storage.
//!
//! Lists, uploads, downloads, edits, renames and deletes files on a storage
//! target through the backend's HTTP API.

mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    utils::dom::console_log(&format!("{} starting", config::APP_NAME));

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
