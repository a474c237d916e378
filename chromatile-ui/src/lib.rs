use leptos::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;

pub use app::App;

#[wasm_bindgen]
pub fn run() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
