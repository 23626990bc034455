pub mod app;
pub mod hub;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // The page markup must be parsed before partial slots and cards are looked up.
    shared::dom::when_ready(|| leptos::mount::mount_to_body(app::App));
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
