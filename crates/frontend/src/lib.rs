pub mod app;
pub mod domain;
pub mod shared;

use contracts::domain::a001_model_response::ResponseSet;
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};

fn init_logging() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn hydrate() {
    init_logging();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

/// Replace the responses shown by the mounted app.
///
/// Accepts a plain JS object (`{ "gpt-4o": "..." }`); entries keep the
/// object's own iteration order.
#[wasm_bindgen]
pub fn update_responses(value: JsValue) -> Result<(), JsValue> {
    let responses: ResponseSet = serde_wasm_bindgen::from_value(value)
        .map_err(|e| js_sys::Error::new(&format!("Invalid responses: {}", e)))?;

    if app::set_responses(responses) {
        Ok(())
    } else {
        Err(js_sys::Error::new("App is not mounted").into())
    }
}
