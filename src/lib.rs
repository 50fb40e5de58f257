use wasm_bindgen::prelude::*;
use web_sys::Document;

pub mod command_executors;
pub mod components;
pub mod constants;
pub mod dom_utils;
pub mod messages;
pub mod models;
pub mod network;
pub mod pages;
pub mod router;
pub mod state;
pub mod toast;
pub mod update;
pub mod utils;
pub mod views;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    // Create the shell container and the shared loading indicator
    ensure_app_container(&document)?;
    components::spinner::ensure_spinner(&document)?;

    // Back/forward navigation re-enters through the router
    router::register_popstate_listener()?;

    // Route whatever URL we were opened on; a deep link to a playground
    // starts that page's load immediately.
    state::dispatch_global_message(messages::Message::UrlChanged(router::current_route()));

    Ok(())
}

/// Make sure `#app-container` exists. The host page may ship its own
/// (styled) container; we only create one when it is missing.
fn ensure_app_container(document: &Document) -> Result<(), JsValue> {
    if document
        .get_element_by_id(constants::APP_CONTAINER_ID)
        .is_some()
    {
        return Ok(());
    }

    let container = document.create_element("div")?;
    container.set_id(constants::APP_CONTAINER_ID);
    container.set_class_name("app-container");

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&container)?;

    Ok(())
}
