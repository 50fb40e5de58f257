//! The shared loading indicator shown while a playground's first load is
//! in flight. Created once inside `#app-container`; `views` toggles it
//! per render.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{APP_CONTAINER_ID, SPINNER_ID};
use crate::dom_utils;

/// Create the spinner element (hidden) and inject its styles if this is
/// the first call.
pub fn ensure_spinner(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id(SPINNER_ID) {
        return Ok(el);
    }

    let app_container = document
        .get_element_by_id(APP_CONTAINER_ID)
        .ok_or_else(|| JsValue::from_str("Could not find app-container"))?;

    let wrapper = document.create_element("div")?;
    wrapper.set_id(SPINNER_ID);
    wrapper.set_class_name("spinner-wrapper hidden");

    let circle = document.create_element("div")?;
    circle.set_class_name("spinner-circle");
    wrapper.append_child(&circle)?;

    app_container.append_child(&wrapper)?;

    ensure_styles(document)?;
    Ok(wrapper)
}

pub fn show_spinner(document: &Document) -> Result<(), JsValue> {
    let spinner = ensure_spinner(document)?;
    dom_utils::show(&spinner);
    Ok(())
}

pub fn hide_spinner(document: &Document) {
    if let Some(spinner) = document.get_element_by_id(SPINNER_ID) {
        dom_utils::hide(&spinner);
    }
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("spinner-styles").is_some() {
        return Ok(());
    }

    let css = "
.spinner-wrapper{display:flex;justify-content:center;padding:48px 0}
.spinner-wrapper.hidden{display:none}
.spinner-circle{width:40px;height:40px;border:4px solid #e2e8f0;border-top-color:#2563eb;border-radius:50%;animation:spinner-rotate 1s linear infinite}
@keyframes spinner-rotate{to{transform:rotate(360deg)}}
";

    let style = document.create_element("style")?;
    style.set_id("spinner-styles");
    style.set_text_content(Some(css));

    if let Some(head) = document.query_selector("head")? {
        head.append_child(&style)?;
    } else if let Some(body) = document.body() {
        body.append_child(&style)?;
    }

    Ok(())
}
