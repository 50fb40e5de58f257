// frontend/src/pages/rustdoc.rs
//
// The Rustdoc playground: browses a pre-generated crate item index
// (JSON distilled from rustdoc output and served as a static asset).
// The filter input re-renders only the item list, so typing never loses
// focus.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::constants::{
    APP_CONTAINER_ID, DOC_SNIPPET_MAX_CHARS, RUSTDOC_CONTAINER_ID, RUSTDOC_FILTER_INPUT_ID,
    RUSTDOC_ITEM_LIST_ID,
};
use crate::models::CrateIndex;
use crate::network::ApiClient;
use crate::state::APP_STATE;

/// Fetch the crate index the page renders from.
pub async fn load() -> Result<CrateIndex, JsValue> {
    ApiClient::get_crate_index().await
}

/// Mount (render) the Rustdoc page into the main app container.
pub fn mount_rustdoc(document: &Document) -> Result<(), JsValue> {
    let app_container = document
        .get_element_by_id(APP_CONTAINER_ID)
        .ok_or_else(|| JsValue::from_str("Could not find app-container"))?;

    let container: Element = if let Some(el) = document.get_element_by_id(RUSTDOC_CONTAINER_ID) {
        el
    } else {
        let el = document.create_element("div")?;
        el.set_id(RUSTDOC_CONTAINER_ID);
        el.set_class_name("playground-container");
        app_container.append_child(&el)?;
        el
    };

    crate::dom_utils::clear_children(&container);

    let index = APP_STATE.with(|s| s.borrow().crate_index.clone());
    let index = match index {
        Some(index) => index,
        // Mount is only called from the Ready state, but guard anyway.
        None => return Err(JsValue::from_str("Crate index not loaded")),
    };

    // Crate header
    let title = document.create_element("h2")?;
    let heading = match &index.crate_version {
        Some(version) => format!("{} {}", index.crate_name, version),
        None => index.crate_name.clone(),
    };
    title.set_text_content(Some(&heading));
    container.append_child(&title)?;

    let subtitle = document.create_element("p")?;
    subtitle.set_class_name("rustdoc-subtitle");
    subtitle.set_text_content(Some(&format!(
        "{} items · rustdoc JSON format v{}",
        index.items.len(),
        index.format_version
    )));
    container.append_child(&subtitle)?;

    // Filter input; re-renders the list below on every keystroke
    let filter_input: web_sys::HtmlInputElement =
        document.create_element("input")?.dyn_into()?;
    filter_input.set_id(RUSTDOC_FILTER_INPUT_ID);
    filter_input.set_attribute("type", "text")?;
    filter_input.set_attribute("placeholder", "Filter items by name or path")?;
    filter_input.set_class_name("rustdoc-filter");
    {
        let document = document.clone();
        let on_input = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let filter = crate::dom_utils::input_value(&event);
            if let Err(e) = render_item_list(&document, &filter) {
                web_sys::console::warn_1(
                    &format!("Failed to render item list: {:?}", e).into(),
                );
            }
        }) as Box<dyn FnMut(_)>);
        filter_input
            .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        on_input.forget();
    }
    container.append_child(&filter_input)?;

    // Item list
    let list = document.create_element("div")?;
    list.set_id(RUSTDOC_ITEM_LIST_ID);
    list.set_class_name("rustdoc-item-list");
    container.append_child(&list)?;
    render_item_list(document, "")?;

    crate::dom_utils::show(&container);
    Ok(())
}

/// Rebuild only the item list, applying the substring filter.
fn render_item_list(document: &Document, filter: &str) -> Result<(), JsValue> {
    let list = document
        .get_element_by_id(RUSTDOC_ITEM_LIST_ID)
        .ok_or_else(|| JsValue::from_str("Item list is not mounted"))?;

    crate::dom_utils::clear_children(&list);

    let items = APP_STATE.with(|s| {
        s.borrow()
            .crate_index
            .as_ref()
            .map(|index| {
                index
                    .items
                    .iter()
                    .filter(|item| item.matches_filter(filter))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });

    if items.is_empty() {
        let empty = document.create_element("p")?;
        empty.set_class_name("rustdoc-empty");
        empty.set_text_content(Some("No items match the filter"));
        list.append_child(&empty)?;
        return Ok(());
    }

    for item in &items {
        let row = document.create_element("div")?;
        row.set_class_name("rustdoc-item");

        let kind = document.create_element("span")?;
        kind.set_class_name(&format!("item-kind item-kind-{}", item.kind));
        kind.set_text_content(Some(&item.kind));
        row.append_child(&kind)?;

        let path = document.create_element("code")?;
        path.set_class_name("item-path");
        path.set_text_content(Some(&item.path));
        row.append_child(&path)?;

        if let Some(docs) = &item.docs {
            let snippet = crate::utils::first_doc_line(docs, DOC_SNIPPET_MAX_CHARS);
            if !snippet.is_empty() {
                let doc_el = document.create_element("p")?;
                doc_el.set_class_name("item-docs");
                doc_el.set_text_content(Some(&snippet));
                row.append_child(&doc_el)?;
            }
        }

        list.append_child(&row)?;
    }

    Ok(())
}

/// Unmount / remove the page from the DOM.
pub fn unmount_rustdoc(document: &Document) -> Result<(), JsValue> {
    if let Some(el) = document.get_element_by_id(RUSTDOC_CONTAINER_ID) {
        if let Some(parent) = el.parent_node() {
            parent.remove_child(&el)?;
        }
    }
    Ok(())
}

/// Return true if the page is currently mounted.
pub fn is_rustdoc_mounted(document: &Document) -> bool {
    document.get_element_by_id(RUSTDOC_CONTAINER_ID).is_some()
}
