// frontend/src/views.rs
//
// Renders the shell for the current route: the loading indicator while a
// playground's first load is in flight, the page itself once ready, an
// inline error panel with a retry action when the load failed, and a
// blank shell for unmatched paths.
//
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::components::spinner::{hide_spinner, show_spinner};
use crate::constants::{APP_CONTAINER_ID, LOAD_ERROR_ID};
use crate::router::Route;
use crate::state::{AppState, PageStatus};

// Render the appropriate view based on the route and its load status
pub fn render_active_view(state: &AppState, document: &Document) -> Result<(), JsValue> {
    let route = state.active_route;

    // Only one page is ever mounted; drop the one we navigated away from.
    if route != Route::HackerNews {
        crate::pages::hackernews::unmount_hackernews(document)?;
    }
    if route != Route::Rustdoc {
        crate::pages::rustdoc::unmount_rustdoc(document)?;
    }

    if !route.is_playground() {
        hide_spinner(document);
        remove_error_panel(document)?;
        return Ok(());
    }

    match state.page_status(route) {
        PageStatus::NotLoaded | PageStatus::Loading => {
            // Suspense fallback: nothing but the spinner until the page
            // reports in.
            remove_error_panel(document)?;
            unmount_route(route, document)?;
            show_spinner(document)?;
        }
        PageStatus::Ready => {
            hide_spinner(document);
            remove_error_panel(document)?;
            mount_route(route, document)?;
        }
        PageStatus::Failed(error) => {
            hide_spinner(document);
            unmount_route(route, document)?;
            render_error_panel(document, route, &error)?;
        }
    }

    Ok(())
}

fn mount_route(route: Route, document: &Document) -> Result<(), JsValue> {
    match route {
        Route::HackerNews => crate::pages::hackernews::mount_hackernews(document),
        Route::Rustdoc => crate::pages::rustdoc::mount_rustdoc(document),
        Route::NotFound => Ok(()),
    }
}

fn unmount_route(route: Route, document: &Document) -> Result<(), JsValue> {
    match route {
        Route::HackerNews => crate::pages::hackernews::unmount_hackernews(document),
        Route::Rustdoc => crate::pages::rustdoc::unmount_rustdoc(document),
        Route::NotFound => Ok(()),
    }
}

fn render_error_panel(document: &Document, route: Route, error: &str) -> Result<(), JsValue> {
    let app_container = document
        .get_element_by_id(APP_CONTAINER_ID)
        .ok_or_else(|| JsValue::from_str("Could not find app-container"))?;

    let panel: Element = if let Some(el) = document.get_element_by_id(LOAD_ERROR_ID) {
        el
    } else {
        let el = document.create_element("div")?;
        el.set_id(LOAD_ERROR_ID);
        el.set_class_name("load-error");
        app_container.append_child(&el)?;
        el
    };

    crate::dom_utils::clear_children(&panel);

    let message = document.create_element("p")?;
    message.set_class_name("load-error-message");
    message.set_text_content(Some(error));
    panel.append_child(&message)?;

    let retry_btn = document.create_element("button")?;
    retry_btn.set_attribute("type", "button")?;
    retry_btn.set_class_name("btn-primary");
    retry_btn.set_text_content(Some("Try again"));
    {
        let retry = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            crate::state::dispatch_global_message(crate::messages::Message::RetryPageLoad(route));
        }) as Box<dyn FnMut(_)>);
        retry_btn.add_event_listener_with_callback("click", retry.as_ref().unchecked_ref())?;
        retry.forget();
    }
    panel.append_child(&retry_btn)?;

    Ok(())
}

fn remove_error_panel(document: &Document) -> Result<(), JsValue> {
    if let Some(panel) = document.get_element_by_id(LOAD_ERROR_ID) {
        if let Some(parent) = panel.parent_node() {
            parent.remove_child(&panel)?;
        }
    }
    Ok(())
}
