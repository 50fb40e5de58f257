// frontend/src/router.rs
//
// URL routing for the playground shell. Two routes are declared,
// `/hackernews` and `/rustdoc`; everything else renders a blank shell.
// Back/forward navigation comes in through a `popstate` listener that is
// registered once and kept alive in a thread-local cell.

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::messages::Message;
use crate::state::dispatch_global_message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    HackerNews,
    Rustdoc,
    NotFound,
}

impl Route {
    /// Map a URL path onto a route. Trailing slashes are tolerated and
    /// query strings / fragments are ignored; matching is case-sensitive.
    pub fn parse(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        match path {
            "/hackernews" => Route::HackerNews,
            "/rustdoc" => Route::Rustdoc,
            _ => Route::NotFound,
        }
    }

    /// Canonical path for the route, used when pushing history entries.
    pub fn as_path(&self) -> &'static str {
        match self {
            Route::HackerNews => "/hackernews",
            Route::Rustdoc => "/rustdoc",
            Route::NotFound => "/",
        }
    }

    /// True for routes backed by a playground page (i.e. routes that have
    /// a load lifecycle).
    pub fn is_playground(&self) -> bool {
        !matches!(self, Route::NotFound)
    }
}

/// Read the route for the URL the browser is currently showing.
pub fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    Route::parse(&path)
}

/// Push a history entry for the route without reloading the page.
pub fn push_history_url(route: Route) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(route.as_path()))?;
    Ok(())
}

thread_local! {
    static POPSTATE_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::PopStateEvent)>>> =
        RefCell::new(None);
}

/// Register the `popstate` listener if not already registered.
pub fn register_popstate_listener() -> Result<(), JsValue> {
    POPSTATE_HANDLER.with(|cell| {
        if cell.borrow().is_some() {
            return Ok(());
        }

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::wrap(Box::new(move |_: web_sys::PopStateEvent| {
            dispatch_global_message(Message::UrlChanged(current_route()));
        }) as Box<dyn FnMut(_)>);

        window
            .add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref())?;
        cell.replace(Some(callback));
        Ok(())
    })
}
