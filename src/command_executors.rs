// frontend/src/command_executors.rs
//
// Runs the side effects the reducer queued. Executed only after the
// global state's mutable borrow has been released.

use wasm_bindgen_futures::spawn_local;

use crate::messages::{Command, Message};
use crate::router::Route;
use crate::state::{dispatch_global_message, APP_STATE};

pub fn execute_commands(commands: Vec<Command>) {
    for command in commands {
        match command {
            Command::PushHistoryUrl(route) => {
                if let Err(e) = crate::router::push_history_url(route) {
                    web_sys::console::warn_1(
                        &format!("Failed to push history entry: {:?}", e).into(),
                    );
                }
            }

            Command::LoadPage(route) => load_page(route),

            Command::NotifyError(message) => {
                crate::toast::error(&message);
            }

            Command::RefreshUi => refresh_ui(),
        }
    }
}

/// Drive a playground's async load; completion re-enters the reducer as
/// a Loaded or Failed message.
fn load_page(route: Route) {
    match route {
        Route::HackerNews => spawn_local(async {
            match crate::pages::hackernews::load().await {
                Ok(stories) => dispatch_global_message(Message::HackerNewsLoaded(stories)),
                Err(e) => dispatch_global_message(Message::PageLoadFailed {
                    route: Route::HackerNews,
                    error: format!("Failed to load HackerNews stories: {:?}", e),
                }),
            }
        }),
        Route::Rustdoc => spawn_local(async {
            match crate::pages::rustdoc::load().await {
                Ok(index) => dispatch_global_message(Message::RustdocLoaded(index)),
                Err(e) => dispatch_global_message(Message::PageLoadFailed {
                    route: Route::Rustdoc,
                    error: format!("Failed to load crate index: {:?}", e),
                }),
            }
        }),
        Route::NotFound => {}
    }
}

fn refresh_ui() {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };

    APP_STATE.with(|state| {
        let state = state.borrow();
        if let Err(e) = crate::views::render_active_view(&state, &document) {
            web_sys::console::warn_1(&format!("Failed to render view: {:?}", e).into());
        }
    });
}
