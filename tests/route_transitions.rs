//! Reducer-level tests for the routing/suspense contract: navigation
//! starts a playground's load exactly once, popstate never pushes a
//! history entry, and failures re-enter loading only through an explicit
//! retry.

use wasm_bindgen_test::*;

use playground_frontend::messages::{Command, Message};
use playground_frontend::models::{CrateIndex, HnStory};
use playground_frontend::router::Route;
use playground_frontend::state::{AppState, PageStatus};
use playground_frontend::update::update;

wasm_bindgen_test_configure!(run_in_browser);

fn sample_story(id: u64) -> HnStory {
    serde_json::from_str(&format!(
        r#"{{"id": {}, "title": "story", "by": "pg", "score": 1, "time": 0}}"#,
        id
    ))
    .unwrap()
}

fn sample_index() -> CrateIndex {
    serde_json::from_str(
        r#"{"crate_name": "demo", "crate_version": "0.1.0", "format_version": 27,
            "items": [{"name": "Adapter", "kind": "struct", "path": "demo::Adapter"}]}"#,
    )
    .unwrap()
}

#[wasm_bindgen_test]
fn first_navigation_starts_the_page_load() {
    let mut state = AppState::new();

    let cmds = update(&mut state, Message::NavigateTo(Route::HackerNews));

    assert_eq!(state.active_route, Route::HackerNews);
    assert_eq!(state.page_status(Route::HackerNews), PageStatus::Loading);
    assert!(cmds.contains(&Command::PushHistoryUrl(Route::HackerNews)));
    assert!(cmds.contains(&Command::LoadPage(Route::HackerNews)));
    assert!(cmds.contains(&Command::RefreshUi));
}

#[wasm_bindgen_test]
fn url_change_does_not_push_history() {
    let mut state = AppState::new();

    let cmds = update(&mut state, Message::UrlChanged(Route::Rustdoc));

    assert_eq!(state.active_route, Route::Rustdoc);
    assert!(cmds.contains(&Command::LoadPage(Route::Rustdoc)));
    assert!(!cmds
        .iter()
        .any(|c| matches!(c, Command::PushHistoryUrl(_))));
}

#[wasm_bindgen_test]
fn load_runs_at_most_once_per_route() {
    let mut state = AppState::new();

    update(&mut state, Message::NavigateTo(Route::HackerNews));

    // Navigating away and back while the load is in flight must not
    // queue a second fetch.
    update(&mut state, Message::NavigateTo(Route::Rustdoc));
    let cmds = update(&mut state, Message::NavigateTo(Route::HackerNews));
    assert!(!cmds.contains(&Command::LoadPage(Route::HackerNews)));

    // Same after the page is ready.
    update(
        &mut state,
        Message::HackerNewsLoaded(vec![sample_story(1)]),
    );
    let cmds = update(&mut state, Message::NavigateTo(Route::HackerNews));
    assert!(!cmds.contains(&Command::LoadPage(Route::HackerNews)));
}

#[wasm_bindgen_test]
fn loaded_data_is_cached_on_the_state() {
    let mut state = AppState::new();
    update(&mut state, Message::UrlChanged(Route::HackerNews));
    update(
        &mut state,
        Message::HackerNewsLoaded(vec![sample_story(1), sample_story(2)]),
    );

    assert_eq!(state.page_status(Route::HackerNews), PageStatus::Ready);
    assert_eq!(state.hn_stories.len(), 2);

    update(&mut state, Message::UrlChanged(Route::Rustdoc));
    update(&mut state, Message::RustdocLoaded(sample_index()));
    assert_eq!(state.page_status(Route::Rustdoc), PageStatus::Ready);
    assert_eq!(state.crate_index.as_ref().unwrap().crate_name, "demo");

    // The other page's status is untouched.
    assert_eq!(state.page_status(Route::HackerNews), PageStatus::Ready);
}

#[wasm_bindgen_test]
fn failure_surfaces_and_retry_restarts_one_load() {
    let mut state = AppState::new();
    update(&mut state, Message::UrlChanged(Route::Rustdoc));

    let cmds = update(
        &mut state,
        Message::PageLoadFailed {
            route: Route::Rustdoc,
            error: "boom".to_string(),
        },
    );
    assert_eq!(
        state.page_status(Route::Rustdoc),
        PageStatus::Failed("boom".to_string())
    );
    assert!(cmds.contains(&Command::NotifyError("boom".to_string())));

    // Re-navigating to a failed page does not implicitly retry.
    let cmds = update(&mut state, Message::UrlChanged(Route::Rustdoc));
    assert!(!cmds.contains(&Command::LoadPage(Route::Rustdoc)));

    // An explicit retry queues exactly one fetch.
    let cmds = update(&mut state, Message::RetryPageLoad(Route::Rustdoc));
    assert_eq!(state.page_status(Route::Rustdoc), PageStatus::Loading);
    assert_eq!(
        cmds.iter()
            .filter(|c| matches!(c, Command::LoadPage(Route::Rustdoc)))
            .count(),
        1
    );
}

#[wasm_bindgen_test]
fn unknown_routes_have_no_load_lifecycle() {
    let mut state = AppState::new();

    let cmds = update(&mut state, Message::UrlChanged(Route::NotFound));
    assert_eq!(state.active_route, Route::NotFound);
    assert!(!cmds.iter().any(|c| matches!(c, Command::LoadPage(_))));

    // Retry on a non-playground route is ignored outright.
    let cmds = update(&mut state, Message::RetryPageLoad(Route::NotFound));
    assert!(cmds.is_empty());
}
