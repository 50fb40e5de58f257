use std::cell::RefCell;
use std::collections::HashMap;

use crate::messages::Message;
use crate::models::{CrateIndex, HnStory};
use crate::router::Route;
use crate::update::update;

/// Load lifecycle of a playground page. A page moves `NotLoaded ->
/// Loading` on its first visit, then `Loading -> Ready` or `Loading ->
/// Failed`, and only re-enters `Loading` through an explicit retry.
#[derive(Debug, Clone, PartialEq)]
pub enum PageStatus {
    NotLoaded,
    Loading,
    Ready,
    Failed(String),
}

// Store global application state
pub struct AppState {
    /// Route the URL currently points at.
    pub active_route: Route,
    /// Load lifecycle per playground route.
    page_status: HashMap<Route, PageStatus>,

    // Loaded page data, kept so revisits render without refetching.
    pub hn_stories: Vec<HnStory>,
    pub crate_index: Option<CrateIndex>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_route: Route::NotFound,
            page_status: HashMap::new(),
            hn_stories: Vec::new(),
            crate_index: None,
        }
    }

    pub fn page_status(&self, route: Route) -> PageStatus {
        self.page_status
            .get(&route)
            .cloned()
            .unwrap_or(PageStatus::NotLoaded)
    }

    pub fn set_page_status(&mut self, route: Route, status: PageStatus) {
        self.page_status.insert(route, status);
    }

    /// Run the reducer and hand back the queued side effects.
    pub fn dispatch(&mut self, msg: Message) -> Vec<crate::messages::Command> {
        update(self, msg)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Dispatch a message against the global state. The mutable borrow is
/// released before any command runs, so executors (and the renderers
/// they call) are free to re-borrow.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| {
        let mut state = state.borrow_mut();
        state.dispatch(msg)
    });

    crate::command_executors::execute_commands(commands);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unvisited_pages_are_not_loaded() {
        let state = AppState::new();
        assert_eq!(state.page_status(Route::HackerNews), PageStatus::NotLoaded);
        assert_eq!(state.page_status(Route::Rustdoc), PageStatus::NotLoaded);
    }

    #[test]
    fn statuses_are_tracked_per_route() {
        let mut state = AppState::new();
        state.set_page_status(Route::HackerNews, PageStatus::Loading);
        assert_eq!(state.page_status(Route::HackerNews), PageStatus::Loading);
        assert_eq!(state.page_status(Route::Rustdoc), PageStatus::NotLoaded);
    }
}
