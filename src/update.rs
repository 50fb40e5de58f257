// frontend/src/update.rs
//
// The reducer: applies a Message to AppState and queues side-effect
// commands. Deliberately free of DOM and JS calls so it runs under both
// native unit tests and the wasm integration suite.
//
use crate::messages::{Command, Message};
use crate::router::Route;
use crate::state::{AppState, PageStatus};

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        Message::NavigateTo(route) => {
            state.active_route = route;
            commands.push(Command::PushHistoryUrl(route));
            start_load_if_needed(state, route, &mut commands);
            commands.push(Command::RefreshUi);
        }

        Message::UrlChanged(route) => {
            state.active_route = route;
            start_load_if_needed(state, route, &mut commands);
            commands.push(Command::RefreshUi);
        }

        Message::RetryPageLoad(route) => {
            if route.is_playground() {
                state.set_page_status(route, PageStatus::Loading);
                commands.push(Command::LoadPage(route));
                commands.push(Command::RefreshUi);
            }
        }

        Message::HackerNewsLoaded(stories) => {
            state.hn_stories = stories;
            state.set_page_status(Route::HackerNews, PageStatus::Ready);
            commands.push(Command::RefreshUi);
        }

        Message::RustdocLoaded(index) => {
            state.crate_index = Some(index);
            state.set_page_status(Route::Rustdoc, PageStatus::Ready);
            commands.push(Command::RefreshUi);
        }

        Message::PageLoadFailed { route, error } => {
            state.set_page_status(route, PageStatus::Failed(error.clone()));
            commands.push(Command::NotifyError(error));
            commands.push(Command::RefreshUi);
        }
    }

    commands
}

/// Kick off a playground's load on first visit. Ready and Failed pages
/// keep their status; Loading pages already have a fetch in flight.
fn start_load_if_needed(state: &mut AppState, route: Route, commands: &mut Vec<Command>) {
    if !route.is_playground() {
        return;
    }
    if state.page_status(route) == PageStatus::NotLoaded {
        state.set_page_status(route, PageStatus::Loading);
        commands.push(Command::LoadPage(route));
    }
}
