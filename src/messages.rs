// frontend/src/messages.rs
//
// The events that can occur in the shell, plus the side-effect commands
// the reducer queues in response.
//
use crate::models::{CrateIndex, HnStory};
use crate::router::Route;

#[derive(Debug, Clone)]
pub enum Message {
    /// In-app navigation; pushes a history entry.
    NavigateTo(Route),
    /// The URL changed underneath us (initial load or popstate); no
    /// history entry is pushed.
    UrlChanged(Route),
    /// User asked to reload a playground (retry after failure, or the
    /// refresh control on a loaded page).
    RetryPageLoad(Route),

    // Page load completions
    HackerNewsLoaded(Vec<HnStory>),
    RustdocLoaded(CrateIndex),
    PageLoadFailed { route: Route, error: String },
}

/// Side effects queued by `update` and executed once the state borrow is
/// released (see `command_executors`).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    PushHistoryUrl(Route),
    LoadPage(Route),
    NotifyError(String),
    RefreshUi,
}
