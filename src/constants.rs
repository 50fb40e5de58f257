// Element ids and tunables shared across the shell - single source of truth.

// DOM ids
pub const APP_CONTAINER_ID: &str = "app-container";
pub const SPINNER_ID: &str = "loading-spinner";
pub const LOAD_ERROR_ID: &str = "load-error";
pub const HACKERNEWS_CONTAINER_ID: &str = "hackernews-container";
pub const RUSTDOC_CONTAINER_ID: &str = "rustdoc-container";
pub const RUSTDOC_ITEM_LIST_ID: &str = "rustdoc-item-list";
pub const RUSTDOC_FILTER_INPUT_ID: &str = "rustdoc-filter-input";

// Default endpoints (overridable at build time, see network::config)
pub const DEFAULT_HN_API_BASE: &str = "https://hacker-news.firebaseio.com/v0";
pub const DEFAULT_RUSTDOC_INDEX_URL: &str = "/assets/rustdoc-index.json";

/// How many top stories the HackerNews playground fetches per load.
pub const TOP_STORIES_LIMIT: usize = 30;

/// How many characters of a doc comment the rustdoc item list shows.
pub const DOC_SNIPPET_MAX_CHARS: usize = 120;
