// frontend/src/pages/mod.rs
//
// This module holds the page-level components, one per playground route.
// Each page exposes an async `load()` run on its first visit (the lazy
// half of the route) and `mount_*` / `unmount_*` functions for the DOM.

pub mod hackernews;
pub mod rustdoc;
