// frontend/src/pages/hackernews.rs
//
// The HackerNews playground: top stories from the Firebase API rendered
// as a list. `load()` runs once on first visit; the Refresh control
// re-enters the loading state through the reducer.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::constants::{APP_CONTAINER_ID, HACKERNEWS_CONTAINER_ID, TOP_STORIES_LIMIT};
use crate::models::HnStory;
use crate::network::ApiClient;
use crate::router::Route;
use crate::state::APP_STATE;

/// Fetch the data the page needs before it can render: the top-story id
/// list, then the first `TOP_STORIES_LIMIT` items. Individual items that
/// fail to fetch are skipped with a warning; only an empty result is
/// treated as a page-level failure.
pub async fn load() -> Result<Vec<HnStory>, JsValue> {
    let ids = ApiClient::get_top_story_ids().await?;

    let mut stories = Vec::with_capacity(TOP_STORIES_LIMIT);
    for id in ids.into_iter().take(TOP_STORIES_LIMIT) {
        match ApiClient::get_item(id).await {
            Ok(story) => stories.push(story),
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Skipping story {}: {:?}", id, e).into(),
                );
            }
        }
    }

    if stories.is_empty() {
        return Err(JsValue::from_str("No stories could be fetched"));
    }
    Ok(stories)
}

/// Mount (render) the HackerNews page into the main app container.
pub fn mount_hackernews(document: &Document) -> Result<(), JsValue> {
    let app_container = document
        .get_element_by_id(APP_CONTAINER_ID)
        .ok_or_else(|| JsValue::from_str("Could not find app-container"))?;

    let container: Element =
        if let Some(el) = document.get_element_by_id(HACKERNEWS_CONTAINER_ID) {
            el
        } else {
            let el = document.create_element("div")?;
            el.set_id(HACKERNEWS_CONTAINER_ID);
            el.set_class_name("playground-container");
            app_container.append_child(&el)?;
            el
        };

    // Clear existing children for a clean re-render.
    crate::dom_utils::clear_children(&container);

    // Header row: title + refresh control
    let header = document.create_element("div")?;
    header.set_class_name("playground-header");

    let title = document.create_element("h2")?;
    title.set_text_content(Some("HackerNews Top Stories"));
    header.append_child(&title)?;

    let refresh_btn = document.create_element("button")?;
    refresh_btn.set_attribute("type", "button")?;
    refresh_btn.set_class_name("btn-secondary");
    refresh_btn.set_text_content(Some("Refresh"));
    {
        let refresh = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            crate::toast::info("Refreshing top stories");
            crate::state::dispatch_global_message(crate::messages::Message::RetryPageLoad(
                Route::HackerNews,
            ));
        }) as Box<dyn FnMut(_)>);
        refresh_btn
            .add_event_listener_with_callback("click", refresh.as_ref().unchecked_ref())?;
        refresh.forget();
    }
    header.append_child(&refresh_btn)?;
    container.append_child(&header)?;

    // Story list from the cached state
    let stories = APP_STATE.with(|s| s.borrow().hn_stories.clone());
    let now_ms = crate::utils::now_ms();

    let list = document.create_element("ol")?;
    list.set_class_name("story-list");
    for story in &stories {
        let row = render_story_row(document, story, now_ms)?;
        list.append_child(&row)?;
    }
    container.append_child(&list)?;

    crate::dom_utils::show(&container);
    Ok(())
}

fn render_story_row(document: &Document, story: &HnStory, now_ms: u64) -> Result<Element, JsValue> {
    let row = document.create_element("li")?;
    row.set_class_name("story-row");

    let link = document.create_element("a")?;
    link.set_class_name("story-title");
    link.set_attribute("href", &story.link())?;
    link.set_attribute("target", "_blank")?;
    link.set_attribute("rel", "noopener")?;
    link.set_text_content(Some(&story.title));
    row.append_child(&link)?;

    let meta = document.create_element("span")?;
    meta.set_class_name("story-meta");
    meta.set_text_content(Some(&format!(
        "{} points by {} · {} · {} comments",
        story.score,
        story.by,
        crate::utils::format_relative_time(story.time, now_ms),
        story.descendants,
    )));
    row.append_child(&meta)?;

    Ok(row)
}

/// Unmount / remove the page from the DOM.
pub fn unmount_hackernews(document: &Document) -> Result<(), JsValue> {
    if let Some(el) = document.get_element_by_id(HACKERNEWS_CONTAINER_ID) {
        if let Some(parent) = el.parent_node() {
            parent.remove_child(&el)?;
        }
    }
    Ok(())
}

/// Return true if the page is currently mounted.
pub fn is_hackernews_mounted(document: &Document) -> bool {
    document.get_element_by_id(HACKERNEWS_CONTAINER_ID).is_some()
}
