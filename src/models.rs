//! Serde models for the data the playground pages consume.

use serde::Deserialize;

/// A HackerNews item as returned by the Firebase API
/// (`/v0/item/{id}.json`). Fields other than `id` and `title` are
/// frequently absent, so everything else defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HnStory {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub by: String,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub descendants: u32,
    /// Unix timestamp (seconds) of submission.
    #[serde(default)]
    pub time: u64,
    /// External link; absent for Ask/Show text posts.
    #[serde(default)]
    pub url: Option<String>,
}

impl HnStory {
    /// Link target for the story title: the external URL when present,
    /// otherwise the item's discussion page on news.ycombinator.com.
    pub fn link(&self) -> String {
        match &self.url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!("https://news.ycombinator.com/item?id={}", self.id),
        }
    }
}

/// Pre-generated summary of a crate's rustdoc output, served as a static
/// JSON asset next to the app bundle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrateIndex {
    pub crate_name: String,
    #[serde(default)]
    pub crate_version: Option<String>,
    pub format_version: u32,
    #[serde(default)]
    pub items: Vec<CrateItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrateItem {
    pub name: String,
    /// Item kind as rustdoc names it ("struct", "enum", "function", ...).
    pub kind: String,
    /// Fully qualified path, e.g. `mycrate::module::Type`.
    pub path: String,
    #[serde(default)]
    pub docs: Option<String>,
}

impl CrateItem {
    /// True when the item matches a case-insensitive substring filter.
    pub fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.path.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_link_falls_back_to_discussion_page() {
        let story: HnStory = serde_json::from_str(
            r#"{"id": 8863, "title": "My YC app", "by": "dhouston", "score": 104,
                "descendants": 71, "time": 1175714200, "type": "story"}"#,
        )
        .unwrap();
        assert_eq!(story.link(), "https://news.ycombinator.com/item?id=8863");

        let linked: HnStory = serde_json::from_str(
            r#"{"id": 1, "title": "t", "url": "https://example.com/post"}"#,
        )
        .unwrap();
        assert_eq!(linked.link(), "https://example.com/post");
    }

    #[test]
    fn sparse_item_json_deserializes() {
        // Deleted/dead items come back with almost no fields.
        let story: HnStory = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(story.title, "");
        assert_eq!(story.score, 0);
        assert!(story.url.is_none());
    }

    #[test]
    fn item_filter_matches_name_and_path() {
        let item = CrateItem {
            name: "Adapter".to_string(),
            kind: "struct".to_string(),
            path: "hn_adapter::Adapter".to_string(),
            docs: None,
        };
        assert!(item.matches_filter(""));
        assert!(item.matches_filter("adapt"));
        assert!(item.matches_filter("HN_ADAPTER"));
        assert!(!item.matches_filter("vertex"));
    }
}
