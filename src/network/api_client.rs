use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::models::{CrateIndex, HnStory};
use crate::network::config::with_config;

// REST client for the playground data sources
pub struct ApiClient;

impl ApiClient {
    // ---------------- HackerNews ----------------

    /// Fetch the current top-story id list (500 ids, newest ranking
    /// first). Callers slice it down to the page size they need.
    pub async fn get_top_story_ids() -> Result<Vec<u64>, JsValue> {
        let url = with_config(|cfg| cfg.hn_url("/topstories.json"));
        let body = Self::fetch_json(&url, "GET", None).await?;
        serde_json::from_str(&body)
            .map_err(|e| JsValue::from_str(&format!("Invalid top-stories payload: {}", e)))
    }

    /// Fetch a single item by id.
    pub async fn get_item(id: u64) -> Result<HnStory, JsValue> {
        let url = with_config(|cfg| cfg.hn_url(&format!("/item/{}.json", id)));
        let body = Self::fetch_json(&url, "GET", None).await?;
        // Deleted items come back as literal `null`.
        if body.trim() == "null" {
            return Err(JsValue::from_str(&format!("Item {} does not exist", id)));
        }
        serde_json::from_str(&body)
            .map_err(|e| JsValue::from_str(&format!("Invalid item payload for {}: {}", id, e)))
    }

    // ---------------- Rustdoc ----------------

    /// Fetch the pre-generated crate index asset.
    pub async fn get_crate_index() -> Result<CrateIndex, JsValue> {
        let url = with_config(|cfg| cfg.rustdoc_index_url().to_string());
        let body = Self::fetch_json(&url, "GET", None).await?;
        serde_json::from_str(&body)
            .map_err(|e| JsValue::from_str(&format!("Invalid crate index payload: {}", e)))
    }

    // ---------------- Shared fetch helper ----------------

    pub async fn fetch_json(url: &str, method: &str, body: Option<&str>) -> Result<String, JsValue> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        if let Some(data) = body {
            let js_body = JsValue::from_str(data);
            opts.set_body(&js_body);
            headers.append("Content-Type", "application/json")?;
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().expect("no global window exists");
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            return Err(JsValue::from_str(&format!(
                "API request failed: {} {}",
                resp.status(),
                resp.status_text()
            )));
        }

        // Parse body as text – caller decodes JSON.
        let text = JsFuture::from(resp.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }
}
