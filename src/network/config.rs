/// Endpoint configuration for the playground data sources.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the HackerNews Firebase API.
    hn_base_url: String,
    /// URL of the pre-generated rustdoc crate index asset.
    rustdoc_index_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            hn_base_url: crate::constants::DEFAULT_HN_API_BASE.to_string(),
            rustdoc_index_url: crate::constants::DEFAULT_RUSTDOC_INDEX_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Build the config, honouring build-time overrides. `HN_API_BASE_URL`
    /// and `RUSTDOC_INDEX_URL` are read via `option_env!` so a deployment
    /// can point the playgrounds elsewhere without code changes.
    pub fn new() -> Self {
        let hn_base_url = option_env!("HN_API_BASE_URL")
            .unwrap_or(crate::constants::DEFAULT_HN_API_BASE)
            .trim_end_matches('/')
            .to_string();
        let rustdoc_index_url = option_env!("RUSTDOC_INDEX_URL")
            .unwrap_or(crate::constants::DEFAULT_RUSTDOC_INDEX_URL)
            .to_string();
        Self {
            hn_base_url,
            rustdoc_index_url,
        }
    }

    pub fn rustdoc_index_url(&self) -> &str {
        &self.rustdoc_index_url
    }

    /// Full URL for a HackerNews API path, e.g. `/topstories.json`.
    pub fn hn_url(&self, path: &str) -> String {
        format!("{}{}", self.hn_base_url, path)
    }

    /// Config with explicit URLs, bypassing the environment overrides.
    pub fn from_urls(hn_base_url: &str, rustdoc_index_url: &str) -> Self {
        Self {
            hn_base_url: hn_base_url.trim_end_matches('/').to_string(),
            rustdoc_index_url: rustdoc_index_url.to_string(),
        }
    }
}

thread_local! {
    static API_CONFIG: ApiConfig = ApiConfig::new();
}

/// Read a value out of the global config.
pub fn with_config<T>(f: impl FnOnce(&ApiConfig) -> T) -> T {
    API_CONFIG.with(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base() {
        let cfg = ApiConfig::from_urls("https://example.com/v0/", "/idx.json");
        assert_eq!(cfg.hn_url("/topstories.json"), "https://example.com/v0/topstories.json");
    }
}
