//! Build-time configuration for the backend endpoint. Values are public;
//! do not store secrets here.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads the API base URL, defaulting to a same-origin `/api` prefix.
    pub fn load() -> Self {
        let api_base_url = option_env!("MENTORA_API_BASE_URL").unwrap_or("/api");
        Self {
            api_base_url: api_base_url.to_string(),
        }
    }
}
