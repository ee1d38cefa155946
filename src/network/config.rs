/// API route configuration.
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Minimal default pointing at the local development backend. Only used
    /// by unit tests and the earliest start-up phase; production builds bake
    /// the real URL in via the `API_BASE_URL` environment variable.
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the API_BASE_URL environment variable.
    pub fn new() -> Result<Self, &'static str> {
        if let Some(url) = option_env!("API_BASE_URL") {
            Ok(Self {
                base_url: url.trim_end_matches('/').to_string(),
            })
        } else {
            Err("API_BASE_URL environment variable is not set")
        }
    }

    #[allow(dead_code)]
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
        }
    }

    /// The base URL for all API calls.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
