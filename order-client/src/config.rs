//! Client configuration

/// Default REST endpoint of a local backend
pub const DEFAULT_API_URL: &str = "http://localhost:54321/rest/v1";

/// Configuration for the order backend client
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | ORDER_API_URL | http://localhost:54321/rest/v1 | REST base URL |
/// | ORDER_API_TOKEN | - | Bearer token of the admin user |
/// | ORDER_API_KEY | - | Project API key sent as `apikey` |
/// | REQUEST_TIMEOUT_SECS | 30 | Request timeout (seconds) |
/// | LOG_LEVEL | info | Log level |
/// | LOG_JSON | false | JSON log output |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST base URL (e.g. "http://localhost:54321/rest/v1")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// API key sent in the `apikey` header
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    pub log_level: String,

    pub log_json: bool,
}

impl ClientConfig {
    /// Create a configuration for `base_url` with defaults for the rest
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            api_key: None,
            timeout: 30,
            log_level: "info".into(),
            log_json: false,
        }
    }

    /// Load configuration from the environment.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            base_url: std::env::var("ORDER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()),
            token: std::env::var("ORDER_API_TOKEN").ok().filter(|t| !t.is_empty()),
            api_key: std::env::var("ORDER_API_KEY").ok().filter(|k| !k.is_empty()),
            timeout: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
