//! Client configuration

/// Process-wide client configuration, supplied once at startup.
///
/// The credential token is read by every sync call and never written
/// after construction; callers needing a different token build a new
/// client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Root URL of the REST API, e.g. "https://example.com/wp-json"
    pub api_root: String,
    /// API namespace under the root (default: "wp/v2")
    pub namespace: String,
    /// Credential token attached to requests as `X-WP-Nonce` when set
    pub nonce: Option<String>,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_root: "http://localhost/wp-json".to_string(),
            namespace: "wp/v2".to_string(),
            nonce: None,
            timeout_secs: 30,
        }
    }
}
