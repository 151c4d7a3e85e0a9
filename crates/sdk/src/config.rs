//! Configuration types for the e-Stat SDK.

use std::time::Duration;
use url::Url;

/// Base URL of the e-Stat REST API (JSON flavour, version 3.0).
pub const DEFAULT_BASE_URL: &str = "https://api.e-stat.go.jp/rest/3.0/app/json/";

/// Upper bound on a single request, including reading the body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(600_000);

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "estat-mcp/1.0";

/// Configuration for the e-Stat client.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL; endpoint paths are joined onto it.
    pub base_url: Url,
    /// e-Stat application ID, sent as the `appId` query parameter.
    pub app_id: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for the public API with the given application ID.
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            app_id: app_id.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

// The application ID is a credential; keep it out of logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("app_id", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

pub(crate) fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

/// Ensure the base URL ends with `/` so that joining keeps its last segment.
pub(crate) fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
