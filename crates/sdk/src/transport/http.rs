//! HTTP transport layer for the e-Stat SDK.

use crate::config::ClientConfig;
use crate::error::{EStatResult, ErrorResult, UpstreamResult};
use estat_core::{Endpoint, RequestParameters};
use reqwest::{header, Client};
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> EStatResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("*/*"));

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build the request URL: base + endpoint, `appId` first, then every
    /// non-empty parameter in order.
    fn build_url(&self, endpoint: Endpoint, params: &RequestParameters) -> EStatResult<Url> {
        let mut url = self.config.base_url.join(endpoint.path())?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("appId", &self.config.app_id);
            for (name, value) in params.iter().filter(|(_, v)| !v.is_empty()) {
                query.append_pair(name, &value.to_string());
            }
        }
        Ok(url)
    }

    /// Execute a GET request against `endpoint`.
    ///
    /// Never fails with a transport error: every failure path is turned into
    /// an [`ErrorResult`]. A 2xx body is returned as decoded, without looking
    /// at any error fields the upstream may have embedded in it.
    pub async fn get(&self, endpoint: Endpoint, params: &RequestParameters) -> UpstreamResult {
        let url = self
            .build_url(endpoint, params)
            .map_err(|e| ErrorResult::unknown(&e, e.to_string()))?;

        // The URL carries the application ID, so only log parameter names.
        debug!(endpoint = %endpoint, params = ?params.names(), "GET request");

        let response = self.client.get(url).send().await.map_err(|e| {
            let result = ErrorResult::from_transport(&e);
            warn!(endpoint = %endpoint, status = %result.status, error = %e, "Request failed");
            result
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %endpoint, status = status.as_u16(), "Upstream returned error status");
            return Err(ErrorResult::http_status(status.as_u16()));
        }

        response.json::<serde_json::Value>().await.map_err(|e| {
            let result = ErrorResult::from_transport(&e);
            warn!(endpoint = %endpoint, status = %result.status, error = %e, "Failed to read response body");
            result
        })
    }
}
