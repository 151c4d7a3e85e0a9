//! Main client for the e-Stat SDK.

use crate::config::{default_base_url, with_trailing_slash, ClientConfig, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::error::{EStatError, EStatResult, UpstreamResult};
use crate::transport::HttpTransport;
use estat_core::{translate, Endpoint, Operation, RequestParameters, ToolArguments, ValidationResult};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the e-Stat REST API.
///
/// Holds the application ID and a pooled HTTP client; cheap to clone and
/// safe to share between concurrent calls.
#[derive(Debug, Clone)]
pub struct EStatClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl EStatClient {
    /// Create a new client builder.
    pub fn builder() -> EStatClientBuilder {
        EStatClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> EStatResult<Self> {
        if config.app_id.trim().is_empty() {
            return Err(missing_app_id());
        }
        let config = Arc::new(ClientConfig {
            base_url: with_trailing_slash(config.base_url),
            ..config
        });
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue one request to `endpoint` with already validated parameters.
    pub async fn request(&self, endpoint: Endpoint, params: &RequestParameters) -> UpstreamResult {
        self.http.get(endpoint, params).await
    }

    /// Validate `args` for `operation` and, if they pass, call the upstream.
    ///
    /// The outer error is an argument problem (nothing was sent); the inner
    /// result is the upstream outcome.
    pub async fn call(
        &self,
        operation: Operation,
        args: &ToolArguments,
    ) -> ValidationResult<UpstreamResult> {
        let params = translate(operation, args)?;
        Ok(self.request(operation.endpoint(), &params).await)
    }

    /// Search statistics tables (`getStatsList`).
    pub async fn search_tables(&self, args: &ToolArguments) -> ValidationResult<UpstreamResult> {
        self.call(Operation::SearchTables, args).await
    }

    /// Table metadata (`getMetaInfo`).
    pub async fn meta_info(&self, args: &ToolArguments) -> ValidationResult<UpstreamResult> {
        self.call(Operation::GetMetaInfo, args).await
    }

    /// Statistical values (`getStatsData`).
    pub async fn stats_data(&self, args: &ToolArguments) -> ValidationResult<UpstreamResult> {
        self.call(Operation::GetStatsData, args).await
    }

    /// Dataset filter conditions (`refDataset`).
    pub async fn ref_dataset(&self, args: &ToolArguments) -> ValidationResult<UpstreamResult> {
        self.call(Operation::RefDataset, args).await
    }

    /// File and database catalog (`getDataCatalog`).
    pub async fn data_catalog(&self, args: &ToolArguments) -> ValidationResult<UpstreamResult> {
        self.call(Operation::GetDataCatalog, args).await
    }
}

fn missing_app_id() -> EStatError {
    EStatError::Config("application ID is required (set E_STAT_APP_ID)".to_string())
}

/// Builder for creating an EStatClient.
pub struct EStatClientBuilder {
    base_url: Option<String>,
    app_id: Option<String>,
    timeout: Duration,
    user_agent: String,
}

impl EStatClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            app_id: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the e-Stat application ID.
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Override the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client.
    pub fn build(self) -> EStatResult<EStatClient> {
        let app_id = self
            .app_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(missing_app_id)?;

        let base_url = match self.base_url {
            Some(url) => Url::parse(&url)?,
            None => default_base_url(),
        };

        let config = ClientConfig {
            base_url,
            app_id,
            timeout: self.timeout,
            user_agent: self.user_agent,
        };

        EStatClient::from_config(config)
    }
}

impl Default for EStatClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
