use anyhow::{bail, Context, Result};
use estat_sdk::{EStatClient, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Server configuration, read from an optional TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(default)]
    pub estat: EStatConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct EStatConfig {
    #[serde(default)]
    pub app_id: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    600_000
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for EStatConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl std::fmt::Debug for EStatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EStatConfig")
            .field("app_id", &self.app_id.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Values given on the command line or through the environment.
/// They win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub app_id: Option<String>,
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl McpConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        // Load config file if it exists, otherwise use defaults
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .context("Failed to read configuration file")?;
            let config: Self =
                toml::from_str(&content).context("Failed to parse configuration file")?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::info!("Configuration file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(app_id) = overrides.app_id.filter(|id| !id.trim().is_empty()) {
            self.estat.app_id = Some(app_id);
        }
        if let Some(base_url) = overrides.base_url {
            self.estat.base_url = base_url;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.estat.timeout_ms = timeout_ms;
        }
        self
    }

    /// Reject values the client cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.estat.timeout_ms == 0 {
            bail!("timeout_ms must be greater than 0");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.estat.timeout_ms)
    }

    /// Build the e-Stat client; fails when no application ID is configured
    pub fn build_client(&self) -> Result<EStatClient> {
        self.validate()?;
        let app_id = self.estat.app_id.clone().unwrap_or_default();

        EStatClient::builder()
            .app_id(app_id)
            .base_url(self.estat.base_url.clone())
            .timeout(self.timeout())
            .user_agent(self.estat.user_agent.clone())
            .build()
            .context("Failed to create e-Stat client")
    }
}
