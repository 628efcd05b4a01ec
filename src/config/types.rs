use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::submit::DEFAULT_SOURCE_TAG;

/// Automation hook the generator posts to out of the box.
pub const DEFAULT_WEBHOOK_URL: &str = "https://hooks.zapier.com/hooks/catch/5528813/u4krjb2/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub webhook: WebhookConfig,

    #[serde(default)]
    pub wizard: WizardConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    #[serde(default = "default_webhook_url")]
    pub url: String,
    /// Whole-request timeout for the single POST.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Sent as `triggered_from`.
    #[serde(default = "default_source_tag")]
    pub source_tag: String,
}

fn default_webhook_url() -> String {
    DEFAULT_WEBHOOK_URL.into()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_source_tag() -> String {
    DEFAULT_SOURCE_TAG.into()
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: default_webhook_url(),
            timeout_secs: default_timeout_secs(),
            source_tag: default_source_tag(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Ignore "back" while the report is being sent.
    #[serde(default)]
    pub lock_back_while_submitting: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.webhook.url).map_err(|e| {
            ConfigError::Validation(format!("webhook.url `{}` is not a URL: {e}", self.webhook.url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "webhook.url must use http or https, got `{}`",
                url.scheme()
            )));
        }
        if self.webhook.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "webhook.timeout_secs must be greater than zero".into(),
            ));
        }
        if self.webhook.source_tag.trim().is_empty() {
            return Err(ConfigError::Validation(
                "webhook.source_tag cannot be empty".into(),
            ));
        }
        Ok(())
    }
}
