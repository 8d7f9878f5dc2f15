use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PROVIDER_ENDPOINT, DEFAULT_PROVIDER_SESSION_KEY,
    DEFAULT_PROVIDER_TIMEOUT_SECS, MAX_PROVIDER_TIMEOUT_SECS, MIN_PROVIDER_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Settings for the external identity provider.
///
/// Leaving `api_key` unset is valid: the app then runs with demo sign-in only.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Store key holding the provider's own persisted session
    pub session_key: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: String::from(DEFAULT_PROVIDER_ENDPOINT),
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
            session_key: String::from(DEFAULT_PROVIDER_SESSION_KEY),
        }
    }
}

impl ProviderConfig {
    /// True when an API key is present and non-blank.
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_PROVIDER_TIMEOUT_SECS..=MAX_PROVIDER_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::provider(format!(
                "provider.timeout_secs must be {}-{}, got {}",
                MIN_PROVIDER_TIMEOUT_SECS, MAX_PROVIDER_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::provider(format!(
                "provider.endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }

        if self.session_key.trim().is_empty() {
            return Err(ConfigError::provider("provider.session_key cannot be empty"));
        }

        Ok(())
    }
}
