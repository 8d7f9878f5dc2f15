use crate::api::ErrorEnvelope;
use crate::{ProviderError, ProviderErrorResult, SignInRequest, SignInResponse};

use std::time::Duration;

use ln_config::ProviderConfig;
use log::debug;
use reqwest::Client as ReqwestClient;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for the Identity Toolkit REST API
pub struct IdentityToolkitClient {
    base_url: String,
    api_key: String,
    client: ReqwestClient,
}

impl IdentityToolkitClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> ProviderErrorResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
            client,
        })
    }

    pub fn from_config(config: &ProviderConfig) -> ProviderErrorResult<Self> {
        Self::new(
            &config.endpoint,
            config.api_key.as_deref().unwrap_or_default(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchanges an email and password for an ID token.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> ProviderErrorResult<SignInResponse> {
        let url = format!("{}/accounts:signInWithPassword", self.base_url);
        let body = SignInRequest {
            email,
            password,
            return_secure_token: true,
        };

        debug!("POST {}/accounts:signInWithPassword", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| text.clone());
            return Err(ProviderError::api_error(status.as_u16(), message));
        }

        Ok(serde_json::from_str(&text)?)
    }
}
