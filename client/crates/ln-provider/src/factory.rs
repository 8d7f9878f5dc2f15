use crate::{CredentialPrompt, IdentityToolkitClient, IdentityToolkitProvider};

use std::sync::Arc;

use async_trait::async_trait;
use ln_auth::{AuthError, IdentityProvider, ProviderFactory, Result as AuthResult};
use ln_config::ProviderConfig;
use ln_store::CredentialStore;
use log::debug;

/// Acquires an [`IdentityToolkitProvider`] when the installation is configured
/// for one.
pub struct IdentityToolkitFactory {
    config: ProviderConfig,
    store: Arc<dyn CredentialStore>,
    prompt: Arc<dyn CredentialPrompt>,
}

impl IdentityToolkitFactory {
    pub fn new(
        config: ProviderConfig,
        store: Arc<dyn CredentialStore>,
        prompt: Arc<dyn CredentialPrompt>,
    ) -> Self {
        Self {
            config,
            store,
            prompt,
        }
    }
}

#[async_trait]
impl ProviderFactory for IdentityToolkitFactory {
    async fn try_acquire(&self) -> AuthResult<Arc<dyn IdentityProvider>> {
        if !self.config.is_configured() {
            return Err(AuthError::provider_unavailable(
                "provider.api_key is not set",
            ));
        }

        let client = IdentityToolkitClient::from_config(&self.config).map_err(|e| {
            AuthError::provider_unavailable(format!("could not build HTTP client: {e}"))
        })?;
        debug!("Identity Toolkit client ready for {}", client.base_url());

        Ok(Arc::new(IdentityToolkitProvider::new(
            client,
            Arc::clone(&self.prompt),
            Arc::clone(&self.store),
            self.config.session_key.clone(),
        )))
    }
}
