use crate::{AuthError, IdentityProvider, Result as AuthResult};

use std::sync::Arc;

use async_trait::async_trait;

/// Builds the identity provider client, if this installation has one.
#[async_trait]
pub trait ProviderFactory: Send + Sync {
    /// Fails with `AuthError::ProviderUnavailable` when the provider cannot be
    /// constructed, e.g. because its configuration is missing.
    async fn try_acquire(&self) -> AuthResult<Arc<dyn IdentityProvider>>;
}

/// Factory for installations without an identity provider.
#[derive(Debug, Clone)]
pub struct UnavailableProviderFactory {
    reason: String,
}

impl UnavailableProviderFactory {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ProviderFactory for UnavailableProviderFactory {
    async fn try_acquire(&self) -> AuthResult<Arc<dyn IdentityProvider>> {
        Err(AuthError::provider_unavailable(self.reason.clone()))
    }
}
