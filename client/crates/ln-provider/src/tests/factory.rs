use crate::tests::FixedPrompt;
use crate::{IdentityToolkitFactory, PROVIDER_NAME, PromptOutcome};

use std::sync::Arc;

use ln_auth::{AuthError, IdentityProvider, ProviderFactory};
use ln_config::ProviderConfig;
use ln_store::MemoryCredentialStore;

fn factory(api_key: Option<&str>) -> IdentityToolkitFactory {
    let config = ProviderConfig {
        api_key: api_key.map(String::from),
        ..ProviderConfig::default()
    };
    IdentityToolkitFactory::new(
        config,
        Arc::new(MemoryCredentialStore::new()),
        Arc::new(FixedPrompt(PromptOutcome::Dismissed)),
    )
}

#[tokio::test]
async fn given_no_api_key_when_acquired_then_unavailable() {
    let result = factory(None).try_acquire().await;

    assert!(matches!(result, Err(AuthError::ProviderUnavailable { .. })));
}

#[tokio::test]
async fn given_blank_api_key_when_acquired_then_unavailable() {
    let result = factory(Some("   ")).try_acquire().await;

    assert!(matches!(result, Err(AuthError::ProviderUnavailable { .. })));
}

#[tokio::test]
async fn given_api_key_when_acquired_then_provider_available() {
    let provider = factory(Some("test-key")).try_acquire().await.unwrap();

    assert_eq!(provider.name(), PROVIDER_NAME);
}
