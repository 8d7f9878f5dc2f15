mod api;
mod error;
mod factory;

use crate::{CredentialPrompt, PromptOutcome};

use async_trait::async_trait;

/// Prompt that always answers with the same outcome.
pub(crate) struct FixedPrompt(pub(crate) PromptOutcome);

#[async_trait]
impl CredentialPrompt for FixedPrompt {
    async fn request_credentials(&self) -> PromptOutcome {
        self.0.clone()
    }
}
