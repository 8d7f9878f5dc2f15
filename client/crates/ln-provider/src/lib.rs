//! Identity provider backed by the Identity Toolkit REST API.
//!
//! Interactive sign-in asks a [`CredentialPrompt`] for an email and password
//! and exchanges them for an ID token. The resulting session is persisted in
//! the credential store, so a later start can restore it without asking again.

mod api;
mod client;
mod credential_prompt;
mod error;
mod factory;
mod provider;
mod provider_session;

#[cfg(test)]
mod tests;

pub use api::{SignInRequest, SignInResponse, classify_api_message};
pub use client::IdentityToolkitClient;
pub use credential_prompt::{CredentialPrompt, Credentials, PromptOutcome};
pub use error::{ProviderError, ProviderErrorResult};
pub use factory::IdentityToolkitFactory;
pub use provider::{IdentityToolkitProvider, PROVIDER_NAME};
pub use provider_session::{ProviderSession, clear_session, load_session, save_session};

/// Token lifetime assumed when the service omits or garbles `expiresIn`.
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;
pub const MAX_TOKEN_LIFETIME_SECS: i64 = 24 * 60 * 60;
