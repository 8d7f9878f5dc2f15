use crate::{Result as AuthResult, Subscription};

use async_trait::async_trait;
use ln_core::Identity;

/// An external identity provider client.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Subscribes to session changes, including a session the provider
    /// restores on its own after a restart.
    fn subscribe(&self) -> Subscription;

    /// Runs the interactive sign-in.
    ///
    /// Failures are `AuthError::SignInFailed` carrying a `SignInErrorCode`.
    async fn sign_in_interactive(&self) -> AuthResult<Identity>;

    /// Ends the provider-side session. Best effort.
    async fn sign_out(&self) -> AuthResult<()>;
}
