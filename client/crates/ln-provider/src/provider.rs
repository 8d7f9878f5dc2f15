use crate::{
    CredentialPrompt, DEFAULT_TOKEN_LIFETIME_SECS, IdentityToolkitClient, MAX_TOKEN_LIFETIME_SECS,
    PromptOutcome, ProviderSession, SignInResponse, clear_session, load_session, save_session,
};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use ln_auth::{
    AuthError, IdentityProvider, Result as AuthResult, SessionBroadcaster, SignInErrorCode,
    Subscription,
};
use ln_core::Identity;
use ln_store::CredentialStore;
use log::{debug, info, warn};

pub const PROVIDER_NAME: &str = "identity-toolkit";

/// Identity provider backed by Identity Toolkit password sign-in.
pub struct IdentityToolkitProvider {
    client: IdentityToolkitClient,
    prompt: Arc<dyn CredentialPrompt>,
    store: Arc<dyn CredentialStore>,
    session_key: String,
    broadcaster: SessionBroadcaster,
    restored: AtomicBool,
    sign_in_in_flight: AtomicBool,
}

impl IdentityToolkitProvider {
    pub fn new(
        client: IdentityToolkitClient,
        prompt: Arc<dyn CredentialPrompt>,
        store: Arc<dyn CredentialStore>,
        session_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            prompt,
            store,
            session_key: session_key.into(),
            broadcaster: SessionBroadcaster::new(),
            restored: AtomicBool::new(false),
            sign_in_in_flight: AtomicBool::new(false),
        }
    }

    /// Loads the persisted session once. Expired sessions are deleted.
    fn restore_persisted_session(&self) {
        if self.restored.swap(true, Ordering::SeqCst) {
            return;
        }

        let session = match load_session(self.store.as_ref(), &self.session_key) {
            Ok(Some(session)) => session,
            Ok(None) => {
                debug!("No persisted provider session");
                return;
            }
            Err(e) => {
                warn!("Could not read persisted provider session: {e}");
                return;
            }
        };

        if session.is_expired_at(Utc::now()) {
            info!(
                "Persisted provider session for {} expired at {}",
                session.identity.id, session.expires_at
            );
            if let Err(e) = clear_session(self.store.as_ref(), &self.session_key) {
                warn!("Could not delete expired provider session: {e}");
            }
            return;
        }

        info!("Restored provider session for {}", session.identity.id);
        self.broadcaster.publish(Some(session.identity));
    }

    fn persist(&self, identity: &Identity, response: &SignInResponse) {
        let lifetime = response
            .expires_in
            .as_deref()
            .and_then(|secs| secs.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS)
            .clamp(0, MAX_TOKEN_LIFETIME_SECS);

        let session = ProviderSession {
            identity: identity.clone(),
            id_token: response.id_token.clone(),
            expires_at: Utc::now() + Duration::seconds(lifetime),
        };

        if let Err(e) = save_session(self.store.as_ref(), &self.session_key, &session) {
            warn!("Signed in but could not persist provider session: {e}");
        }
    }

    async fn prompt_and_sign_in(&self) -> AuthResult<Identity> {
        let credentials = match self.prompt.request_credentials().await {
            PromptOutcome::Credentials(credentials) => credentials,
            PromptOutcome::Dismissed => {
                return Err(AuthError::sign_in_failed(
                    SignInErrorCode::UserCancelled,
                    "credential prompt dismissed",
                ));
            }
            PromptOutcome::Unsupported => {
                return Err(AuthError::sign_in_failed(
                    SignInErrorCode::EnvironmentUnsupported,
                    "no interactive terminal for the credential prompt",
                ));
            }
        };

        let response = self
            .client
            .sign_in_with_password(credentials.email.trim(), &credentials.password)
            .await?;

        let identity = Identity::external(
            response.local_id.clone(),
            response.email.clone(),
            response.display_name.clone(),
        );
        self.persist(&identity, &response);
        self.broadcaster.publish(Some(identity.clone()));

        Ok(identity)
    }
}

/// Clears the in-flight flag when a sign-in attempt ends, however it ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn subscribe(&self) -> Subscription {
        self.restore_persisted_session();
        self.broadcaster.subscribe()
    }

    async fn sign_in_interactive(&self) -> AuthResult<Identity> {
        if self
            .sign_in_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AuthError::sign_in_failed(
                SignInErrorCode::RequestCancelled,
                "another sign-in is already in progress",
            ));
        }
        let _in_flight = InFlight(&self.sign_in_in_flight);

        self.prompt_and_sign_in().await
    }

    async fn sign_out(&self) -> AuthResult<()> {
        let cleared = clear_session(self.store.as_ref(), &self.session_key);
        self.broadcaster.publish(None);

        match cleared {
            Ok(()) => {
                info!("Provider session cleared");
                Ok(())
            }
            Err(e) => Err(AuthError::sign_out_failed(e.to_string())),
        }
    }
}
