use crate::{
    AuthError, IdentityProvider, IdentityUpdate, ProviderFactory, Result as AuthResult,
    SessionState, SignInErrorCode, Subscription, View,
};

use std::sync::Arc;

use ln_core::Identity;
use ln_store::{CredentialStore, clear_identity, load_identity, save_identity};
use log::{debug, error, info, warn};
use tokio::sync::watch;

/// Owns the sign-in state and every transition of it.
///
/// The controller is driven from a single task. Provider notifications are
/// queued on the subscription and applied last-write-wins: pending updates are
/// drained before each operation commits its own result, so an operation's
/// outcome is never overwritten by a notification that was already queued.
pub struct SessionController {
    factory: Arc<dyn ProviderFactory>,
    store: Arc<dyn CredentialStore>,
    demo_user_key: String,
    provider: Option<Arc<dyn IdentityProvider>>,
    subscription: Option<Subscription>,
    state_tx: watch::Sender<SessionState>,
    restored: bool,
}

impl SessionController {
    pub fn new(
        factory: Arc<dyn ProviderFactory>,
        store: Arc<dyn CredentialStore>,
        demo_user_key: impl Into<String>,
    ) -> Self {
        let (state_tx, _) = watch::channel(SessionState::SignedOut);

        Self {
            factory,
            store,
            demo_user_key: demo_user_key.into(),
            provider: None,
            subscription: None,
            state_tx,
            restored: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.state_tx.borrow().identity().cloned()
    }

    pub fn using_external_provider(&self) -> bool {
        self.state_tx.borrow().is_external()
    }

    pub fn view(&self) -> View {
        self.state_tx.borrow().view()
    }

    /// Read-only view of the session for the notes screen and other observers.
    pub fn watch(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    pub fn has_subscription(&self) -> bool {
        self.subscription.is_some()
    }

    /// Recovers a session at startup without user interaction.
    ///
    /// With a provider: subscribes to its session changes and applies whatever
    /// it has already delivered. A persisted demo identity is not consulted on
    /// this path, so an external session always wins over a stale local record.
    ///
    /// Without a provider: restores the persisted demo identity, if any. The
    /// provider is not retried afterwards.
    pub async fn restore_session(&mut self) {
        if self.restored {
            warn!("Session already restored, ignoring repeated restore");
            return;
        }
        self.restored = true;

        match self.factory.try_acquire().await {
            Ok(provider) => {
                info!(
                    "Identity provider '{}' available, subscribing to session changes",
                    provider.name()
                );
                self.subscription = Some(provider.subscribe());
                self.provider = Some(provider);
                self.apply_pending();
            }
            Err(e) => {
                info!("Identity provider not available, using demo mode: {e}");
                self.restore_local_identity();
            }
        }
    }

    fn restore_local_identity(&mut self) {
        match load_identity(self.store.as_ref(), &self.demo_user_key) {
            Ok(loaded) => {
                if let Some(identity) = loaded.identity {
                    info!("Restored demo identity {}", identity.id);
                    self.set_state(SessionState::SignedInLocal(identity));
                } else if let Some(reason) = loaded.corruption_error {
                    warn!("Ignoring unreadable demo identity record: {reason}");
                } else {
                    debug!("No persisted demo identity");
                }
            }
            Err(e) => warn!("Could not read persisted demo identity: {e}"),
        }
    }

    /// Applies every queued provider notification without waiting.
    /// Returns how many were applied.
    pub fn apply_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Some(update) = self.subscription.as_mut().and_then(Subscription::try_next) {
            self.apply_provider_update(update);
            applied += 1;
        }
        applied
    }

    /// Waits for the next provider notification and applies it.
    ///
    /// Returns the resulting state, or `None` when there is no subscription
    /// or the provider has gone away.
    pub async fn next_update(&mut self) -> Option<SessionState> {
        let update = self.subscription.as_mut()?.next().await?;
        self.apply_provider_update(update);
        Some(self.state())
    }

    fn apply_provider_update(&mut self, update: IdentityUpdate) {
        match update {
            Some(identity) => {
                let next = SessionState::SignedInExternal(identity);
                if *self.state_tx.borrow() == next {
                    debug!("Provider repeated the current session");
                } else if let Some(identity) = next.identity() {
                    info!("Provider reported signed-in user {}", identity.id);
                }
                self.set_state(next);
            }
            None if self.using_external_provider() => {
                info!("Provider session ended");
                self.set_state(SessionState::SignedOut);
            }
            None => debug!("Provider reports no session, keeping current state"),
        }
    }

    /// Interactive sign-in through the identity provider.
    ///
    /// On failure the state is unchanged and the classified error is returned;
    /// there is no fallback to demo sign-in.
    pub async fn sign_in_external(&mut self) -> AuthResult<Identity> {
        self.apply_pending();

        let provider = match self.provider.clone() {
            Some(provider) => provider,
            None => match self.factory.try_acquire().await {
                Ok(provider) => {
                    self.provider = Some(Arc::clone(&provider));
                    provider
                }
                Err(e) => {
                    let err = e.into_sign_in_failure();
                    error!("Sign-in failed: {err}");
                    return Err(err);
                }
            },
        };

        info!("Starting interactive sign-in with '{}'", provider.name());
        let result = provider.sign_in_interactive().await;
        self.apply_pending();

        match result {
            Ok(identity) => {
                info!("Provider sign-in succeeded for {}", identity.id);
                self.set_state(SessionState::SignedInExternal(identity.clone()));
                Ok(identity)
            }
            Err(e) => {
                let err = e.into_sign_in_failure();
                error!(
                    "Sign-in failed: code={} {}",
                    err.sign_in_code().unwrap_or(SignInErrorCode::Unknown),
                    err
                );
                Err(err)
            }
        }
    }

    /// Demo sign-in with a self-issued identity.
    ///
    /// Rejects empty or whitespace-only emails without touching any state. The
    /// identity is persisted before the state changes, so a failed write leaves
    /// the controller signed out.
    pub fn sign_in_local(&mut self, email_address: &str) -> AuthResult<Identity> {
        self.apply_pending();

        let identity = Identity::local(email_address)?;
        save_identity(self.store.as_ref(), &self.demo_user_key, &identity)?;

        info!("Demo sign-in for {}", identity.id);
        self.set_state(SessionState::SignedInLocal(identity.clone()));
        Ok(identity)
    }

    /// Signs out from whichever session is active.
    ///
    /// Always ends signed out with no persisted demo identity. Provider and
    /// store failures are logged and do not block the transition.
    pub async fn sign_out(&mut self) {
        self.apply_pending();

        if self.using_external_provider()
            && let Some(provider) = self.provider.clone()
        {
            if let Err(e) = provider.sign_out().await {
                let err = match e {
                    AuthError::SignOutFailed { .. } => e,
                    other => AuthError::sign_out_failed(other.to_string()),
                };
                warn!("Ignoring provider sign-out failure: {err}");
            }
            self.apply_pending();
        }

        if let Err(e) = clear_identity(self.store.as_ref(), &self.demo_user_key) {
            error!("Failed to delete persisted demo identity: {e}");
        }

        self.set_state(SessionState::SignedOut);
    }

    /// Releases the provider subscription. Later notifications are dropped.
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            info!("Provider subscription released");
        }
    }

    fn set_state(&self, next: SessionState) {
        let label = next.label();
        let previous = self.state_tx.send_replace(next);
        if previous.label() != label {
            info!("Session state: {} -> {}", previous.label(), label);
        }
    }
}
