mod sign_in_error_code;

use crate::{
    AuthError, IdentityProvider, ProviderFactory, Result as AuthResult, SessionBroadcaster,
    SessionController, SignInErrorCode, Subscription,
};

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ln_core::Identity;
use ln_store::MemoryCredentialStore;

pub(crate) const DEMO_KEY: &str = "demoUser";

/// Scripted identity provider for controller tests.
#[derive(Default)]
pub(crate) struct FakeProvider {
    pub(crate) broadcaster: SessionBroadcaster,
    sign_in_result: Mutex<Option<Result<Identity, SignInErrorCode>>>,
    /// Published to subscribers while the sign-in is "pending"
    notify_during_sign_in: Mutex<Option<Identity>>,
    fail_sign_out: AtomicBool,
    pub(crate) sign_in_calls: AtomicUsize,
    pub(crate) sign_out_calls: AtomicUsize,
}

impl FakeProvider {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn script_sign_in(&self, result: Result<Identity, SignInErrorCode>) {
        *self.sign_in_result.lock().unwrap() = Some(result);
    }

    pub(crate) fn notify_during_sign_in(&self, identity: Identity) {
        *self.notify_during_sign_in.lock().unwrap() = Some(identity);
    }

    pub(crate) fn fail_sign_out(&self) {
        self.fail_sign_out.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    fn name(&self) -> &str {
        "fake"
    }

    fn subscribe(&self) -> Subscription {
        self.broadcaster.subscribe()
    }

    async fn sign_in_interactive(&self) -> AuthResult<Identity> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);

        let concurrent = self.notify_during_sign_in.lock().unwrap().take();
        if let Some(identity) = concurrent {
            self.broadcaster.publish(Some(identity));
        }

        let scripted = self.sign_in_result.lock().unwrap().take();
        match scripted {
            Some(Ok(identity)) => {
                self.broadcaster.publish(Some(identity.clone()));
                Ok(identity)
            }
            Some(Err(code)) => Err(AuthError::sign_in_failed(code, "scripted failure")),
            None => Err(AuthError::sign_in_failed(
                SignInErrorCode::Unknown,
                "no scripted result",
            )),
        }
    }

    async fn sign_out(&self) -> AuthResult<()> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_sign_out.load(Ordering::SeqCst) {
            return Err(AuthError::sign_out_failed("network unreachable"));
        }
        self.broadcaster.publish(None);
        Ok(())
    }
}

/// Factory handing out a fixed provider, or reporting it unavailable.
pub(crate) struct FakeFactory {
    provider: Option<Arc<FakeProvider>>,
    pub(crate) acquire_calls: AtomicUsize,
}

impl FakeFactory {
    pub(crate) fn available(provider: Arc<FakeProvider>) -> Arc<Self> {
        Arc::new(Self {
            provider: Some(provider),
            acquire_calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            provider: None,
            acquire_calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ProviderFactory for FakeFactory {
    async fn try_acquire(&self) -> AuthResult<Arc<dyn IdentityProvider>> {
        self.acquire_calls.fetch_add(1, Ordering::SeqCst);

        match &self.provider {
            Some(provider) => Ok(Arc::clone(provider) as Arc<dyn IdentityProvider>),
            None => Err(AuthError::provider_unavailable("missing configuration")),
        }
    }
}

pub(crate) fn controller_with(
    factory: Arc<FakeFactory>,
    store: Arc<MemoryCredentialStore>,
) -> SessionController {
    SessionController::new(factory, store, DEMO_KEY)
}

pub(crate) fn external_identity(id: &str) -> Identity {
    Identity::external(id, Some(format!("{id}@provider.example")), None)
}
