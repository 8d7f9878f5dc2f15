use ln_core::Identity;

use std::fmt;

use tokio::sync::mpsc;

/// A session-change notification: the provider's current identity, or `None`
/// when it has no signed-in user.
pub type IdentityUpdate = Option<Identity>;

type Release = Box<dyn FnOnce() + Send>;

/// Handle to a provider's session-change notifications.
///
/// Updates are delivered through a channel rather than a callback. The release
/// hook runs exactly once: on `unsubscribe`, or on drop if the owner never
/// unsubscribed.
pub struct Subscription {
    updates: mpsc::UnboundedReceiver<IdentityUpdate>,
    release: Option<Release>,
}

impl Subscription {
    pub fn new(
        updates: mpsc::UnboundedReceiver<IdentityUpdate>,
        release: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            updates,
            release: Some(Box::new(release)),
        }
    }

    /// Next queued update without waiting. `None` when nothing is queued.
    pub fn try_next(&mut self) -> Option<IdentityUpdate> {
        self.updates.try_recv().ok()
    }

    /// Waits for the next update. `None` once the provider side has gone away.
    pub async fn next(&mut self) -> Option<IdentityUpdate> {
        self.updates.recv().await
    }

    /// Stops delivery and releases the provider-side listener.
    pub fn unsubscribe(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(release) = self.release.take() {
            self.updates.close();
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_once();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("released", &self.release.is_none())
            .finish()
    }
}
