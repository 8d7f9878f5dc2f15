use crate::{IdentityUpdate, Subscription};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;
use tokio::sync::mpsc;

/// Fans a provider's current identity out to its subscribers.
///
/// New subscribers immediately receive the current value, so a session the
/// provider already knows about is delivered on subscribe.
#[derive(Clone, Default)]
pub struct SessionBroadcaster {
    inner: Arc<Mutex<BroadcasterInner>>,
}

#[derive(Default)]
struct BroadcasterInner {
    next_id: u64,
    current: IdentityUpdate,
    listeners: HashMap<u64, mpsc::UnboundedSender<IdentityUpdate>>,
}

impl SessionBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and queues the current identity for it.
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();

        let id = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;

            let _ = tx.send(inner.current.clone());
            inner.listeners.insert(id, tx);
            id
        };
        debug!("Session listener {id} registered");

        let weak = Arc::downgrade(&self.inner);
        Subscription::new(rx, move || {
            if let Some(inner) = weak.upgrade() {
                lock(&inner).listeners.remove(&id);
                debug!("Session listener {id} released");
            }
        })
    }

    /// Records a new current identity and notifies every live listener.
    pub fn publish(&self, update: IdentityUpdate) {
        let mut inner = lock(&self.inner);
        inner.current = update.clone();
        inner
            .listeners
            .retain(|_, tx| tx.send(update.clone()).is_ok());
    }

    pub fn current(&self) -> IdentityUpdate {
        lock(&self.inner).current.clone()
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }
}

fn lock(inner: &Mutex<BroadcasterInner>) -> MutexGuard<'_, BroadcasterInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
