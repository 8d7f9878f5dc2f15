use crate::ProviderErrorResult;

use chrono::{DateTime, Utc};
use ln_core::Identity;
use ln_store::CredentialStore;
use log::warn;
use serde::{Deserialize, Serialize};

/// A provider sign-in persisted across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSession {
    pub identity: Identity,
    pub id_token: String,
    pub expires_at: DateTime<Utc>,
}

impl ProviderSession {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

pub fn save_session(
    store: &dyn CredentialStore,
    key: &str,
    session: &ProviderSession,
) -> ProviderErrorResult<()> {
    let json = serde_json::to_string(session)?;
    store.set(key, &json)?;
    Ok(())
}

/// Reads the persisted session. An unreadable record is logged and treated as
/// absent.
pub fn load_session(
    store: &dyn CredentialStore,
    key: &str,
) -> ProviderErrorResult<Option<ProviderSession>> {
    let Some(json) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&json) {
        Ok(session) => Ok(Some(session)),
        Err(e) => {
            warn!("Ignoring unreadable provider session '{key}': {e}");
            Ok(None)
        }
    }
}

pub fn clear_session(store: &dyn CredentialStore, key: &str) -> ProviderErrorResult<()> {
    store.delete(key)?;
    Ok(())
}
