use crate::{CredentialStore, LoadResult, Result as StoreResult};

use ln_core::Identity;
use log::{info, warn};

/// Persists `identity` under `key`, replacing any earlier record.
pub fn save_identity(
    store: &dyn CredentialStore,
    key: &str,
    identity: &Identity,
) -> StoreResult<()> {
    let json = serde_json::to_string(identity)?;
    store.set(key, &json)?;

    info!("Saved identity: {}", identity.id);
    Ok(())
}

/// Loads the identity stored under `key`.
///
/// Returns:
/// - `LoadResult { identity: Some(...), corruption_error: None }` - loaded successfully
/// - `LoadResult { identity: None, corruption_error: None }` - nothing stored
/// - `LoadResult { identity: None, corruption_error: Some(...) }` - record exists but is unreadable
pub fn load_identity(store: &dyn CredentialStore, key: &str) -> StoreResult<LoadResult> {
    let Some(raw) = store.get(key)? else {
        return Ok(LoadResult::default());
    };

    match serde_json::from_str::<Identity>(&raw) {
        Ok(identity) => {
            info!("Loaded identity: {} (local: {})", identity.id, identity.is_local);
            Ok(LoadResult {
                identity: Some(identity),
                corruption_error: None,
            })
        }
        Err(e) => {
            warn!("Stored identity under '{key}' is corrupted: {e}");
            Ok(LoadResult {
                identity: None,
                corruption_error: Some(e.to_string()),
            })
        }
    }
}

/// Removes any identity stored under `key`.
pub fn clear_identity(store: &dyn CredentialStore, key: &str) -> StoreResult<()> {
    store.delete(key)
}
