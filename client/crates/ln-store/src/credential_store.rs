use crate::Result as StoreResult;

/// Durable key-value capability for values that must survive a restart.
///
/// Calls are synchronous. Implementations take `&self` so a single store can
/// be shared between the session controller and a provider client.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrites any prior value under `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> StoreResult<()>;
}
