pub mod credential_store;
pub mod error;
pub mod file_store;
pub mod identity_record;
pub mod load_result;
pub mod memory_store;

pub use credential_store::CredentialStore;
pub use error::{Result, StoreError};
pub use file_store::{CREDENTIALS_FILE_NAME, FileCredentialStore};
pub use identity_record::{clear_identity, load_identity, save_identity};
pub use load_result::LoadResult;
pub use memory_store::MemoryCredentialStore;

#[cfg(test)]
mod tests;
