use crate::{ConfigError, ConfigErrorResult, DEFAULT_DEMO_USER_KEY, DEFAULT_STORAGE_DIR};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Credential store directory, relative to the config dir
    pub dir: String,
    /// Store key for the persisted demo identity
    pub demo_user_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
            demo_user_key: String::from(DEFAULT_DEMO_USER_KEY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Keep the store inside the config dir
        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be relative and cannot contain '..'",
            ));
        }

        if self.demo_user_key.trim().is_empty() {
            return Err(ConfigError::storage("storage.demo_user_key cannot be empty"));
        }

        Ok(())
    }
}
