use ln_core::Identity;

/// Result of loading a persisted identity - distinguishes "not found" from corruption.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub identity: Option<Identity>,
    /// Present if a record exists but could not be parsed
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub fn is_corrupted(&self) -> bool {
        self.corruption_error.is_some()
    }
}
