use crate::{CredentialStore, Result as StoreResult, StoreError};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};

pub const CREDENTIALS_FILE_NAME: &str = "credentials.json";

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// What a read does with a file that no longer parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnCorrupt {
    Ignore,
    Backup,
}

/// Credential store backed by a single JSON object file.
///
/// Every `set`/`delete` rewrites the whole file atomically. A file that no
/// longer parses reads as empty. The next write moves it aside to
/// `credentials.json.corrupted.<timestamp>` and starts over.
#[derive(Debug)]
pub struct FileCredentialStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCredentialStore {
    /// Opens (and creates if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::dir_creation(dir.clone(), e))?;

        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CREDENTIALS_FILE_NAME)
    }

    /// Only callers holding `write_lock` may pass `OnCorrupt::Backup`.
    fn read_entries(&self, on_corrupt: OnCorrupt) -> StoreResult<BTreeMap<String, String>> {
        let path = self.path();

        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| StoreError::file_read(path.clone(), e))?;

        match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Credentials file corrupted at {path:?}: {e}");
                if on_corrupt == OnCorrupt::Backup {
                    self.backup_corrupted(&path)?;
                }
                Ok(BTreeMap::new())
            }
        }
    }

    /// Writes the entries using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        let final_path = self.path();
        let temp_path = self
            .dir
            .join(format!("{CREDENTIALS_FILE_NAME}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote {} credential entries to {final_path:?}", entries.len());
        Ok(())
    }

    fn backup_corrupted(&self, path: &Path) -> StoreResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{CREDENTIALS_FILE_NAME}.corrupted.{timestamp}"));

        fs::rename(path, &backup_path).map_err(StoreError::backup_failed)?;

        warn!("Backed up corrupted credentials to {backup_path:?}");
        Ok(backup_path)
    }

    fn update<F>(&self, mutate: F) -> StoreResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut entries = self.read_entries(OnCorrupt::Backup)?;
        if mutate(&mut entries) {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_entries(OnCorrupt::Ignore)?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        self.update(|entries| entries.remove(key).is_some())
    }
}
