use crate::{LoadResult, SessionStorage, StorageError, StorageResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use uuid::Uuid;
use vv_config::Config;
use vv_core::Identity;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Session record stored as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    dir: PathBuf,
    key: String,
}

impl FileSessionStorage {
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
        }
    }

    /// Storage at the location named by a loaded config.
    pub fn from_config(config: &Config, config_dir: &Path) -> Self {
        Self::new(
            config.session_storage_dir(config_dir),
            config.session.storage_key.clone(),
        )
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    /// Unique per write, so concurrent saves never share a temp file.
    pub(crate) fn temp_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.json.tmp.{}", self.key, Uuid::now_v7().simple()))
    }
}

impl SessionStorage for FileSessionStorage {
    /// Returns:
    /// - `LoadResult { identity: Some(..), corruption_error: None }` - loaded successfully
    /// - `LoadResult { identity: None, corruption_error: None }` - no record (first launch or signed out)
    /// - `LoadResult { identity: None, corruption_error: Some(..) }` - record exists but is corrupted
    fn load(&self) -> StorageResult<LoadResult> {
        let path = self.path();

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No session record at {path:?}");
                return Ok(LoadResult::empty());
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!("Session record at {path:?} is not UTF-8");
                return Ok(LoadResult {
                    identity: None,
                    corruption_error: Some(e.to_string()),
                });
            }
            Err(e) => return Err(StorageError::file_read(path, e)),
        };

        let result = LoadResult::from_record(&contents);
        if let Some(ref identity) = result.identity {
            info!("Loaded session for {} ({})", identity.id(), identity.role());
        }

        Ok(result)
    }

    /// Saves the record using atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn save(&self, identity: &Identity) -> StorageResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.path();
        let temp_path = self.temp_path();

        let json = serde_json::to_string_pretty(identity)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path.clone(), final_path.clone(), e)
        })?;

        info!("Saved session for {}", identity.id());
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        let path = self.path();

        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed session record at {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No session record to remove at {path:?}");
                Ok(())
            }
            Err(e) => Err(StorageError::file_remove(path, e)),
        }
    }

    /// Renames `<key>.json` to `<key>.json.corrupted.{timestamp}`.
    fn backup_corrupted(&self) -> StorageResult<Option<PathBuf>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{}.json.corrupted.{timestamp}", self.key));

        fs::rename(&path, &backup_path).map_err(StorageError::backup_failed)?;

        warn!("Backed up corrupted session record to {backup_path:?}");
        Ok(Some(backup_path))
    }
}
