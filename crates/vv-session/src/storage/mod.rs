pub mod file_storage;
pub mod memory_storage;

use crate::StorageResult;

use std::path::PathBuf;

use log::warn;
use serde::Serialize;
use vv_core::Identity;

/// The durable single-record store backing a session.
///
/// Reads and writes are synchronous and local.
pub trait SessionStorage: Send + Sync {
    /// Reads the persisted record. Missing and corrupted records are both
    /// `Ok`; see [`LoadResult`].
    fn load(&self) -> StorageResult<LoadResult>;

    /// Replaces the persisted record.
    fn save(&self, identity: &Identity) -> StorageResult<()>;

    /// Removes the persisted record. Removing a missing record is a no-op.
    fn clear(&self) -> StorageResult<()>;

    /// Moves a corrupted record aside so the next save starts clean.
    fn backup_corrupted(&self) -> StorageResult<Option<PathBuf>> {
        self.clear()?;
        Ok(None)
    }
}

/// Result of loading the record - distinguishes "not found" from corruption.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadResult {
    pub identity: Option<Identity>,
    /// Present if a record exists but is not a valid identity
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a raw record. Anything that is not a valid identity is
    /// reported as corruption, never as an error.
    pub fn from_record(raw: &str) -> Self {
        let identity = match serde_json::from_str::<Identity>(raw) {
            Ok(identity) => identity,
            Err(e) => {
                warn!("Session record is not valid JSON identity: {e}");
                return Self::corrupted(e.to_string());
            }
        };

        match identity.validate() {
            Ok(()) => Self {
                identity: Some(identity),
                corruption_error: None,
            },
            Err(e) => {
                warn!("Session record failed validation: {e}");
                Self::corrupted(e.to_string())
            }
        }
    }

    fn corrupted(message: String) -> Self {
        Self {
            identity: None,
            corruption_error: Some(message),
        }
    }

    pub fn is_corrupted(&self) -> bool {
        self.corruption_error.is_some()
    }
}
