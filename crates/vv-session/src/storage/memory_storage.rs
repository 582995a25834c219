use crate::{LoadResult, SessionStorage, StorageResult};

use std::sync::{Mutex, MutexGuard};

use vv_core::Identity;

/// In-process storage holding the raw serialized record.
///
/// Keeps the record as text so that malformed payloads can be planted with
/// [`MemorySessionStorage::with_raw`]. Clones of an `Arc` around one
/// instance behave like one browser profile shared by several pages.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    record: Mutex<Option<String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(raw.into())),
        }
    }

    /// The raw record as it would appear on disk.
    pub fn raw(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.record
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> StorageResult<LoadResult> {
        Ok(match self.lock().as_deref() {
            Some(raw) => LoadResult::from_record(raw),
            None => LoadResult::empty(),
        })
    }

    fn save(&self, identity: &Identity) -> StorageResult<()> {
        let json = serde_json::to_string(identity)?;
        *self.lock() = Some(json);
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        *self.lock() = None;
        Ok(())
    }
}
