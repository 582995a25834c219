mod credential_directory;

use crate::{
    CredentialDirectory, LoadResult, MemorySessionStorage, Result as SessionResult,
    SessionContext, SessionStorage, StaticCredentialDirectory, StorageError, StorageResult,
};

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;
use vv_core::Identity;

pub(crate) const DOCTOR_EMAIL: &str = "sarah.johnson@hospital.com";
pub(crate) const DOCTOR_PASSWORD: &str = "doctor123";
pub(crate) const FAMILY_EMAIL: &str = "john.smith@email.com";
pub(crate) const FAMILY_PASSWORD: &str = "family123";

/// Context over the fixture directory and a fresh in-memory record.
pub(crate) fn memory_context() -> (SessionContext, Arc<MemorySessionStorage>) {
    let storage = Arc::new(MemorySessionStorage::new());
    let context = context_over(storage.clone());
    (context, storage)
}

/// Context over the fixture directory and the given storage.
pub(crate) fn context_over(storage: Arc<MemorySessionStorage>) -> SessionContext {
    SessionContext::new(Arc::new(StaticCredentialDirectory::fixture()), storage)
}

/// Storage where every operation fails with an I/O error.
pub(crate) struct FailingStorage;

fn denied() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied")
}

impl SessionStorage for FailingStorage {
    fn load(&self) -> StorageResult<LoadResult> {
        Err(StorageError::file_read(PathBuf::from("/denied"), denied()))
    }

    fn save(&self, _identity: &Identity) -> StorageResult<()> {
        Err(StorageError::file_write(PathBuf::from("/denied"), denied()))
    }

    fn clear(&self) -> StorageResult<()> {
        Err(StorageError::file_remove(PathBuf::from("/denied"), denied()))
    }
}

/// Fixture directory that holds every lookup until `release` is called.
pub(crate) struct GatedDirectory {
    inner: StaticCredentialDirectory,
    gate: Notify,
}

impl GatedDirectory {
    pub(crate) fn new() -> Self {
        Self {
            inner: StaticCredentialDirectory::fixture(),
            gate: Notify::new(),
        }
    }

    pub(crate) fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl CredentialDirectory for GatedDirectory {
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> SessionResult<Option<Identity>> {
        self.gate.notified().await;
        self.inner.authenticate(email, password).await
    }
}

/// Directory whose backend is always down.
pub(crate) struct UnavailableDirectory;

#[async_trait]
impl CredentialDirectory for UnavailableDirectory {
    async fn authenticate(
        &self,
        _email: &str,
        _password: &str,
    ) -> SessionResult<Option<Identity>> {
        Err(crate::SessionError::directory_unavailable("connection refused"))
    }
}
