pub mod credential_directory;
pub mod error;
pub mod route_guard;
pub mod session_context;
pub mod session_state;
pub mod storage;

pub use credential_directory::{Credential, CredentialDirectory, StaticCredentialDirectory};
pub use error::{Result, SessionError, StorageError, StorageResult};
pub use route_guard::{GuardDecision, Route, guard, home_route};
pub use session_context::SessionContext;
pub use session_state::{SessionSnapshot, SessionState};
pub use storage::{
    LoadResult, SessionStorage, file_storage::FileSessionStorage,
    memory_storage::MemorySessionStorage,
};

pub use vv_core::{Identity, RegisterProfile, Role};

#[cfg(test)]
mod tests;
