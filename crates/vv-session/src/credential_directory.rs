use crate::Result as SessionResult;

use async_trait::async_trait;
use log::debug;
use vv_core::{Identity, Role};

/// Resolves login attempts to identities.
///
/// A remote identity service plugs in here; `Ok(None)` means the
/// credentials were rejected, `Err` means the directory itself failed.
#[async_trait]
pub trait CredentialDirectory: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str)
    -> SessionResult<Option<Identity>>;
}

/// A directory entry. Never serialized.
#[derive(Clone)]
pub struct Credential {
    identity: Identity,
    password: String,
}

impl Credential {
    pub fn new(identity: Identity, password: impl Into<String>) -> Self {
        Self {
            identity,
            password: password.into(),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    fn matches(&self, email: &str, password: &str) -> bool {
        self.identity.email() == email && self.password == password
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// Fixed in-memory directory with plaintext secrets. A test fixture and
/// demo stand-in only.
#[derive(Debug, Clone)]
pub struct StaticCredentialDirectory {
    entries: Vec<Credential>,
}

impl StaticCredentialDirectory {
    pub fn new(entries: Vec<Credential>) -> Self {
        Self { entries }
    }

    /// The two demo accounts: one doctor, one family member.
    pub fn fixture() -> Self {
        Self::new(vec![
            Credential::new(
                Identity::new(
                    "1",
                    "Dr. Sarah Johnson",
                    "sarah.johnson@hospital.com",
                    Role::Doctor,
                )
                .with_specialization("Critical Care Medicine")
                .with_license_number("MD123456"),
                "doctor123",
            ),
            Credential::new(
                Identity::new("2", "John Smith", "john.smith@email.com", Role::Family)
                    .with_patient_relation("Son"),
                "family123",
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn identities(&self) -> impl Iterator<Item = &Identity> {
        self.entries.iter().map(Credential::identity)
    }
}

impl Default for StaticCredentialDirectory {
    fn default() -> Self {
        Self::fixture()
    }
}

#[async_trait]
impl CredentialDirectory for StaticCredentialDirectory {
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> SessionResult<Option<Identity>> {
        let found = self
            .entries
            .iter()
            .find(|entry| entry.matches(email, password))
            .map(|entry| entry.identity.clone());

        debug!(
            "Directory lookup for {email}: {}",
            if found.is_some() { "match" } else { "no match" }
        );

        Ok(found)
    }
}
