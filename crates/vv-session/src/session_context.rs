use crate::{
    CredentialDirectory, Result as SessionResult, SessionSnapshot, SessionState, SessionStorage,
};

use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::sync::{Mutex, watch};
use vv_core::{Identity, RegisterProfile, Role};

/// Single source of truth for who is signed in.
///
/// Create one per storage location and hand it to consumers (usually as an
/// `Arc<SessionContext>`). Lifecycle: `new` → `initialize` → any number of
/// `login` / `register` / `logout` calls.
///
/// Mutating calls run one at a time in the order they were started, so the
/// last call to start decides the final state. Reads never wait on them.
pub struct SessionContext {
    directory: Arc<dyn CredentialDirectory>,
    storage: Arc<dyn SessionStorage>,
    state_tx: watch::Sender<SessionSnapshot>,
    in_flight: Mutex<()>,
}

impl SessionContext {
    pub fn new(directory: Arc<dyn CredentialDirectory>, storage: Arc<dyn SessionStorage>) -> Self {
        let (state_tx, _) = watch::channel(SessionSnapshot::initializing());

        Self {
            directory,
            storage,
            state_tx,
            in_flight: Mutex::new(()),
        }
    }

    /// Restores the persisted identity, if any.
    ///
    /// Only the first call reads storage; later calls (or calls after a
    /// session operation already settled the state) return the current
    /// snapshot. Corrupted records and storage failures both end in the
    /// anonymous state.
    pub async fn initialize(&self) -> SessionSnapshot {
        let _op = self.in_flight.lock().await;

        if !self.state_tx.borrow().state.is_initializing() {
            debug!("Session already initialized");
            return self.snapshot();
        }

        let state = match self.storage.load() {
            Ok(loaded) => match loaded.identity {
                Some(identity) => {
                    info!(
                        "Restored session for {} ({})",
                        identity.id(),
                        identity.role()
                    );
                    SessionState::Authenticated { identity }
                }
                None => {
                    if let Some(reason) = loaded.corruption_error {
                        warn!("Discarding corrupted session record: {reason}");
                        if let Err(e) = self.storage.backup_corrupted() {
                            warn!(
                                "Could not back up corrupted session record: {e} ({})",
                                e.recovery_hint()
                            );
                        }
                    }
                    SessionState::Anonymous
                }
            },
            Err(e) => {
                if e.is_transient() {
                    warn!(
                        "Could not read session record, starting anonymous: {e} ({})",
                        e.recovery_hint()
                    );
                } else {
                    error!(
                        "Session storage unusable, starting anonymous: {e} ({})",
                        e.recovery_hint()
                    );
                }
                SessionState::Anonymous
            }
        };

        self.state_tx.send_modify(|snapshot| {
            snapshot.state = state;
            snapshot.is_loading = false;
        });

        self.snapshot()
    }

    /// Signs in against the credential directory.
    ///
    /// `Ok(false)` means the credentials were rejected and the current
    /// identity is unchanged.
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<bool> {
        let _op = self.in_flight.lock().await;
        let _loading = LoadingGuard::start(&self.state_tx);

        match self.directory.authenticate(email, password).await? {
            Some(identity) => {
                self.adopt(identity)?;
                Ok(true)
            }
            None => {
                warn!("Login rejected for {email}");
                Ok(false)
            }
        }
    }

    /// Creates and signs in a new identity. Always succeeds unless the
    /// record cannot be persisted.
    pub async fn register(&self, profile: RegisterProfile) -> SessionResult<bool> {
        let _op = self.in_flight.lock().await;
        let _loading = LoadingGuard::start(&self.state_tx);

        let identity = Identity::from_profile(&profile);
        info!("Registered {} as {}", identity.id(), identity.role());

        self.adopt(identity)?;
        Ok(true)
    }

    /// Signs out. Safe to call when already anonymous.
    pub async fn logout(&self) -> SessionResult<()> {
        let _op = self.in_flight.lock().await;

        self.storage.clear()?;

        let previous = self.state_tx.send_replace(SessionSnapshot {
            state: SessionState::Anonymous,
            is_loading: false,
        });

        match previous.state.identity() {
            Some(identity) => info!("Signed out {}", identity.id()),
            None => debug!("Logout while already anonymous"),
        }

        Ok(())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state_tx.borrow().clone()
    }

    pub fn current(&self) -> Option<Identity> {
        self.state_tx.borrow().identity().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.state_tx.borrow().role()
    }

    pub fn is_loading(&self) -> bool {
        self.state_tx.borrow().is_loading
    }

    /// Receiver that is notified on every state or loading change.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state_tx.subscribe()
    }

    /// Persists first, so memory never holds an identity storage lacks.
    fn adopt(&self, identity: Identity) -> SessionResult<()> {
        self.storage.save(&identity)?;

        info!("Session active for {} ({})", identity.id(), identity.role());
        self.state_tx.send_modify(|snapshot| {
            snapshot.state = SessionState::Authenticated { identity };
        });

        Ok(())
    }
}

/// Marks the session as loading for the lifetime of an operation, including
/// when the operation fails or its future is dropped.
struct LoadingGuard<'a> {
    state_tx: &'a watch::Sender<SessionSnapshot>,
}

impl<'a> LoadingGuard<'a> {
    fn start(state_tx: &'a watch::Sender<SessionSnapshot>) -> Self {
        state_tx.send_modify(|snapshot| snapshot.is_loading = true);
        Self { state_tx }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state_tx.send_modify(|snapshot| {
            snapshot.is_loading = snapshot.state.is_initializing();
        });
    }
}
