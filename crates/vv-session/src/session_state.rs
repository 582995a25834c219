use serde::Serialize;
use vv_core::{Identity, Role};

/// Who is signed in.
///
/// `Initializing` only exists until the persisted record has been read;
/// after that the session moves between `Anonymous` and `Authenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionState {
    Initializing,
    Anonymous,
    Authenticated { identity: Identity },
}

impl SessionState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated { identity } => Some(identity),
            Self::Initializing | Self::Anonymous => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(Identity::role)
    }

    pub fn is_initializing(&self) -> bool {
        matches!(self, Self::Initializing)
    }
}

/// What consumers observe: the state plus whether an operation is pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(flatten)]
    pub state: SessionState,
    pub is_loading: bool,
}

impl SessionSnapshot {
    pub fn initializing() -> Self {
        Self {
            state: SessionState::Initializing,
            is_loading: true,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.role()
    }

    /// Guards must not redirect while this is true.
    pub fn is_pending(&self) -> bool {
        self.is_loading || self.state.is_initializing()
    }
}
