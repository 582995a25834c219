//! Navigation rules for the dashboard views.
//!
//! Public pages are open to everyone. Dashboards are restricted to one
//! role, video calls to any signed-in role. Unknown paths fall back to the
//! landing page.

use crate::SessionSnapshot;

use std::fmt;

use vv_core::Role;

const VIDEO_CALL_PREFIX: &str = "/video-call/";

const DOCTOR_ONLY: &[Role] = &[Role::Doctor];
const FAMILY_ONLY: &[Role] = &[Role::Family];
const ANY_ROLE: &[Role] = &Role::ALL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    DoctorDashboard,
    FamilyDashboard,
    VideoCall { room_id: String },
    NotFound { path: String },
}

impl Route {
    /// Resolves a path. Query strings, fragments and a trailing slash are
    /// ignored.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        match trimmed {
            "/" => Self::Landing,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/doctor-dashboard" => Self::DoctorDashboard,
            "/family-dashboard" => Self::FamilyDashboard,
            _ => match trimmed.strip_prefix(VIDEO_CALL_PREFIX) {
                Some(room_id) if !room_id.is_empty() && !room_id.contains('/') => {
                    Self::VideoCall {
                        room_id: room_id.to_string(),
                    }
                }
                _ => Self::NotFound {
                    path: path.to_string(),
                },
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::DoctorDashboard => "/doctor-dashboard".to_string(),
            Self::FamilyDashboard => "/family-dashboard".to_string(),
            Self::VideoCall { room_id } => format!("{VIDEO_CALL_PREFIX}{room_id}"),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Roles allowed on this route; `None` for public routes.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Self::DoctorDashboard => Some(DOCTOR_ONLY),
            Self::FamilyDashboard => Some(FAMILY_ONLY),
            Self::VideoCall { .. } => Some(ANY_ROLE),
            Self::Landing | Self::Login | Self::Register | Self::NotFound { .. } => None,
        }
    }

    pub fn is_protected(&self) -> bool {
        self.allowed_roles().is_some()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still loading; render a placeholder and decide later
    Pending,
    Allow,
    Redirect(Route),
}

/// Where a role lands after signing in.
pub fn home_route(role: Role) -> Route {
    match role {
        Role::Doctor => Route::DoctorDashboard,
        Role::Family => Route::FamilyDashboard,
    }
}

pub fn guard(route: &Route, snapshot: &SessionSnapshot) -> GuardDecision {
    if let Route::NotFound { .. } = route {
        return GuardDecision::Redirect(Route::Landing);
    }

    if !route.is_protected() {
        return GuardDecision::Allow;
    }

    if snapshot.is_pending() {
        return GuardDecision::Pending;
    }

    let allowed = route.allowed_roles().unwrap_or_default();
    match snapshot.role() {
        None => GuardDecision::Redirect(Route::Login),
        Some(role) if allowed.contains(&role) => GuardDecision::Allow,
        Some(role) => GuardDecision::Redirect(home_route(role)),
    }
}
