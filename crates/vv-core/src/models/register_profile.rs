use crate::Role;

use std::fmt;

use serde::Deserialize;

/// Registration payload submitted by the sign-up form.
///
/// Fields are taken as-is; any validation belongs to the calling form.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterProfile {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub patient_relation: Option<String>,
}

impl RegisterProfile {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role,
            specialization: None,
            license_number: None,
            patient_relation: None,
        }
    }
}

impl fmt::Debug for RegisterProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterProfile")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("specialization", &self.specialization)
            .field("license_number", &self.license_number)
            .field("patient_relation", &self.patient_relation)
            .finish()
    }
}
