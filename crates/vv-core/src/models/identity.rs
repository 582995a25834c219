use crate::{CoreError, CoreResult, RegisterProfile, Role};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated actor.
///
/// This is also the persisted session record, so the JSON shape is the wire
/// format: camelCase keys, optional fields omitted when absent. Fields are
/// private so that `role` cannot change once the identity exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    id: String,
    name: String,
    email: String,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    patient_relation: Option<String>,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            specialization: None,
            license_number: None,
            patient_relation: None,
        }
    }

    /// Synthesizes a fresh identity from a registration payload.
    ///
    /// The id is a UUIDv7, so it is time-ordered and unique. Optional fields
    /// are copied whatever the role; the password never leaves the profile.
    pub fn from_profile(profile: &RegisterProfile) -> Self {
        Self {
            id: Self::generate_id(),
            name: profile.name.clone(),
            email: profile.email.clone(),
            role: profile.role,
            specialization: profile.specialization.clone(),
            license_number: profile.license_number.clone(),
            patient_relation: profile.patient_relation.clone(),
        }
    }

    pub fn generate_id() -> String {
        Uuid::now_v7().to_string()
    }

    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = Some(specialization.into());
        self
    }

    pub fn with_license_number(mut self, license_number: impl Into<String>) -> Self {
        self.license_number = Some(license_number.into());
        self
    }

    pub fn with_patient_relation(mut self, patient_relation: impl Into<String>) -> Self {
        self.patient_relation = Some(patient_relation.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn specialization(&self) -> Option<&str> {
        self.specialization.as_deref()
    }

    pub fn license_number(&self) -> Option<&str> {
        self.license_number.as_deref()
    }

    pub fn patient_relation(&self) -> Option<&str> {
        self.patient_relation.as_deref()
    }

    /// Checks the invariants a restored record must satisfy.
    ///
    /// An unknown role already fails deserialization; optional fields are
    /// kept as stored.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.id.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "id cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
