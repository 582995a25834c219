use crate::{RegisterProfile, Role};

use googletest::prelude::*;

#[test]
fn given_profile_when_debug_formatted_then_password_is_redacted() {
    // Given
    let profile = RegisterProfile::new("Jane Doe", "jane@example.com", "hunter2", Role::Family);

    // When
    let debug = format!("{profile:?}");

    // Then
    assert_that!(debug, contains_substring("<redacted>"));
    assert_that!(debug, not(contains_substring("hunter2")));
}

#[test]
fn given_camel_case_json_when_deserialize_then_optional_fields_populate() {
    // Given
    let json = r#"{
        "name": "Dr. Who",
        "email": "who@hospital.com",
        "password": "tardis",
        "role": "doctor",
        "specialization": "Cardiology",
        "licenseNumber": "MD999"
    }"#;

    // When
    let profile: RegisterProfile = serde_json::from_str(json).unwrap();

    // Then
    assert_that!(profile.role, eq(Role::Doctor));
    assert_that!(profile.license_number.as_deref(), some(eq("MD999")));
    assert_that!(profile.patient_relation, none());
}
