use crate::{Identity, RegisterProfile, Role};

use googletest::prelude::*;

fn doctor() -> Identity {
    Identity::new("1", "Dr. Sarah Johnson", "sarah.johnson@hospital.com", Role::Doctor)
        .with_specialization("Critical Care Medicine")
        .with_license_number("MD123456")
}

#[test]
fn given_identity_when_serialize_then_uses_camel_case_and_omits_absent_fields() {
    // Given
    let identity = doctor();

    // When
    let json = serde_json::to_string(&identity).unwrap();

    // Then
    assert_that!(json, contains_substring(r#""licenseNumber":"MD123456""#));
    assert_that!(json, contains_substring(r#""role":"doctor""#));
    assert_that!(json, not(contains_substring("patientRelation")));
    assert_that!(json, not(contains_substring("password")));
}

#[test]
fn given_serialized_identity_when_deserialize_then_preserves_all_fields() {
    // Given
    let original = doctor();
    let json = serde_json::to_string_pretty(&original).unwrap();

    // When
    let restored: Identity = serde_json::from_str(&json).unwrap();

    // Then
    assert_that!(restored, eq(&original));
}

#[test]
fn given_record_with_unknown_role_when_deserialize_then_error() {
    let json = r#"{"id":"9","name":"X","email":"x@y.z","role":"nurse"}"#;

    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn given_record_with_extra_password_key_when_deserialize_then_ignored() {
    let json = r#"{"id":"9","name":"X","email":"x@y.z","role":"family","password":"p"}"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_that!(identity.role(), eq(Role::Family));
}

#[test]
fn given_family_profile_with_doctor_fields_when_from_profile_then_all_fields_kept() {
    // Given
    let mut profile = RegisterProfile::new("Jane Doe", "jane@example.com", "pw", Role::Family);
    profile.specialization = Some("Cardiology".into());
    profile.license_number = Some("MD1".into());
    profile.patient_relation = Some("Daughter".into());

    // When
    let identity = Identity::from_profile(&profile);

    // Then
    assert_that!(identity.role(), eq(Role::Family));
    assert_that!(identity.name(), eq("Jane Doe"));
    assert_that!(identity.email(), eq("jane@example.com"));
    assert_that!(identity.patient_relation(), some(eq("Daughter")));
    assert_that!(identity.specialization(), some(eq("Cardiology")));
    assert_that!(identity.license_number(), some(eq("MD1")));
    assert_that!(identity.validate(), ok(anything()));
}

#[test]
fn given_two_profiles_when_from_profile_then_ids_are_distinct_and_non_empty() {
    let profile = RegisterProfile::new("A", "a@example.com", "pw", Role::Doctor);

    let first = Identity::from_profile(&profile);
    let second = Identity::from_profile(&profile);

    assert_that!(first.id(), not(eq("")));
    assert_that!(first.id(), not(eq(second.id())));
}

#[test]
fn given_empty_id_when_validate_then_error() {
    let identity = Identity::new("  ", "X", "x@y.z", Role::Family);

    assert_that!(identity.validate(), err(anything()));
}

#[test]
fn given_family_with_specialization_when_validate_then_ok() {
    let identity = Identity::new("2", "John Smith", "john.smith@email.com", Role::Family)
        .with_specialization("")
        .with_patient_relation("Son");

    assert_that!(identity.validate(), ok(anything()));
}

#[test]
fn given_doctor_with_patient_relation_when_validate_then_ok() {
    let identity = doctor().with_patient_relation("Son");

    assert_that!(identity.validate(), ok(anything()));
}
