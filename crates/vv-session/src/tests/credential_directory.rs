use crate::tests::{DOCTOR_EMAIL, DOCTOR_PASSWORD, FAMILY_EMAIL, FAMILY_PASSWORD};
use crate::{Credential, CredentialDirectory, StaticCredentialDirectory};

use googletest::prelude::*;
use vv_core::{Identity, Role};

#[test]
fn given_fixture_when_inspected_then_holds_one_doctor_and_one_family_member() {
    let directory = StaticCredentialDirectory::fixture();

    let roles: Vec<Role> = directory.identities().map(Identity::role).collect();

    assert_that!(directory.len(), eq(2));
    assert_that!(roles, elements_are![eq(&Role::Doctor), eq(&Role::Family)]);
}

#[test]
fn given_fixture_when_inspected_then_every_identity_validates() {
    for identity in StaticCredentialDirectory::fixture().identities() {
        assert!(identity.validate().is_ok(), "{identity:?} should validate");
    }
}

#[tokio::test]
async fn given_fixture_credentials_when_authenticate_then_returns_matching_identity() {
    let directory = StaticCredentialDirectory::fixture();

    let doctor = directory
        .authenticate(DOCTOR_EMAIL, DOCTOR_PASSWORD)
        .await
        .unwrap()
        .unwrap();
    let family = directory
        .authenticate(FAMILY_EMAIL, FAMILY_PASSWORD)
        .await
        .unwrap()
        .unwrap();

    assert_that!(doctor.id(), eq("1"));
    assert_that!(family.id(), eq("2"));
    assert_that!(family.patient_relation(), some(eq("Son")));
}

#[tokio::test]
async fn given_password_of_other_entry_when_authenticate_then_none() {
    let directory = StaticCredentialDirectory::fixture();

    let result = directory
        .authenticate(DOCTOR_EMAIL, FAMILY_PASSWORD)
        .await
        .unwrap();

    assert_that!(result, none());
}

#[tokio::test]
async fn given_custom_entries_when_authenticate_then_only_those_match() {
    let directory = StaticCredentialDirectory::new(vec![Credential::new(
        Identity::new("c-1", "Dr. House", "house@ppth.org", Role::Doctor),
        "vicodin",
    )]);

    assert_that!(
        directory.authenticate("house@ppth.org", "vicodin").await.unwrap(),
        some(anything())
    );
    assert_that!(
        directory.authenticate(DOCTOR_EMAIL, DOCTOR_PASSWORD).await.unwrap(),
        none()
    );
}

#[test]
fn given_credential_when_debug_formatted_then_password_hidden() {
    let credential = Credential::new(
        Identity::new("1", "A", "a@example.com", Role::Family),
        "topsecret",
    );

    let debug = format!("{credential:?}");

    assert_that!(debug, not(contains_substring("topsecret")));
    assert_that!(debug, contains_substring("a@example.com"));
}
