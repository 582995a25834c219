use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Doctor.as_str(), "doctor");
    assert_eq!(Role::Family.as_str(), "family");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("doctor").unwrap(), Role::Doctor);
    assert_eq!(Role::from_str("family").unwrap(), Role::Family);
    assert!(Role::from_str("nurse").is_err());
    assert!(Role::from_str("Doctor").is_err());
}

#[test]
fn test_role_display_matches_as_str() {
    for role in Role::ALL {
        assert_eq!(role.to_string(), role.as_str());
    }
}

#[test]
fn test_role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), r#""doctor""#);
    assert_eq!(
        serde_json::from_str::<Role>(r#""family""#).unwrap(),
        Role::Family
    );
    assert!(serde_json::from_str::<Role>(r#""admin""#).is_err());
}
