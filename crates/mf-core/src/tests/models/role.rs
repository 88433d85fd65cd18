use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_from_flags() {
    assert_eq!(Role::from_flags(true, true), Role::Administrator);
    assert_eq!(Role::from_flags(false, true), Role::Administrator);
    assert_eq!(Role::from_flags(true, false), Role::Contributor);
    assert_eq!(Role::from_flags(false, false), Role::Member);
}

#[test]
fn test_role_as_str_and_label() {
    assert_eq!(Role::Administrator.as_str(), "administrator");
    assert_eq!(Role::Contributor.as_str(), "contributor");
    assert_eq!(Role::Member.as_str(), "member");
    assert_eq!(Role::Administrator.label(), "Administrator");
    assert_eq!(Role::Member.label(), "Member");
}

#[test]
fn test_role_from_str() {
    assert_eq!(
        Role::from_str("administrator").unwrap(),
        Role::Administrator
    );
    assert_eq!(Role::from_str("member").unwrap(), Role::Member);
    assert!(matches!(
        Role::from_str("Admin"),
        Err(CoreError::InvalidRole { .. })
    ));
}

#[test]
fn test_role_default_is_member() {
    assert_eq!(Role::default(), Role::Member);
    assert!(!Role::Member.is_elevated());
    assert!(Role::Contributor.is_elevated());
}
