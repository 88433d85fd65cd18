use crate::tests::identity;
use crate::{Identity, Role, SignUpRequest};

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_sign_up_request_with_flags_when_register_then_has_profile_is_false() {
    let request = SignUpRequest::new("new@mefit.com", "New", "Person")
        .with_contributor(true)
        .with_admin(true);

    let identity = Identity::register(request);

    assert_that!(identity.has_profile, eq(false));
    assert_that!(identity.is_contributor, eq(true));
    assert_that!(identity.is_admin, eq(true));
    assert_that!(identity.email.as_str(), eq("new@mefit.com"));
}

#[test]
fn given_two_registrations_when_compared_then_ids_differ() {
    let request = SignUpRequest::new("same@mefit.com", "Same", "Person");

    let first = Identity::register(request.clone());
    let second = Identity::register(request);

    assert_ne!(first.id, second.id);
}

#[test]
fn given_names_when_full_name_and_initials_then_combined() {
    let identity = identity(false, false, true);

    assert_that!(identity.full_name().as_str(), eq("Test User"));
    assert_that!(identity.initials().as_str(), eq("TU"));
}

#[test]
fn given_empty_last_name_when_initials_then_single_letter() {
    let mut identity = identity(false, false, true);
    identity.last_name.clear();

    assert_that!(identity.initials().as_str(), eq("T"));
    assert_that!(identity.full_name().as_str(), eq("Test "));
}

#[test]
fn given_admin_without_contributor_flag_when_role_then_administrator() {
    let identity = identity(false, true, true);

    assert_that!(identity.role(), eq(Role::Administrator));
    assert_that!(identity.is_contributor, eq(false));
    assert!(!identity.can_request_contributor_access());
}

#[test]
fn given_member_when_can_request_contributor_access_then_true() {
    assert!(identity(false, false, true).can_request_contributor_access());
    assert!(!identity(true, false, true).can_request_contributor_access());
}

#[test]
fn given_identity_when_serialize_then_uses_camel_case_keys() {
    let json = serde_json::to_value(identity(true, false, false)).unwrap();

    assert_that!(json["id"].as_str(), eq(Some("42")));
    assert_that!(json["firstName"].as_str(), eq(Some("Test")));
    assert_that!(json["lastName"].as_str(), eq(Some("User")));
    assert_that!(json["isContributor"].as_bool(), eq(Some(true)));
    assert_that!(json["isAdmin"].as_bool(), eq(Some(false)));
    assert_that!(json["hasProfile"].as_bool(), eq(Some(false)));
}
