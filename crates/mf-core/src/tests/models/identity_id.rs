use crate::{CoreError, IdentityId};

#[test]
fn given_two_generated_ids_when_compared_then_differ() {
    assert_ne!(IdentityId::generate(), IdentityId::generate());
}

#[test]
fn given_numeric_id_when_display_then_renders_digits() {
    assert_eq!(IdentityId::from(3).to_string(), "3");
}

#[test]
fn given_blank_string_when_try_from_then_validation_error() {
    let result = IdentityId::try_from("  ");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_empty_id_in_json_when_deserialize_then_fails() {
    let result = serde_json::from_str::<IdentityId>(r#""""#);

    assert!(result.is_err());
}

#[test]
fn given_id_when_serialize_then_plain_string() {
    let json = serde_json::to_string(&IdentityId::from(1)).unwrap();

    assert_eq!(json, r#""1""#);
}
