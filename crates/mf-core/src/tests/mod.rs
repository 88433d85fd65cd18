mod models;

use crate::{Identity, IdentityId};

pub(crate) fn identity(is_contributor: bool, is_admin: bool, has_profile: bool) -> Identity {
    Identity {
        id: IdentityId::from(42),
        email: "test@mefit.com".to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        is_contributor,
        is_admin,
        has_profile,
    }
}
