use crate::{IdentityId, Role, SignUpRequest};

use serde::{Deserialize, Serialize};

/// The authenticated user.
///
/// `is_contributor` and `is_admin` are independent; nothing here forces an
/// admin to also be a contributor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: IdentityId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_contributor: bool,
    pub is_admin: bool,
    /// False until onboarding (profile creation) is complete.
    pub has_profile: bool,
}

impl Identity {
    /// Mints a fresh identity for a new registration.
    ///
    /// The id is generated and `has_profile` is always false.
    pub fn register(request: SignUpRequest) -> Self {
        Self {
            id: IdentityId::generate(),
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            is_contributor: request.is_contributor,
            is_admin: request.is_admin,
            has_profile: false,
        }
    }

    pub fn role(&self) -> Role {
        Role::from_flags(self.is_contributor, self.is_admin)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Avatar initials: first letter of each name, either may be absent.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .collect()
    }

    /// Members may ask an administrator for contributor rights.
    pub fn can_request_contributor_access(&self) -> bool {
        self.role() == Role::Member
    }
}
