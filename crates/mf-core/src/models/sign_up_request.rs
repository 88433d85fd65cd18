use serde::{Deserialize, Serialize};

/// Caller-supplied fields for a new registration.
///
/// Carries no id or profile flag; [`Identity::register`](crate::Identity::register)
/// decides both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub is_contributor: bool,
    #[serde(default)]
    pub is_admin: bool,
}

impl SignUpRequest {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            is_contributor: false,
            is_admin: false,
        }
    }

    pub fn with_contributor(mut self, is_contributor: bool) -> Self {
        self.is_contributor = is_contributor;
        self
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}
