use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of an [`Identity`](crate::Identity).
///
/// Canned accounts use short numeric strings; sign-up mints a UUID.
/// Consumers must not interpret the contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityId(String);

impl IdentityId {
    /// Mints a fresh, unique identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IdentityId {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: String) -> CoreErrorResult<Self> {
        if value.trim().is_empty() {
            return Err(CoreError::validation("identity id cannot be empty"));
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for IdentityId {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: &str) -> CoreErrorResult<Self> {
        Self::try_from(value.to_string())
    }
}

/// Numeric ids, as used by the built-in accounts.
impl From<u64> for IdentityId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<IdentityId> for String {
    fn from(id: IdentityId) -> Self {
        id.0
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
