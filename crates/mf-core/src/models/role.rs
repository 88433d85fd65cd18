use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Display role derived from an identity's capability flags.
///
/// Admin takes precedence over contributor. The flags themselves stay
/// independent; a role is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Administrator,
    Contributor,
    #[default]
    Member,
}

impl Role {
    pub fn from_flags(is_contributor: bool, is_admin: bool) -> Self {
        match (is_contributor, is_admin) {
            (_, true) => Self::Administrator,
            (true, false) => Self::Contributor,
            (false, false) => Self::Member,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Contributor => "contributor",
            Self::Member => "member",
        }
    }

    /// Badge text shown next to the user's name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Contributor => "Contributor",
            Self::Member => "Member",
        }
    }

    /// Whether this role is above a plain member.
    pub fn is_elevated(&self) -> bool {
        !matches!(self, Self::Member)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "administrator" => Ok(Self::Administrator),
            "contributor" => Ok(Self::Contributor),
            "member" => Ok(Self::Member),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
