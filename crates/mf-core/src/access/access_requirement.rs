use crate::{AccessMode, CoreError, Identity, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// What a gated view needs from the current identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRequirement {
    /// Any signed-in identity.
    SignedIn,
    /// Content management; checks `is_contributor` only.
    Contributor,
    Administrator,
    /// Onboarding finished (`has_profile`).
    CompletedProfile,
}

impl AccessRequirement {
    pub fn is_satisfied_by(&self, identity: &Identity) -> bool {
        match self {
            Self::SignedIn => true,
            Self::Contributor => identity.is_contributor,
            Self::Administrator => identity.is_admin,
            Self::CompletedProfile => identity.has_profile,
        }
    }

    /// Fixed notice for a view rendered in the given mode, if any.
    pub fn notice(&self, mode: AccessMode) -> Option<&'static str> {
        match (mode, self) {
            (AccessMode::Full, _) => None,
            (AccessMode::Guest, _) => Some("Sign in to continue."),
            (AccessMode::Restricted, Self::SignedIn) => None,
            (AccessMode::Restricted, Self::Contributor) => {
                Some("You need contributor permissions to access this area.")
            }
            (AccessMode::Restricted, Self::Administrator) => {
                Some("You need administrator permissions to access this area.")
            }
            (AccessMode::Restricted, Self::CompletedProfile) => {
                Some("Complete your profile to get started.")
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignedIn => "signed_in",
            Self::Contributor => "contributor",
            Self::Administrator => "administrator",
            Self::CompletedProfile => "completed_profile",
        }
    }
}

impl FromStr for AccessRequirement {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "signed_in" => Ok(Self::SignedIn),
            "contributor" => Ok(Self::Contributor),
            "administrator" => Ok(Self::Administrator),
            "completed_profile" => Ok(Self::CompletedProfile),
            _ => Err(CoreError::InvalidAccessRequirement {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AccessRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
