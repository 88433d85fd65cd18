pub mod access_mode;
pub mod access_requirement;

use crate::{AccessMode, AccessRequirement, Identity};

/// Decide how a gated view renders for the current identity.
///
/// Pure: reads only the capability flags and `has_profile`.
pub fn evaluate(identity: Option<&Identity>, requirement: AccessRequirement) -> AccessMode {
    match identity {
        None => AccessMode::Guest,
        Some(identity) if requirement.is_satisfied_by(identity) => AccessMode::Full,
        Some(_) => AccessMode::Restricted,
    }
}
