pub mod access;
pub mod error;
pub mod models;

pub use access::access_mode::AccessMode;
pub use access::access_requirement::AccessRequirement;
pub use access::evaluate;
pub use error::{CoreError, Result};
pub use models::identity::Identity;
pub use models::identity_id::IdentityId;
pub use models::role::Role;
pub use models::sign_up_request::SignUpRequest;

#[cfg(test)]
mod tests;
