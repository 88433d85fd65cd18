pub mod authenticator;
pub mod credential;
pub mod error;
pub mod fixed_credential_table;

pub use authenticator::Authenticator;
pub use credential::Credential;
pub use error::{AuthError, Result};
pub use fixed_credential_table::FixedCredentialTable;
