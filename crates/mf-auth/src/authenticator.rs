use mf_core::Identity;

use async_trait::async_trait;

/// Verifies an email/password pair and resolves the matching identity.
///
/// The built-in implementation is [`FixedCredentialTable`](crate::FixedCredentialTable);
/// a remote identity provider can stand in without changing the session
/// store that calls it.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns `None` when the pair is not recognised.
    async fn authenticate(&self, email: &str, password: &str) -> Option<Identity>;
}
