use crate::{Authenticator, Credential};

use mf_core::{Identity, IdentityId};

use async_trait::async_trait;
use log::debug;

/// In-process credential table standing in for an authentication backend.
///
/// Matching is exact and case-sensitive on both email and password.
#[derive(Debug, Clone, Default)]
pub struct FixedCredentialTable {
    credentials: Vec<Credential>,
}

impl FixedCredentialTable {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }

    /// The three built-in accounts: administrator, contributor and member.
    pub fn mefit() -> Self {
        Self::new(vec![
            Credential::new(
                "admin123",
                canned(1, "admin@mefit.com", "Admin", true, true),
            ),
            Credential::new(
                "contrib123",
                canned(2, "contributor@mefit.com", "Contributor", true, false),
            ),
            Credential::new(
                "user123",
                canned(3, "user@mefit.com", "Regular", false, false),
            ),
        ])
    }

    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credentials.push(credential);
        self
    }

    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    pub fn lookup(&self, email: &str, password: &str) -> Option<&Identity> {
        self.credentials
            .iter()
            .find(|c| c.matches(email, password))
            .map(|c| &c.identity)
    }
}

#[async_trait]
impl Authenticator for FixedCredentialTable {
    async fn authenticate(&self, email: &str, password: &str) -> Option<Identity> {
        let identity = self.lookup(email, password).cloned();
        if identity.is_none() {
            debug!("No credential match for {email}");
        }
        identity
    }
}

fn canned(
    id: u64,
    email: &str,
    first_name: &str,
    is_contributor: bool,
    is_admin: bool,
) -> Identity {
    Identity {
        id: IdentityId::from(id),
        email: email.to_string(),
        first_name: first_name.to_string(),
        last_name: "User".to_string(),
        is_contributor,
        is_admin,
        has_profile: true,
    }
}
