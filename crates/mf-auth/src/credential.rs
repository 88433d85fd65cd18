use mf_core::Identity;

/// A known email/password pair and the identity it signs in as.
#[derive(Clone)]
pub struct Credential {
    pub password: String,
    pub identity: Identity,
}

impl Credential {
    pub fn new(password: impl Into<String>, identity: Identity) -> Self {
        Self {
            password: password.into(),
            identity,
        }
    }

    pub fn email(&self) -> &str {
        &self.identity.email
    }

    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.identity.email == email && self.password == password
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email())
            .field("password", &"<redacted>")
            .finish()
    }
}
