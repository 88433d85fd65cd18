//! The single owner of "who is using the app right now".

use crate::{
    SessionHandle, SessionSnapshot, SessionState, SessionStorage, StoreOptions, load_snapshot,
};

use mf_auth::{AuthError, Authenticator, Result as AuthErrorResult};
use mf_core::{Identity, SignUpRequest};

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::watch;

/// Holds the current identity and keeps it in durable storage.
///
/// Built once at startup with [`SessionStore::open`]. Mutations take
/// `&mut self`, so at most one sign-in/sign-up/sign-out runs at a time;
/// everything else reads through a [`SessionHandle`].
pub struct SessionStore {
    authenticator: Arc<dyn Authenticator>,
    storage: Arc<dyn SessionStorage>,
    options: StoreOptions,
    state_tx: watch::Sender<SessionState>,
    state_rx: watch::Receiver<SessionState>,
}

impl SessionStore {
    /// Create the store and restore any persisted session.
    pub fn open(
        authenticator: Arc<dyn Authenticator>,
        storage: Arc<dyn SessionStorage>,
        options: StoreOptions,
    ) -> Self {
        let (state_tx, state_rx) = watch::channel(SessionState::starting());

        let store = Self {
            authenticator,
            storage,
            options,
            state_tx,
            state_rx,
        };

        let identity = store.restore_session();
        store.set_state(SessionState::ready(identity));
        store
    }

    /// Read the persisted identity, if any.
    ///
    /// Never fails: a missing, unreadable or corrupted value yields `None`.
    /// Corrupted values are quarantined so the next start is clean.
    pub fn restore_session(&self) -> Option<Identity> {
        let key = self.options.storage_key.as_str();
        let result = load_snapshot(self.storage.as_ref(), key);

        if let Some(ref message) = result.corruption_error {
            warn!("Discarding corrupted session under '{key}': {message}");
            if let Err(e) = self.storage.quarantine(key) {
                warn!("Failed to quarantine session '{key}': {e}. {}", e.recovery_hint());
            }
        }

        result.identity
    }

    /// Sign in against the configured authenticator.
    ///
    /// On failure the previous session, if any, is left exactly as it was.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> AuthErrorResult<Identity> {
        self.begin();
        self.simulate_latency().await;

        match self.authenticator.authenticate(email, password).await {
            Some(identity) => {
                self.establish(identity.clone());
                info!("Signed in: {} ({})", identity.id, identity.role());
                Ok(identity)
            }
            None => {
                info!("Sign-in rejected for {email}");
                self.state_tx.send_modify(|state| state.loading = false);
                Err(AuthError::invalid_credentials())
            }
        }
    }

    /// Register a new identity and make it current.
    ///
    /// Always succeeds. The new identity gets a fresh id and has no profile
    /// yet. Existing accounts with the same email are not consulted.
    pub async fn sign_up(&mut self, request: SignUpRequest) -> Identity {
        self.begin();
        self.simulate_latency().await;

        let identity = Identity::register(request);
        self.establish(identity.clone());
        info!("Signed up: {} ({})", identity.id, identity.role());
        identity
    }

    /// Clear the session from memory and storage. Idempotent.
    pub fn sign_out(&mut self) {
        let key = self.options.storage_key.as_str();

        if let Err(e) = self.storage.remove(key) {
            warn!("Failed to remove session '{key}': {e}. {}", e.recovery_hint());
        }

        match self.state_tx.send_replace(SessionState::ready(None)).identity {
            Some(previous) => info!("Signed out: {}", previous.id),
            None => debug!("Sign-out with no active session"),
        }
    }

    pub fn current(&self) -> Option<Identity> {
        self.state_rx.borrow().identity.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state_rx.borrow().loading
    }

    /// Hand out a read-only view for a consumer.
    pub fn subscribe(&self) -> SessionHandle {
        SessionHandle::new(self.state_tx.subscribe())
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    fn begin(&self) {
        self.state_tx.send_modify(|state| state.loading = true);
    }

    async fn simulate_latency(&self) {
        if !self.options.latency.is_zero() {
            tokio::time::sleep(self.options.latency).await;
        }
    }

    /// Persist and publish. A storage failure is logged; the in-memory
    /// session is established regardless.
    fn establish(&self, identity: Identity) {
        let key = self.options.storage_key.as_str();
        let written = SessionSnapshot::new(identity.clone())
            .encode()
            .and_then(|raw| self.storage.write(key, &raw));

        if let Err(e) = written {
            warn!(
                "Failed to persist session {} under '{key}': {e}. {}",
                identity.id,
                e.recovery_hint()
            );
        }

        self.set_state(SessionState::ready(Some(identity)));
    }

    fn set_state(&self, state: SessionState) {
        self.state_tx.send_replace(state);
    }
}
