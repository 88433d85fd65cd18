use crate::SessionState;

use mf_core::{AccessMode, AccessRequirement, Identity, evaluate};

use tokio::sync::watch;

/// Read-only view of the session, handed to every consumer.
///
/// Handles cannot change the session; they only observe it.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    state_rx: watch::Receiver<SessionState>,
}

impl SessionHandle {
    pub(crate) fn new(state_rx: watch::Receiver<SessionState>) -> Self {
        Self { state_rx }
    }

    pub fn state(&self) -> SessionState {
        self.state_rx.borrow().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state_rx.borrow().identity.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state_rx.borrow().identity.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.state_rx.borrow().loading
    }

    /// Render mode for a gated view under the current session.
    pub fn access(&self, requirement: AccessRequirement) -> AccessMode {
        evaluate(self.state_rx.borrow().identity.as_ref(), requirement)
    }

    /// Waits for the next change. Returns `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<SessionState> {
        self.state_rx.changed().await.ok()?;
        Some(self.state_rx.borrow_and_update().clone())
    }
}
