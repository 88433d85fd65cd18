use mf_core::Identity;

/// What consumers see: the current identity and whether an operation is
/// still settling.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl SessionState {
    /// Before the initial restore has run.
    pub fn starting() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }

    pub fn ready(identity: Option<Identity>) -> Self {
        Self {
            identity,
            loading: false,
        }
    }
}
