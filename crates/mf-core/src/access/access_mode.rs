use serde::{Deserialize, Serialize};

/// Render mode chosen for a gated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Render the primary content.
    Full,
    /// Signed in, but missing the capability; render the restricted notice.
    Restricted,
    /// No session; render the guest notice.
    Guest,
}

impl AccessMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Restricted => "restricted",
            Self::Guest => "guest",
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }
}

impl std::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
