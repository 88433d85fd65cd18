use mf_core::Identity;

/// Result of loading a snapshot - distinguishes "not found" from corruption.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadResult {
    pub identity: Option<Identity>,
    /// Present if a value exists but could not be decoded
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub fn is_corrupted(&self) -> bool {
        self.corruption_error.is_some()
    }
}
