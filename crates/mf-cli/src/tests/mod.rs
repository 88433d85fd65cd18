mod cli;

use mf_auth::FixedCredentialTable;
use mf_session::{MemoryStorage, SessionStore, StoreOptions};

use std::sync::Arc;
use std::time::Duration;

pub(crate) fn memory_store() -> SessionStore {
    SessionStore::open(
        Arc::new(FixedCredentialTable::mefit()),
        Arc::new(MemoryStorage::new()),
        StoreOptions::default().with_latency(Duration::ZERO),
    )
}
