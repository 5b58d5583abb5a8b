//! CADRE Storage - Persistence Collaborators
//!
//! The engine treats persistence as an external collaborator: `load` returns
//! the full snapshot (default-populated on first use) and `save` writes the
//! full new snapshot after every command - never a partial diff. The
//! snapshot shape is the only persisted-state contract and must round-trip
//! exactly.

pub mod file;
pub mod identity;
pub mod seed;

pub use file::JsonFileStore;
pub use identity::{IdentityProvider, StaticIdentity, UnavailableIdentity, UserProfile};
pub use seed::seed;

use cadre_core::{AgentDataStore, CadreResult, StorageError};
use std::sync::RwLock;

/// Persistence collaborator contract.
pub trait SnapshotStore: Send + Sync {
    /// Load the current snapshot, seeding a default population on first use.
    fn load(&self) -> CadreResult<AgentDataStore>;

    /// Persist the full snapshot.
    fn save(&self, snapshot: &AgentDataStore) -> CadreResult<()>;
}

/// In-memory store for tests and embedding.
///
/// First `load` returns the seed population; `save` replaces the held
/// snapshot wholesale.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Option<AgentDataStore>>,
}

impl MemoryStore {
    /// Create an empty store; the first `load` seeds it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a snapshot.
    pub fn with_snapshot(snapshot: AgentDataStore) -> Self {
        Self {
            inner: RwLock::new(Some(snapshot)),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> CadreResult<AgentDataStore> {
        let guard = self.inner.read().map_err(|_| StorageError::LockPoisoned)?;
        let mut snapshot = match &*guard {
            Some(snapshot) => snapshot.clone(),
            None => seed(),
        };
        snapshot.heal_id_counter();
        Ok(snapshot)
    }

    fn save(&self, snapshot: &AgentDataStore) -> CadreResult<()> {
        let mut guard = self.inner.write().map_err(|_| StorageError::LockPoisoned)?;
        *guard = Some(snapshot.clone());
        Ok(())
    }
}
