//! JSON file persistence

use crate::{seed, SnapshotStore};
use cadre_core::{AgentDataStore, CadreResult, StorageError};
use std::fs;
use std::path::{Path, PathBuf};

/// Snapshot store backed by a pretty-printed JSON file.
///
/// Saves write to a sibling temp file and rename it into place, so a crash
/// mid-save never truncates the previous snapshot. A missing file means
/// first use: `load` returns the seed population without creating the file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut os = self.path.as_os_str().to_os_string();
        os.push(".tmp");
        PathBuf::from(os)
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> CadreResult<AgentDataStore> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "snapshot file absent, seeding");
            return Ok(seed());
        }

        let raw = fs::read_to_string(&self.path).map_err(|source| StorageError::Io {
            operation: "load",
            source,
        })?;
        let mut snapshot: AgentDataStore =
            serde_json::from_str(&raw).map_err(|e| StorageError::Serde {
                reason: e.to_string(),
            })?;
        snapshot.heal_id_counter();
        tracing::debug!(path = %self.path.display(), agents = snapshot.len(), "snapshot loaded");
        Ok(snapshot)
    }

    fn save(&self, snapshot: &AgentDataStore) -> CadreResult<()> {
        let json = serde_json::to_string_pretty(snapshot).map_err(|e| StorageError::Serde {
            reason: e.to_string(),
        })?;

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|source| StorageError::Io {
            operation: "save",
            source,
        })?;
        fs::rename(&temp, &self.path).map_err(|source| StorageError::Io {
            operation: "save",
            source,
        })?;
        tracing::debug!(path = %self.path.display(), agents = snapshot.len(), "snapshot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_seed() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("agents.json"));
        let snapshot = store.load().unwrap();
        assert_eq!(snapshot.len(), 9);
        // Seeding does not create the file.
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_load_roundtrip_exact() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("agents.json"));

        let snapshot = store.load().unwrap();
        store.save(&snapshot).unwrap();
        let reloaded = store.load().unwrap();
        assert_eq!(snapshot, reloaded);
    }

    #[test]
    fn test_save_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("agents.json"));

        let mut snapshot = store.load().unwrap();
        store.save(&snapshot).unwrap();
        snapshot.departments.clear();
        store.save(&snapshot).unwrap();

        let reloaded = store.load().unwrap();
        assert!(reloaded.departments.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_a_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agents.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(
            err,
            cadre_core::CadreError::Storage(StorageError::Serde { .. })
        ));
    }
}
