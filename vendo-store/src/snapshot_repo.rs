use std::fs;
use std::path::{Path, PathBuf};

use vendo_machine::{MachineSnapshot, SnapshotStore};

/// Snapshot store backed by a single JSON file.
///
/// A missing file means no snapshot has ever been saved; an unreadable or
/// undecodable file is an error the caller decides how to handle.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<MachineSnapshot>, Box<dyn std::error::Error + Send + Sync>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let snapshot = serde_json::from_str(&raw)?;
        tracing::debug!(path = %self.path.display(), "snapshot loaded");
        Ok(Some(snapshot))
    }

    fn save(
        &self,
        snapshot: &MachineSnapshot,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let raw = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, raw)?;
        tracing::debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }
}
