use super::SlotStore;
use crate::Result;
use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Slot store persisted as a single JSON object on disk.
///
/// Every operation re-reads the file, so writes from another process are picked up;
/// concurrent writers race and the last one wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_slots(&self, slots: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(slots)?)?;
        debug!(
            target: "trip_planner::storage",
            path = %self.path.display(),
            slots = slots.len(),
            "Wrote slot file"
        );
        Ok(())
    }
}

impl SlotStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_slots()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let mut slots = self.read_slots()?;
        slots.insert(key.to_string(), value);
        self.write_slots(&slots)
    }

    fn remove(&mut self, key: &str) -> Result<Option<String>> {
        let mut slots = self.read_slots()?;
        let removed = slots.remove(key);
        if removed.is_some() {
            self.write_slots(&slots)?;
        }
        Ok(removed)
    }
}
