//! Subscriber Store: the broadcast recipient set in a local JSON file.
//!
//! Set semantics persisted as a sorted flat list. `add` and `remove` write
//! through immediately; a missing or unreadable file loads as the empty
//! set.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::Result;

/// JSON-file-backed set of recipient ids.
pub struct SubscriberStore {
    path: PathBuf,
}

impl SubscriberStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads the current recipient set.
    pub fn load(&self) -> BTreeSet<i64> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return BTreeSet::new();
        };
        match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "subscriber store unreadable, treating as empty");
                BTreeSet::new()
            }
        }
    }

    /// Adds `id` and persists; returns the updated set.
    pub fn add(&self, id: i64) -> Result<BTreeSet<i64>> {
        let mut ids = self.load();
        ids.insert(id);
        self.save(&ids)?;
        Ok(ids)
    }

    /// Removes `id` and persists; returns the updated set.
    pub fn remove(&self, id: i64) -> Result<BTreeSet<i64>> {
        let mut ids = self.load();
        ids.remove(&id);
        self.save(&ids)?;
        Ok(ids)
    }

    fn save(&self, ids: &BTreeSet<i64>) -> Result<()> {
        // BTreeSet serializes as a sorted array
        let json = serde_json::to_string(ids)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
