//! Persisted event store.
//!
//! Stored (user-created) events live as one JSON list under the planner
//! directory. Synthetic course/assignment events are never written here;
//! they are re-derived from the profile on every load.

use std::path::{Path, PathBuf};

use crate::config::UniplanConfig;
use crate::error::{UniplanError, UniplanResult};
use crate::event::Event;

/// File-backed store for user-created events.
#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    /// Store under the configured planner directory.
    pub fn open() -> UniplanResult<Self> {
        let config = UniplanConfig::load()?;
        Ok(EventStore {
            path: config.data_path().join("events.json"),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        EventStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all stored events. A missing file is an empty store.
    pub fn load(&self) -> UniplanResult<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            UniplanError::Serialization(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    /// Write the full event list back to disk.
    pub fn save(&self, events: &[Event]) -> UniplanResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(events)
            .map_err(|e| UniplanError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Insert a new event or replace the stored event with the same id.
    /// Synthetic events are refused: they are derived, not stored.
    pub fn add_or_update(&self, event: &Event) -> UniplanResult<()> {
        if event.is_synthetic() {
            return Err(UniplanError::SyntheticEvent(event.id.clone()));
        }

        let mut events = self.load()?;
        match events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event.clone(),
            None => events.push(event.clone()),
        }
        self.save(&events)
    }

    /// Delete a stored event by id. Deleting an id that isn't stored is a
    /// no-op; synthetic ids are refused.
    pub fn delete(&self, id: &str) -> UniplanResult<()> {
        if id.starts_with("course-") || id.starts_with("assignment-") {
            return Err(UniplanError::SyntheticEvent(id.to_string()));
        }

        let mut events = self.load()?;
        events.retain(|e| e.id != id);
        self.save(&events)
    }
}
