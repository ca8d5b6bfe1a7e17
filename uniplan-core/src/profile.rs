//! User profile snapshot: course schedule and assignments.
//!
//! The surrounding app fetches the user record from its account backend;
//! here the record's read-only `courseSchedule` and `assignments` fields
//! are a local JSON snapshot under the planner directory.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::UniplanConfig;
use crate::error::{UniplanError, UniplanResult};

/// Read-only fields of the user record: sequences of serialized course and
/// assignment JSON records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub course_schedule: Vec<String>,
    #[serde(default)]
    pub assignments: Vec<String>,
}

impl UserProfile {
    /// Load the profile snapshot from the configured planner directory.
    pub fn open() -> UniplanResult<UserProfile> {
        let config = UniplanConfig::load()?;
        UserProfile::load(&config.data_path().join("profile.json"))
    }

    /// Load a profile snapshot. A missing file is an empty profile (zero
    /// synthetic events), not an error.
    pub fn load(path: &Path) -> UniplanResult<UserProfile> {
        if !path.exists() {
            return Ok(UserProfile::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            UniplanError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty_profile() {
        let dir = tempfile::tempdir().unwrap();
        let profile = UserProfile::load(&dir.path().join("profile.json")).unwrap();
        assert!(profile.course_schedule.is_empty());
        assert!(profile.assignments.is_empty());
    }

    #[test]
    fn loads_snapshot_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(
            &path,
            r#"{"courseSchedule": ["{}"], "assignments": ["{}", "{}"]}"#,
        )
        .unwrap();

        let profile = UserProfile::load(&path).unwrap();
        assert_eq!(profile.course_schedule.len(), 1);
        assert_eq!(profile.assignments.len(), 2);
    }

    #[test]
    fn partial_snapshot_defaults_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, r#"{"assignments": []}"#).unwrap();

        let profile = UserProfile::load(&path).unwrap();
        assert!(profile.course_schedule.is_empty());
    }
}
