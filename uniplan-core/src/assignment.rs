//! Assignment records from the user profile.

use serde::{Deserialize, Serialize};

/// An assignment as stored in the user's profile (one serialized JSON
/// string per record, parsed once at the boundary).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub course_title: String,
    /// ISO-parseable due date.
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub description: String,
}
