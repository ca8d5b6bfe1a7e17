//! Planner event types.
//!
//! `Event` is the one record that flows through materialization, range
//! filtering, and day resolution. User-created events and synthetic events
//! derived from courses/assignments share this shape; the provenance flags
//! tell them apart.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::weekday::Weekday;

/// How often an event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repeat {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Repeat {
    /// Whether the event has more than one occurrence.
    pub fn is_repeating(&self) -> bool {
        !matches!(self, Repeat::None)
    }
}

/// A planner event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Anchor instant: the occurrence for one-off events, the first
    /// occurrence for repeating ones.
    pub date: NaiveDateTime,
    /// For course events only the time-of-day component is meaningful;
    /// the meeting day comes from `day`, not from this date.
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,

    /// Display color (hex). The renderer applies a default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default)]
    pub repeat: Repeat,
    /// Meeting weekday, set on synthetic course events only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<Weekday>,

    // Provenance flags
    #[serde(default)]
    pub is_course: bool,
    #[serde(default)]
    pub is_assignment: bool,
}

impl Event {
    /// Create a user event. The id is generated once here and kept for the
    /// lifetime of the event; the anchor date is the start instant.
    pub fn new(
        title: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        location: Option<String>,
        color: Option<String>,
        repeat: Repeat,
    ) -> Event {
        Event {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            location,
            date: start_time,
            start_time,
            end_time,
            color,
            repeat,
            day: None,
            is_course: false,
            is_assignment: false,
        }
    }

    /// Stable id for a course meeting event. Re-deriving the same course
    /// input reproduces the same id, so re-materialization never duplicates.
    pub fn course_id(crn: &str, day: Weekday) -> String {
        format!("course-{}-{}", crn, day.letter())
    }

    /// Stable id for an assignment due-date event.
    pub fn assignment_id(assignment_id: &str) -> String {
        format!("assignment-{}", assignment_id)
    }

    /// True for events derived from the course schedule or assignments.
    /// These are recomputed on every load and never persisted or edited.
    pub fn is_synthetic(&self) -> bool {
        self.is_course || self.is_assignment
    }
}
