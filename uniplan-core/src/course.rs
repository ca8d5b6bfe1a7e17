//! Course schedule records from the user profile.
//!
//! Each course arrives as one serialized JSON string; the fields below are
//! the shape that string is parsed into, once, at the boundary. Nothing
//! downstream touches raw JSON.

use serde::{Deserialize, Serialize};

/// A course as stored in the user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub name: String,
    /// Course reference number; the stable half of synthetic event ids.
    pub crn: String,
    #[serde(default)]
    pub meeting_times: Vec<MeetingTime>,
}

/// One meeting pattern within a course, e.g. "MWF" at "9:05 am - 9:55 am".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingTime {
    /// Concatenated day letters ("MWF", "TR").
    #[serde(default)]
    pub days: Option<String>,
    /// "<start> - <end>", both sides 12-hour clock strings with am/pm.
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}
