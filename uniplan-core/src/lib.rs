//! Core engine for the uniplan student planner.
//!
//! Everything below the terminal UI lives here: the event model, synthetic
//! event materialization from the user's course schedule and assignments,
//! recurrence evaluation and range filtering for the calendar views, and
//! the JSON-backed event store.

pub mod assignment;
pub mod config;
pub mod course;
pub mod error;
pub mod event;
pub mod materialize;
pub mod profile;
pub mod recurrence;
pub mod store;
pub mod view;
pub mod weekday;

pub use error::{UniplanError, UniplanResult};
pub use event::{Event, Repeat};
pub use view::{DateRange, ViewMode};
pub use weekday::Weekday;
