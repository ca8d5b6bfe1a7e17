//! CLI subcommands.

pub mod day;
pub mod delete;
pub mod month;
pub mod new;
pub mod schedule;
pub mod week;

use anyhow::Result;
use uniplan_core::config::UniplanConfig;
use uniplan_core::event::Event;
use uniplan_core::materialize::materialize;
use uniplan_core::profile::UserProfile;
use uniplan_core::store::EventStore;

/// Everything a view command works from: the merged event list and the
/// config that shapes rendering.
pub struct Planner {
    pub events: Vec<Event>,
    pub config: UniplanConfig,
}

impl Planner {
    pub fn fallback_color(&self) -> Option<&str> {
        self.config.default_color.as_deref()
    }
}

/// Load stored events and merge in the synthetic course/assignment events
/// derived from the profile snapshot.
pub fn load_planner() -> Result<Planner> {
    let config = UniplanConfig::load()?;
    let today = chrono::Local::now().date_naive();

    let stored = EventStore::open()?.load()?;
    let profile = UserProfile::open()?;

    Ok(Planner {
        events: materialize(&stored, &profile, today),
        config,
    })
}
