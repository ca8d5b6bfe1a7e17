use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use uniplan_core::recurrence::{events_in_range, events_on_day};
use uniplan_core::view::{DateRange, ViewMode};

use crate::render::render_event_line;

/// Flat agenda for a single day, with event ids for use with `delete`.
pub fn run(date: NaiveDate) -> Result<()> {
    let planner = super::load_planner()?;

    let range = DateRange::for_view(date, ViewMode::Schedule);
    let candidates = events_in_range(&planner.events, &range);
    let occurrences = events_on_day(&candidates, date);

    if occurrences.is_empty() {
        println!("{}", "No events scheduled".dimmed());
        return Ok(());
    }

    for event in &occurrences {
        println!(
            "{}  {}",
            render_event_line(event, planner.fallback_color()),
            event.id.dimmed()
        );
    }

    Ok(())
}
