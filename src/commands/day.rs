use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use uniplan_core::recurrence::{events_in_range, events_on_day};
use uniplan_core::view::{DateRange, ViewMode};

use crate::render::{format_day_heading, render_event_line};

pub fn run(date: NaiveDate) -> Result<()> {
    let planner = super::load_planner()?;

    let range = DateRange::for_view(date, ViewMode::Day);
    let candidates = events_in_range(&planner.events, &range);
    let occurrences = events_on_day(&candidates, date);

    println!("{}", format_day_heading(date).bold());

    if occurrences.is_empty() {
        println!("  {}", "No events".dimmed());
        return Ok(());
    }

    for event in &occurrences {
        println!("  {}", render_event_line(event, planner.fallback_color()));
    }

    Ok(())
}
