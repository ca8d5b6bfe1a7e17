use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use uniplan_core::recurrence::{events_in_range, events_on_day};
use uniplan_core::view::{DateRange, ViewMode};

use crate::render::{format_day_heading, render_event_line};

pub fn run(date: NaiveDate) -> Result<()> {
    let planner = super::load_planner()?;

    let range = DateRange::for_view(date, ViewMode::Week);
    let candidates = events_in_range(&planner.events, &range);

    println!(
        "{}",
        format!(
            "Week of {} \u{2013} {}",
            range.start.date().format("%b %-d"),
            range.end.date().format("%b %-d")
        )
        .bold()
    );

    let mut printed_any = false;
    for day in range.days() {
        let occurrences = events_on_day(&candidates, day);
        if occurrences.is_empty() {
            continue;
        }

        println!();
        printed_any = true;

        println!("{}", format_day_heading(day).bold());
        for event in &occurrences {
            println!("  {}", render_event_line(event, planner.fallback_color()));
        }
    }

    if !printed_any {
        println!("  {}", "No events this week".dimmed());
    }

    Ok(())
}
