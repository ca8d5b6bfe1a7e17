//! Terminal rendering for planner events.

use chrono::{NaiveDate, NaiveDateTime};
use owo_colors::OwoColorize;
use uniplan_core::event::Event;

/// Dot color for events without an explicit one.
const DEFAULT_COLOR: (u8, u8, u8) = (74, 144, 217);

/// Format a date as a human-readable heading (e.g. "Today", "Tomorrow",
/// "Wed Feb 25").
pub fn format_day_heading(date: NaiveDate) -> String {
    let today = chrono::Local::now().date_naive();

    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// One rendered event line: colored dot, time span, title, location,
/// provenance tag.
pub fn render_event_line(event: &Event, fallback_color: Option<&str>) -> String {
    let (r, g, b) = event_rgb(event, fallback_color);
    let span = format!(
        "{}\u{2013}{}",
        format_time(event.start_time),
        format_time(event.end_time)
    );

    let mut line = format!("{} {} {}", "●".truecolor(r, g, b), span, event.title);
    if let Some(location) = &event.location {
        line.push_str(&format!(" {}", format!("({})", location).dimmed()));
    }
    if let Some(tag) = provenance_tag(event) {
        line.push_str(&format!(" {}", tag.dimmed()));
    }
    line
}

/// Format the time-of-day portion of an instant (e.g. "15:00")
pub fn format_time(instant: NaiveDateTime) -> String {
    instant.format("%H:%M").to_string()
}

fn provenance_tag(event: &Event) -> Option<&'static str> {
    if event.is_course {
        Some("[course]")
    } else if event.is_assignment {
        Some("[due]")
    } else {
        None
    }
}

fn event_rgb(event: &Event, fallback: Option<&str>) -> (u8, u8, u8) {
    event
        .color
        .as_deref()
        .or(fallback)
        .and_then(parse_hex_color)
        .unwrap_or(DEFAULT_COLOR)
}

/// Parse "#rrggbb" (leading '#' optional) into rgb components.
fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_with_and_without_hash() {
        assert_eq!(parse_hex_color("#4a90d9"), Some((0x4a, 0x90, 0xd9)));
        assert_eq!(parse_hex_color("ffffff"), Some((255, 255, 255)));
    }

    #[test]
    fn hex_color_rejects_bad_input() {
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn time_formats_24_hour() {
        let instant = chrono::NaiveDate::from_ymd_opt(2026, 3, 20)
            .unwrap()
            .and_hms_opt(15, 5, 0)
            .unwrap();
        assert_eq!(format_time(instant), "15:05");
    }
}
