//! Recurrence evaluation: range pre-filtering and exact day resolution.
//!
//! `events_in_range` is a coarse pre-filter over the merged event list: it
//! keeps every event that could have an occurrence inside the range, and may
//! keep some that turn out not to (a cheap reachability test, not an
//! occurrence enumerator). `events_on_day` is the exact per-day test the
//! views run for each rendered cell.

use chrono::{Datelike, NaiveDate};

use crate::event::{Event, Repeat};
use crate::view::DateRange;
use crate::weekday::Weekday;

/// Filter events down to those with at least one possible occurrence in
/// `range`. Permissive: never drops an event that genuinely occurs inside.
pub fn events_in_range(events: &[Event], range: &DateRange) -> Vec<Event> {
    events
        .iter()
        .filter(|event| may_occur_in_range(event, range))
        .cloned()
        .collect()
}

fn may_occur_in_range(event: &Event, range: &DateRange) -> bool {
    // Course events repeat weekly on their meeting weekday; they are in
    // range iff some day of the range falls on that weekday.
    if event.is_course {
        return event
            .day
            .is_some_and(|day| range.days().any(|d| day.matches(d)));
    }

    if !event.repeat.is_repeating() {
        return range.contains(event.date);
    }

    // Not started yet as of this range.
    if event.date > range.end {
        return false;
    }

    // First occurrence lands inside or after the range start: relevant
    // without any recurrence arithmetic.
    if event.date >= range.start {
        return true;
    }

    reachable_from(event, range.start.date())
}

/// Reachability of a repeating event anchored before `start`: can some
/// occurrence land on or after the range's first day, given the repeat
/// cycle?
///
/// Monthly/yearly compare day-of-month only. An anchor near the end of a
/// long month (the 31st) can be admitted into a shorter month where no
/// occurrence exists; the exact per-day test settles it.
fn reachable_from(event: &Event, start: NaiveDate) -> bool {
    let anchor = event.date.date();
    match event.repeat {
        Repeat::None => false,
        Repeat::Daily => true,
        Repeat::Weekly => (start - anchor).num_days() % 7 == 0,
        Repeat::Monthly => start.day() >= anchor.day(),
        Repeat::Yearly => {
            start.month() > anchor.month()
                || (start.month() == anchor.month() && start.day() >= anchor.day())
        }
    }
}

/// Exact test: does `event` have an occurrence on `day`?
pub fn occurs_on(event: &Event, day: NaiveDate) -> bool {
    if event.is_course {
        return event.day.is_some_and(|d| d.matches(day));
    }

    let anchor = event.date.date();

    if !event.repeat.is_repeating() {
        return anchor == day;
    }

    // Not started yet.
    if anchor > day {
        return false;
    }

    match event.repeat {
        Repeat::None => false,
        Repeat::Daily => true,
        Repeat::Weekly => Weekday::of(anchor) == Weekday::of(day),
        Repeat::Monthly => anchor.day() == day.day(),
        Repeat::Yearly => anchor.month() == day.month() && anchor.day() == day.day(),
    }
}

/// Events occurring on `day`, sorted ascending by start time of day.
pub fn events_on_day(events: &[Event], day: NaiveDate) -> Vec<Event> {
    let mut occurrences: Vec<Event> = events
        .iter()
        .filter(|event| occurs_on(event, day))
        .cloned()
        .collect();
    occurrences.sort_by_key(|event| event.start_time.time());
    occurrences
}
