//! View modes and the date ranges they imply.
//!
//! Everything here is pure: ranges are derived from a reference date and
//! returned as new values, never by mutating a caller-supplied date.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Calendar view granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
    Month,
    Schedule,
}

/// Inclusive date range covered by a view.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Range implied by a view mode around a reference date.
    ///
    /// Day and Schedule cover the reference day; Week covers the
    /// Sunday-to-Saturday window containing it; Month covers the first
    /// through last day of its month.
    pub fn for_view(reference: NaiveDate, view: ViewMode) -> DateRange {
        match view {
            ViewMode::Day | ViewMode::Schedule => DateRange::for_day(reference),
            ViewMode::Week => {
                let week_start =
                    reference - Duration::days(reference.weekday().num_days_from_sunday() as i64);
                DateRange {
                    start: day_start(week_start),
                    end: day_end(week_start + Duration::days(6)),
                }
            }
            ViewMode::Month => {
                let first = reference.with_day(1).unwrap_or(reference);
                DateRange {
                    start: day_start(first),
                    end: day_end(last_day_of_month(first)),
                }
            }
        }
    }

    /// Single-day range: 00:00:00.000 through 23:59:59.999.
    pub fn for_day(day: NaiveDate) -> DateRange {
        DateRange {
            start: day_start(day),
            end: day_end(day),
        }
    }

    /// Whether an instant falls inside the range (both bounds inclusive).
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// The calendar days the range touches, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let first = self.start.date();
        let count = (self.end.date() - first).num_days() + 1;
        (0..count).map(move |offset| first + Duration::days(offset))
    }
}

fn day_start(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

fn day_end(day: NaiveDate) -> NaiveDateTime {
    // 23:59:59.999; from_hms_milli_opt only fails on out-of-range input
    day.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN))
}

/// Last calendar day of the month containing `first` (the month's first day).
fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    next_month.map(|d| d - Duration::days(1)).unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_range_covers_whole_day() {
        let range = DateRange::for_view(date(2026, 3, 18), ViewMode::Day);
        assert_eq!(range.start, date(2026, 3, 18).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(
            range.end,
            date(2026, 3, 18).and_hms_milli_opt(23, 59, 59, 999).unwrap()
        );
        assert!(range.contains(date(2026, 3, 18).and_hms_opt(23, 59, 59).unwrap()));
        assert!(!range.contains(date(2026, 3, 19).and_hms_opt(0, 0, 0).unwrap()));
    }

    #[test]
    fn schedule_range_equals_day_range() {
        let reference = date(2026, 3, 18);
        assert_eq!(
            DateRange::for_view(reference, ViewMode::Schedule),
            DateRange::for_view(reference, ViewMode::Day)
        );
    }

    #[test]
    fn week_range_runs_sunday_to_saturday() {
        // 2026-03-18 is a Wednesday; its week is Mar 15 (Sun) - Mar 21 (Sat)
        let range = DateRange::for_view(date(2026, 3, 18), ViewMode::Week);
        assert_eq!(range.start.date(), date(2026, 3, 15));
        assert_eq!(range.end.date(), date(2026, 3, 21));

        // A reference on Sunday starts its own week
        let range = DateRange::for_view(date(2026, 3, 15), ViewMode::Week);
        assert_eq!(range.start.date(), date(2026, 3, 15));
    }

    #[test]
    fn month_range_covers_first_to_last() {
        let range = DateRange::for_view(date(2026, 2, 14), ViewMode::Month);
        assert_eq!(range.start.date(), date(2026, 2, 1));
        assert_eq!(range.end.date(), date(2026, 2, 28));

        // Leap year February and a December year rollover
        let range = DateRange::for_view(date(2028, 2, 3), ViewMode::Month);
        assert_eq!(range.end.date(), date(2028, 2, 29));
        let range = DateRange::for_view(date(2026, 12, 31), ViewMode::Month);
        assert_eq!(range.start.date(), date(2026, 12, 1));
        assert_eq!(range.end.date(), date(2026, 12, 31));
    }

    #[test]
    fn days_iterates_every_calendar_day() {
        let range = DateRange::for_view(date(2026, 3, 18), ViewMode::Week);
        let days: Vec<NaiveDate> = range.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2026, 3, 15));
        assert_eq!(days[6], date(2026, 3, 21));

        let single: Vec<NaiveDate> = DateRange::for_day(date(2026, 3, 18)).days().collect();
        assert_eq!(single, vec![date(2026, 3, 18)]);
    }
}
