//! Synthetic event materialization.
//!
//! Courses and assignments live in the user profile as serialized records.
//! On every load they are re-derived into events and merged with the stored
//! event list; nothing synthetic is ever persisted. The derivation is
//! idempotent (stable ids), so each materialization replaces the last.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::assignment::Assignment;
use crate::course::Course;
use crate::event::{Event, Repeat};
use crate::profile::UserProfile;
use crate::weekday::parse_day_letters;

/// Merge stored events with synthetic events derived from the profile.
///
/// `today` anchors course meeting times: only their time-of-day is
/// meaningful, but they need a date component to be representable. Callers
/// must not read the date half of a course event's start/end.
pub fn materialize(stored: &[Event], profile: &UserProfile, today: NaiveDate) -> Vec<Event> {
    let mut events = course_events(&profile.course_schedule, today);
    events.extend(assignment_events(&profile.assignments));
    events.extend(stored.iter().cloned());
    events
}

/// Derive one weekly event per (meeting time, day letter) from the raw
/// course records.
///
/// Malformed records are logged and skipped; a single bad course never
/// aborts the rest.
pub fn course_events(raw_courses: &[String], today: NaiveDate) -> Vec<Event> {
    let mut events = Vec::new();

    for raw in raw_courses {
        let course: Course = match serde_json::from_str(raw) {
            Ok(course) => course,
            Err(e) => {
                log::warn!("Skipping unparseable course record: {}", e);
                continue;
            }
        };

        if course.meeting_times.is_empty() {
            log::debug!("Course '{}' has no meeting times", course.name);
            continue;
        }

        for meeting in &course.meeting_times {
            let (Some(days), Some(time)) = (&meeting.days, &meeting.time) else {
                log::debug!("Course '{}': meeting missing days or time", course.name);
                continue;
            };

            let Some((start, end)) = parse_time_span(time) else {
                log::warn!(
                    "Course '{}': unparseable meeting time \"{}\"",
                    course.name,
                    time
                );
                continue;
            };

            let start_time = today.and_time(start);
            let end_time = today.and_time(end);

            for day in parse_day_letters(days) {
                events.push(Event {
                    id: Event::course_id(&course.crn, day),
                    title: course.name.clone(),
                    location: meeting.location.clone(),
                    date: start_time,
                    start_time,
                    end_time,
                    color: None,
                    repeat: Repeat::Weekly,
                    day: Some(day),
                    is_course: true,
                    is_assignment: false,
                });
            }
        }
    }

    events
}

/// Derive one-off due-date events from the raw assignment records.
/// Completed assignments produce nothing.
pub fn assignment_events(raw_assignments: &[String]) -> Vec<Event> {
    let mut events = Vec::new();

    for raw in raw_assignments {
        let assignment: Assignment = match serde_json::from_str(raw) {
            Ok(assignment) => assignment,
            Err(e) => {
                log::warn!("Skipping unparseable assignment record: {}", e);
                continue;
            }
        };

        if assignment.completed {
            continue;
        }

        let Some(due) = parse_iso_datetime(&assignment.due_date) else {
            log::warn!(
                "Assignment '{}': unparseable due date \"{}\"",
                assignment.title,
                assignment.due_date
            );
            continue;
        };

        let course_title = assignment.course_title.trim();
        events.push(Event {
            id: Event::assignment_id(&assignment.id),
            title: assignment.title.clone(),
            location: (!course_title.is_empty()).then(|| course_title.to_string()),
            date: due,
            start_time: due,
            end_time: due + Duration::hours(1),
            color: None,
            repeat: Repeat::None,
            day: None,
            is_course: false,
            is_assignment: true,
        });
    }

    events
}

/// Split a `"<start> - <end>"` meeting span into two times of day.
pub fn parse_time_span(span: &str) -> Option<(NaiveTime, NaiveTime)> {
    let (start, end) = span.split_once(" - ")?;
    Some((parse_clock_time(start)?, parse_clock_time(end)?))
}

/// Parse a 12-hour clock string ("9:05 am", "12:30pm") into a time of day.
///
/// "12:xx am" maps to hour 0; "12:xx pm" stays at hour 12; any other pm
/// hour gains 12.
pub fn parse_clock_time(input: &str) -> Option<NaiveTime> {
    let lower = input.trim().to_lowercase();

    let (clock, is_pm) = if let Some(rest) = lower.strip_suffix("pm") {
        (rest.trim_end(), true)
    } else if let Some(rest) = lower.strip_suffix("am") {
        (rest.trim_end(), false)
    } else {
        return None;
    };

    let (hour_str, minute_str) = clock.split_once(':')?;
    let hour: u32 = hour_str.trim().parse().ok()?;
    let minute: u32 = minute_str.trim().parse().ok()?;

    let hour = if is_pm && hour != 12 {
        hour + 12
    } else if !is_pm && hour == 12 {
        0
    } else {
        hour
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Parse an ISO-ish due date: RFC 3339 first, then a bare datetime, then a
/// bare date (midnight).
pub fn parse_iso_datetime(input: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
    }

    fn algo_course() -> String {
        r#"{
            "name": "Algorithms",
            "crn": "21457",
            "meetingTimes": [
                {"days": "MWF", "time": "9:05 am - 9:55 am", "location": "Wean 7500"}
            ]
        }"#
        .to_string()
    }

    // --- parse_clock_time ---

    #[test]
    fn clock_midnight_and_noon() {
        assert_eq!(
            parse_clock_time("12:00 am"),
            NaiveTime::from_hms_opt(0, 0, 0)
        );
        assert_eq!(
            parse_clock_time("12:00 pm"),
            NaiveTime::from_hms_opt(12, 0, 0)
        );
    }

    #[test]
    fn clock_pm_adds_twelve() {
        assert_eq!(
            parse_clock_time("1:30 pm"),
            NaiveTime::from_hms_opt(13, 30, 0)
        );
    }

    #[test]
    fn clock_am_stays() {
        assert_eq!(
            parse_clock_time("11:45 am"),
            NaiveTime::from_hms_opt(11, 45, 0)
        );
    }

    #[test]
    fn clock_tolerates_case_and_spacing() {
        assert_eq!(
            parse_clock_time("9:05AM"),
            NaiveTime::from_hms_opt(9, 5, 0)
        );
        assert_eq!(
            parse_clock_time("  3:00 PM "),
            NaiveTime::from_hms_opt(15, 0, 0)
        );
    }

    #[test]
    fn clock_rejects_garbage() {
        assert_eq!(parse_clock_time("9:05"), None); // no meridiem
        assert_eq!(parse_clock_time("half past nine"), None);
        assert_eq!(parse_clock_time("25:00 pm"), None);
    }

    #[test]
    fn time_span_splits_both_sides() {
        let (start, end) = parse_time_span("9:05 am - 9:55 am").unwrap();
        assert_eq!(start, NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(9, 55, 0).unwrap());
        assert_eq!(parse_time_span("9:05 am"), None);
    }

    // --- course_events ---

    #[test]
    fn course_expands_one_event_per_day_letter() {
        let events = course_events(&[algo_course()], today());

        assert_eq!(events.len(), 3);
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["course-21457-M", "course-21457-W", "course-21457-F"]
        );
        for event in &events {
            assert!(event.is_course);
            assert_eq!(event.repeat, Repeat::Weekly);
            assert_eq!(event.title, "Algorithms");
            assert_eq!(event.location.as_deref(), Some("Wean 7500"));
            assert_eq!(event.start_time.time(), NaiveTime::from_hms_opt(9, 5, 0).unwrap());
            assert_eq!(event.end_time.time(), NaiveTime::from_hms_opt(9, 55, 0).unwrap());
        }
        assert_eq!(events[0].day, Some(Weekday::Monday));
        assert_eq!(events[2].day, Some(Weekday::Friday));
    }

    #[test]
    fn course_without_meetings_is_skipped() {
        let raw = r#"{"name": "Thesis", "crn": "99001", "meetingTimes": []}"#.to_string();
        assert!(course_events(&[raw], today()).is_empty());
    }

    #[test]
    fn meeting_missing_days_or_time_is_skipped() {
        let raw = r#"{
            "name": "Seminar",
            "crn": "30010",
            "meetingTimes": [
                {"time": "2:00 pm - 3:00 pm"},
                {"days": "T"},
                {"days": "R", "time": "2:00 pm - 3:00 pm"}
            ]
        }"#
        .to_string();

        let events = course_events(&[raw], today());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "course-30010-R");
    }

    #[test]
    fn malformed_course_record_is_isolated() {
        let valid_two = r#"{
            "name": "Linear Algebra",
            "crn": "18100",
            "meetingTimes": [{"days": "TR", "time": "1:25 pm - 2:45 pm"}]
        }"#
        .to_string();

        let events = course_events(
            &[algo_course(), "{not valid json".to_string(), valid_two],
            today(),
        );

        // 3 from Algorithms, 2 from Linear Algebra, nothing lost around the
        // bad record.
        assert_eq!(events.len(), 5);
    }

    #[test]
    fn materialization_is_idempotent() {
        let profile = UserProfile {
            course_schedule: vec![algo_course()],
            assignments: vec![homework(false)],
        };

        let first = materialize(&[], &profile, today());
        let second = materialize(&[], &profile, today());

        let first_ids: Vec<&str> = first.iter().map(|e| e.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
    }

    // --- assignment_events ---

    fn homework(completed: bool) -> String {
        format!(
            r#"{{
                "id": "hw4",
                "title": "Homework 4",
                "courseTitle": "Algorithms",
                "dueDate": "2026-03-20T23:59:00",
                "completed": {},
                "description": "Dynamic programming"
            }}"#,
            completed
        )
    }

    #[test]
    fn assignment_becomes_one_hour_event() {
        let events = assignment_events(&[homework(false)]);

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.id, "assignment-hw4");
        assert!(event.is_assignment);
        assert_eq!(event.repeat, Repeat::None);
        assert_eq!(event.date, event.start_time);
        assert_eq!(event.end_time - event.start_time, Duration::hours(1));
        assert_eq!(event.location.as_deref(), Some("Algorithms"));
    }

    #[test]
    fn completed_assignment_is_suppressed() {
        assert!(assignment_events(&[homework(true)]).is_empty());
    }

    #[test]
    fn unparseable_due_date_is_skipped() {
        let raw = r#"{"id": "x", "title": "Essay", "dueDate": "whenever"}"#.to_string();
        assert!(assignment_events(&[raw]).is_empty());
    }

    #[test]
    fn due_date_accepts_rfc3339_and_bare_date() {
        let zoned = r#"{"id": "a", "title": "Lab", "dueDate": "2026-04-01T17:00:00Z"}"#.to_string();
        let date_only = r#"{"id": "b", "title": "Quiz", "dueDate": "2026-04-02"}"#.to_string();

        let events = assignment_events(&[zoned, date_only]);
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0].start_time,
            NaiveDate::from_ymd_opt(2026, 4, 1)
                .unwrap()
                .and_hms_opt(17, 0, 0)
                .unwrap()
        );
        assert_eq!(
            events[1].start_time,
            NaiveDate::from_ymd_opt(2026, 4, 2)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    // --- materialize ---

    #[test]
    fn merges_synthetic_and_stored() {
        let stored = vec![Event::new(
            "Gym",
            today().and_hms_opt(18, 0, 0).unwrap(),
            today().and_hms_opt(19, 0, 0).unwrap(),
            None,
            None,
            Repeat::Daily,
        )];
        let profile = UserProfile {
            course_schedule: vec![algo_course()],
            assignments: vec![homework(false)],
        };

        let events = materialize(&stored, &profile, today());
        assert_eq!(events.len(), 5); // 3 course + 1 assignment + 1 stored
        assert!(events.iter().any(|e| e.title == "Gym"));
    }

    #[test]
    fn empty_profile_yields_stored_only() {
        let events = materialize(&[], &UserProfile::default(), today());
        assert!(events.is_empty());
    }
}
