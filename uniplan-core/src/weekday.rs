//! Compact weekday encoding for course meeting days.
//!
//! Course schedules encode meeting days as a string of single letters
//! ("MWF", "TR"), one letter per weekday: U=Sunday, M=Monday, T=Tuesday,
//! W=Wednesday, R=Thursday, F=Friday, S=Saturday. The letters survive in
//! serialized form and in synthetic event ids; everything else works with
//! the typed enum.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A day of the week, serialized as its single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "U")]
    Sunday,
    #[serde(rename = "M")]
    Monday,
    #[serde(rename = "T")]
    Tuesday,
    #[serde(rename = "W")]
    Wednesday,
    #[serde(rename = "R")]
    Thursday,
    #[serde(rename = "F")]
    Friday,
    #[serde(rename = "S")]
    Saturday,
}

impl Weekday {
    /// Decode a single day letter. Returns None for anything outside the
    /// seven known codes.
    pub fn from_letter(letter: char) -> Option<Weekday> {
        match letter {
            'U' => Some(Weekday::Sunday),
            'M' => Some(Weekday::Monday),
            'T' => Some(Weekday::Tuesday),
            'W' => Some(Weekday::Wednesday),
            'R' => Some(Weekday::Thursday),
            'F' => Some(Weekday::Friday),
            'S' => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// The single-letter code for this weekday.
    pub fn letter(&self) -> char {
        match self {
            Weekday::Sunday => 'U',
            Weekday::Monday => 'M',
            Weekday::Tuesday => 'T',
            Weekday::Wednesday => 'W',
            Weekday::Thursday => 'R',
            Weekday::Friday => 'F',
            Weekday::Saturday => 'S',
        }
    }

    pub fn from_chrono(weekday: chrono::Weekday) -> Weekday {
        match weekday {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }

    /// Weekday of a calendar date.
    pub fn of(date: NaiveDate) -> Weekday {
        Weekday::from_chrono(date.weekday())
    }

    /// Whether `date` falls on this weekday.
    pub fn matches(&self, date: NaiveDate) -> bool {
        Weekday::of(date) == *self
    }
}

/// Parse a day-letter string like "MWF" into weekdays.
///
/// Order-independent set semantics; unknown letters are skipped with a
/// diagnostic rather than failing the whole string.
pub fn parse_day_letters(days: &str) -> Vec<Weekday> {
    days.chars()
        .filter_map(|c| {
            let day = Weekday::from_letter(c);
            if day.is_none() && !c.is_whitespace() {
                log::debug!("Ignoring unknown day letter '{}' in \"{}\"", c, days);
            }
            day
        })
        .collect()
}
