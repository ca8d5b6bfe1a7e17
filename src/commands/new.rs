use anyhow::{Context, Result};
use chrono::{Duration, NaiveDateTime};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use uniplan_core::event::{Event, Repeat};
use uniplan_core::store::EventStore;

pub fn run(
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    duration: Option<String>,
    location: Option<String>,
    repeat: Option<String>,
    color: Option<String>,
) -> Result<()> {
    let interactive = title.is_none() || start.is_none();

    // --- Title ---
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Start ---
    let start_time = if let Some(s) = start {
        parse_datetime(&s)?
    } else {
        prompt_with_retry("  When?", parse_datetime)?
    };

    // --- Duration / End ---
    let end_time = if let Some(end_input) = end {
        parse_end(&end_input, start_time)?
    } else if let Some(dur_input) = duration {
        apply_duration(start_time, &dur_input)?
    } else if interactive {
        prompt_duration(start_time)?
    } else {
        start_time + Duration::hours(1)
    };

    // --- Location ---
    let location = if let Some(loc) = location {
        if loc.is_empty() { None } else { Some(loc) }
    } else if interactive {
        let loc: String = Input::new()
            .with_prompt("  Where? (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if loc.is_empty() { None } else { Some(loc) }
    } else {
        None
    };

    // --- Repeat ---
    let repeat = match repeat {
        Some(r) => parse_repeat(&r)?,
        None if interactive => prompt_repeat()?,
        None => Repeat::None,
    };

    let event = Event::new(title, start_time, end_time, location, color, repeat);
    EventStore::open()?.add_or_update(&event)?;

    if interactive {
        println!();
    }
    println!(
        "{}",
        format!("  Created: {} ({})", event.title, event.id).green()
    );

    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<F>(prompt: &str, parse: F) -> Result<NaiveDateTime>
where
    F: Fn(&str) -> Result<NaiveDateTime>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Prompt for duration/end with retry on parse errors.
fn prompt_duration(start: NaiveDateTime) -> Result<NaiveDateTime> {
    loop {
        let input: String = Input::new()
            .with_prompt("  How long? (1 hour)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if input.is_empty() {
            return Ok(start + Duration::hours(1));
        }
        match parse_end(&input, start) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

fn prompt_repeat() -> Result<Repeat> {
    let items = ["never", "daily", "weekly", "monthly", "yearly"];
    let selection = Select::new()
        .with_prompt("  Repeats?")
        .items(&items)
        .default(0)
        .interact()?;

    parse_repeat(items[selection])
}

fn parse_repeat(input: &str) -> Result<Repeat> {
    match input.to_lowercase().as_str() {
        "none" | "never" => Ok(Repeat::None),
        "daily" => Ok(Repeat::Daily),
        "weekly" => Ok(Repeat::Weekly),
        "monthly" => Ok(Repeat::Monthly),
        "yearly" | "annually" => Ok(Repeat::Yearly),
        _ => anyhow::bail!(
            "Unknown repeat \"{}\". Expected daily, weekly, monthly or yearly",
            input
        ),
    }
}

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    let mut result = String::new();
    let lower = input.to_lowercase();

    for (i, word) in lower.split_whitespace().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let expanded = abbrevs
            .iter()
            .find(|(abbr, _)| *abbr == word)
            .map(|(_, full)| *full)
            .unwrap_or(word);
        result.push_str(expanded);
    }

    result
}

/// Parse a natural language date/time string ("tomorrow 3pm", "march 20").
/// Date-only input lands at midnight.
fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let expanded = expand_abbreviations(input);
    fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date/time: \"{}\"", input))
}

/// Parse an end input: tries duration first (humantime), then date/time
/// (fuzzydate).
fn parse_end(input: &str, start: NaiveDateTime) -> Result<NaiveDateTime> {
    if let Ok(end) = try_apply_duration(start, input) {
        return Ok(end);
    }

    // Strip "until"/"to" prefix and parse as datetime
    let cleaned = input
        .strip_prefix("until ")
        .or_else(|| input.strip_prefix("to "))
        .unwrap_or(input);

    parse_datetime(cleaned)
}

/// Apply a duration string to a start time.
fn apply_duration(start: NaiveDateTime, dur_input: &str) -> Result<NaiveDateTime> {
    try_apply_duration(start, dur_input)
        .with_context(|| format!("Could not parse duration: \"{}\"", dur_input))
}

fn try_apply_duration(start: NaiveDateTime, dur_input: &str) -> Result<NaiveDateTime> {
    let std_dur = humantime::parse_duration(dur_input).map_err(|e| anyhow::anyhow!("{}", e))?;
    let chrono_dur = Duration::from_std(std_dur).context("Duration too large")?;

    Ok(start + chrono_dur)
}
