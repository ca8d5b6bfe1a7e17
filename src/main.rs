mod commands;
mod render;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "uniplan")]
#[command(about = "Your courses, assignments, and events in one planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Events for a single day
    Day {
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// The Sunday-to-Saturday week around a date
    Week {
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// The full month around a date
    Month {
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Flat agenda for a single day
    Schedule {
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Create a new event
    New {
        title: Option<String>,

        /// Start date/time (natural language, e.g. "tomorrow 3pm")
        #[arg(short, long)]
        start: Option<String>,

        /// End date/time
        #[arg(short, long)]
        end: Option<String>,

        /// Duration from start (e.g. "1h 30m"); ignored when --end is given
        #[arg(short = 'D', long)]
        duration: Option<String>,

        /// Where the event happens
        #[arg(short, long)]
        location: Option<String>,

        /// How often the event repeats (daily, weekly, monthly, yearly)
        #[arg(short, long)]
        repeat: Option<String>,

        /// Display color (hex, e.g. "#4a90d9")
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Delete a stored event by id
    Delete { id: String },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Day { date } => commands::day::run(reference_date(date.as_deref())?),
        Commands::Week { date } => commands::week::run(reference_date(date.as_deref())?),
        Commands::Month { date } => commands::month::run(reference_date(date.as_deref())?),
        Commands::Schedule { date } => commands::schedule::run(reference_date(date.as_deref())?),
        Commands::New {
            title,
            start,
            end,
            duration,
            location,
            repeat,
            color,
        } => commands::new::run(title, start, end, duration, location, repeat, color),
        Commands::Delete { id } => commands::delete::run(&id),
    }
}

/// Parse an explicit YYYY-MM-DD reference date, defaulting to today.
fn reference_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s)),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
