//! `worktime` CLI — query free/busy time in a worker's schedule.
//!
//! ## Usage
//!
//! ```sh
//! # List free intervals on a day (schedule JSON on stdin)
//! cat schedule.json | worktime free 2024-10-10
//!
//! # Busy intervals, reading the schedule from a file
//! worktime --schedule schedule.json busy 2024-10-10
//!
//! # Is 12:00-13:00 free?
//! worktime -s schedule.json check 2024-10-10 12:00 13:00
//!
//! # One-hour slots with 30 minutes of padding around every booking
//! worktime -s schedule.json slots 2024-10-10 --duration 60 --buffer 30
//!
//! # JSON output
//! worktime -s schedule.json --json free 2024-10-10
//! ```
//!
//! Settings may also come from `worktime.toml` (or `--config PATH`):
//!
//! ```toml
//! schedule = "schedule.json"
//! default_buffer_minutes = 15
//! log_level = "info"
//! ```

mod settings;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use worktime_engine::{Schedule, ScheduleIndex, TimeRange};

use crate::settings::Settings;

#[derive(Parser)]
#[command(
    name = "worktime",
    version,
    about = "Free/busy analysis for a worker's daily schedule"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Schedule JSON file (reads from stdin if omitted and not configured)
    #[arg(short, long, global = true)]
    schedule: Option<PathBuf>,

    /// Path to a TOML settings file (defaults to ./worktime.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the working days in the schedule
    Days,
    /// List busy intervals on a date
    Busy {
        /// Date as YYYY-MM-DD
        date: String,
        /// Merge overlapping bookings into blocks within working hours
        #[arg(long)]
        merged: bool,
    },
    /// List free intervals within working hours on a date
    Free {
        /// Date as YYYY-MM-DD
        date: String,
    },
    /// Check whether a time range on a date is available
    Check {
        /// Date as YYYY-MM-DD
        date: String,
        /// Start time as HH:MM
        start: String,
        /// End time as HH:MM
        end: String,
    },
    /// Find gaps long enough for a meeting
    Slots {
        /// Date as YYYY-MM-DD
        date: String,
        /// Minimum slot length in minutes
        #[arg(short, long)]
        duration: u32,
        /// Padding in minutes around every busy interval
        #[arg(short, long)]
        buffer: Option<u32>,
        /// Print only the earliest matching slot
        #[arg(long)]
        first: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    init_tracing(&settings.log_level, cli.json_logs);

    let schedule_path = cli.schedule.clone().or_else(|| settings.schedule.clone());
    let index = load_index(schedule_path.as_deref())?;

    match cli.command {
        Commands::Days => {
            let days: Vec<String> = index
                .days()
                .iter()
                .map(|d| format!("{} {}-{}", d.date, d.start, d.end))
                .collect();
            print_lines(&days, cli.json)?;
        }
        Commands::Busy { date, merged } => {
            let busy: Vec<TimeRange> = if merged {
                index
                    .list_merged_busy_intervals(&date)
                    .context("Failed to list busy intervals")?
            } else {
                index
                    .list_busy_intervals_for_date(&date)
                    .context("Failed to list busy intervals")?
                    .iter()
                    .map(|b| TimeRange {
                        start: b.start,
                        end: b.end,
                    })
                    .collect()
            };
            print_ranges(&busy, cli.json)?;
        }
        Commands::Free { date } => {
            let free = index
                .list_free_intervals(&date)
                .context("Failed to list free intervals")?;
            print_ranges(&free, cli.json)?;
        }
        Commands::Check { date, start, end } => {
            let available = index
                .is_time_available(&date, &start, &end)
                .context("Failed to check availability")?;
            if cli.json {
                println!("{}", serde_json::json!({ "available": available }));
            } else {
                println!("{}", if available { "available" } else { "unavailable" });
            }
        }
        Commands::Slots {
            date,
            duration,
            buffer,
            first,
        } => {
            let buffer = buffer.unwrap_or(settings.default_buffer_minutes);
            let mut slots = index
                .find_available_slots(&date, duration, buffer)
                .context("Failed to search for available slots")?;
            if first {
                slots.truncate(1);
            }
            print_ranges(&slots, cli.json)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(default_level: &str, json_logs: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn load_index(path: Option<&std::path::Path>) -> Result<ScheduleIndex> {
    let index = match path {
        Some(path) => ScheduleIndex::load(&worktime_engine::FileSource::new(path))
            .with_context(|| format!("Failed to load schedule: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read schedule from stdin")?;
            let schedule = Schedule::from_json(&buf).context("Failed to parse schedule JSON")?;
            ScheduleIndex::from_schedule(schedule).context("Invalid schedule")?
        }
    };
    tracing::info!(days = index.days().len(), "loaded schedule");
    Ok(index)
}

fn print_ranges(ranges: &[TimeRange], json: bool) -> Result<()> {
    let lines: Vec<String> = ranges.iter().map(ToString::to_string).collect();
    print_lines(&lines, json)
}

fn print_lines(lines: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(lines)?);
    } else {
        for line in lines {
            println!("{}", line);
        }
    }
    Ok(())
}
