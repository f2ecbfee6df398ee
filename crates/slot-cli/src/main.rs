//! `slots` CLI — compute 7-day booking availability from an event file.
//!
//! ## Usage
//!
//! ```sh
//! # Availability for the week starting 2020-04-13 (events from stdin → JSON on stdout)
//! cat events.json | slots availability --from 2020-04-13
//!
//! # Read events from a file, write a human-readable table to a file
//! slots availability --from 2020-04-13 -i events.json -o week.txt --format text
//!
//! # Show the slot labels an interval covers
//! slots slots --start "2020-04-17 09:30" --end "2020-04-17 12:30"
//!
//! # Debug logging on stderr (or set RUST_LOG)
//! slots --verbose availability -i events.json
//! ```

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use slot_engine::{DayBucket, JsonFileStore};
use std::io::{self, IsTerminal, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Compute free booking slots from opening and appointment events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the free slots for the 7 days starting at --from
    Availability {
        /// First day of the window, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        from: Option<String>,
        /// Input JSON event file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List the slot labels covering a single interval
    Slots {
        /// Interval start, e.g. "2020-04-17 09:30"
        #[arg(long)]
        start: String,
        /// Interval end (exclusive)
        #[arg(long)]
        end: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Availability {
            from,
            input,
            output,
            format,
            pretty,
        } => {
            let anchor = match from.as_deref() {
                Some(raw) => slot_engine::parse_date(raw).context("Invalid --from date")?,
                None => Local::now().date_naive(),
            };
            let days = availability(input.as_deref(), anchor)?;
            let rendered = match format {
                Format::Json if pretty => serde_json::to_string_pretty(&days)?,
                Format::Json => serde_json::to_string(&days)?,
                Format::Text => render_text(&days),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Slots { start, end } => {
            let start = slot_engine::parse_timestamp(&start).context("Invalid --start")?;
            let end = slot_engine::parse_timestamp(&end).context("Invalid --end")?;
            let slots = slot_engine::generate_slots(start, end);
            println!("{}", slots.join(" "));
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn availability(input: Option<&str>, anchor: NaiveDate) -> Result<Vec<DayBucket>> {
    match input {
        Some(path) => {
            let store = JsonFileStore::new(path);
            debug!(path = %store.path().display(), %anchor, "reading events from file");
            slot_engine::compute_availabilities(&store, anchor).with_context(|| {
                format!(
                    "Failed to compute availability from: {}",
                    store.path().display()
                )
            })
        }
        None => {
            debug!(%anchor, "reading events from stdin");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            let events = slot_engine::parse_events(&buf).context("Failed to parse events")?;
            Ok(slot_engine::compute_availabilities(&events, anchor)?)
        }
    }
}

/// One line per day: date, weekday, then the free slots (or `-` when none).
fn render_text(days: &[DayBucket]) -> String {
    days.iter()
        .map(|day| {
            let slots = if day.slots.is_empty() {
                "-".to_string()
            } else {
                day.slots.join(" ")
            };
            format!("{}  {}\n", day.date.format("%Y-%m-%d %a"), slots)
        })
        .collect()
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
