//! `slotgrid` — compute month-view slot assignments from a JSON request.
//!
//! The request carries either a `year`/`month` pair (the grid is
//! generated, whole weeks with adjacent-month fill) or an explicit
//! `calendar` array of day-cell datetimes, plus the events to place:
//! `longTerms` and `singleSchedules` pre-partitioned, and/or a mixed
//! `schedules` array that is partitioned here. Output is a JSON object
//! with one assignment per input event, in input order, `slot` being a
//! 1-based row number or `null` when the event cannot be placed.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use clap::Parser;
use serde::{Deserialize, Serialize};
use slot_grid::{month_grid, partition, AllocatorConfig, Assignment, Event, SlotAllocator, WeekStart};

#[derive(Parser)]
#[command(
    name = "slotgrid",
    version,
    about = "Month-view event slot allocation"
)]
struct Cli {
    /// Request file, or `-` to read from stdin.
    input: PathBuf,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Request {
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    month: Option<u32>,
    /// Explicit day-cell grid; takes precedence over `year`/`month`.
    #[serde(default)]
    calendar: Vec<NaiveDateTime>,
    #[serde(default)]
    week_start: WeekStart,
    #[serde(default)]
    max_schedule_count: Option<usize>,
    #[serde(default)]
    long_terms: Vec<Event>,
    #[serde(default)]
    single_schedules: Vec<Event>,
    /// Unpartitioned events, split into the two classes before allocation.
    #[serde(default)]
    schedules: Vec<Event>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Response {
    long_terms: Vec<Assignment>,
    single_schedules: Vec<Assignment>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = read_input(&cli.input)?;
    let request: Request = serde_json::from_str(&raw).context("malformed request")?;

    let grid = if request.calendar.is_empty() {
        match (request.year, request.month) {
            (Some(year), Some(month)) => month_grid(year, month, request.week_start)?,
            _ => bail!("request needs either a calendar array or both year and month"),
        }
    } else {
        request.calendar
    };

    let config = match request.max_schedule_count {
        Some(capacity) => AllocatorConfig::new(capacity),
        None => AllocatorConfig::default(),
    };

    let (mut long_terms, mut single_schedules) = (request.long_terms, request.single_schedules);
    let (mixed_long, mixed_single) = partition(request.schedules);
    long_terms.extend(mixed_long);
    single_schedules.extend(mixed_single);

    let mut allocator = SlotAllocator::new(&grid, config);
    let response = Response {
        long_terms: allocator.assign_long_term(&long_terms),
        single_schedules: allocator.assign_single_day(&single_schedules),
    };

    let out = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{out}");
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.to_str() == Some("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}
