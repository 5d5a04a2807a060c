//! `absences` CLI — check UK naturalisation absence rules from the command line.
//!
//! Trips are supplied as a JSON array of records with ISO-8601 dates:
//!
//! ```json
//! [
//!   {"start_date": "2024-01-01", "end_date": "2024-04-12", "note": "sabbatical"}
//! ]
//! ```
//!
//! ## Usage
//!
//! ```sh
//! # Per-trip breakdown plus rolling totals as of today
//! absences summary -i trips.json
//!
//! # Check one candidate application date
//! absences check -i trips.json --date 2026-05-01
//!
//! # Find the earliest eligible application date
//! absences earliest -i trips.json
//!
//! # Machine-readable output, pinned reference date
//! cat trips.json | absences earliest --as-of 2026-01-01 --json
//! ```

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};

use absence_engine::{
    check_candidate_date, find_earliest_application_date, CandidateCheckResult, RuleLimits, Trip,
    TripRecord, DEFAULT_SEARCH_YEARS,
};

#[derive(Parser)]
#[command(
    name = "absences",
    version,
    about = "UK naturalisation absence calculator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every subcommand.
#[derive(Args)]
struct CommonOpts {
    /// Trip JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Reference date (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    as_of: Option<NaiveDate>,

    /// Cap on absence days in the 12 months before application
    #[arg(long, default_value_t = RuleLimits::default().max_12_month_absences)]
    max_12m: i64,

    /// Cap on absence days in the 5 years before application
    #[arg(long, default_value_t = RuleLimits::default().max_5_year_absences)]
    max_5y: i64,

    /// Emit JSON instead of a text report
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show each trip's full absence days and the rolling totals
    Summary {
        #[command(flatten)]
        common: CommonOpts,
    },
    /// Check eligibility on one candidate application date
    Check {
        #[command(flatten)]
        common: CommonOpts,

        /// Candidate application date
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: NaiveDate,
    },
    /// Search forward for the earliest eligible application date
    Earliest {
        #[command(flatten)]
        common: CommonOpts,

        /// Search horizon in calendar years
        #[arg(long, default_value_t = DEFAULT_SEARCH_YEARS)]
        search_years: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { common } => {
            let trips = load_trips(common.input.as_deref())?;
            run_summary(&trips, &common)
        }
        Commands::Check { common, date } => {
            let trips = load_trips(common.input.as_deref())?;
            let result = check_candidate_date(&trips, date, &common.limits());
            if common.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&result, &common.limits());
            }
            Ok(())
        }
        Commands::Earliest {
            common,
            search_years,
        } => {
            let trips = load_trips(common.input.as_deref())?;
            let today = common.reference_date();
            let found =
                find_earliest_application_date(&trips, today, search_years, &common.limits());
            match (&found, common.json) {
                (_, true) => println!("{}", serde_json::to_string_pretty(&found)?),
                (Some(result), false) => {
                    println!("Earliest eligible application date: {}", result.candidate_date);
                    println!();
                    print_report(result, &common.limits());
                }
                (None, false) => {
                    // A legitimate outcome, not an error: report it and exit 0.
                    println!(
                        "Not eligible within {} years of {}.",
                        search_years, today
                    );
                }
            }
            Ok(())
        }
    }
}

impl CommonOpts {
    fn limits(&self) -> RuleLimits {
        RuleLimits {
            max_12_month_absences: self.max_12m,
            max_5_year_absences: self.max_5y,
        }
    }

    fn reference_date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Read the trip file (or stdin) and validate every record.
fn load_trips(input: Option<&str>) -> Result<Vec<Trip>> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read trip file '{}'", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read trips from stdin")?;
            buf
        }
    };

    let records: Vec<TripRecord> =
        serde_json::from_str(&raw).context("trip input is not a valid JSON array of records")?;

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            Trip::try_from(record).with_context(|| format!("invalid trip at index {}", i))
        })
        .collect()
}

fn run_summary(trips: &[Trip], common: &CommonOpts) -> Result<()> {
    let as_of = common.reference_date();
    let limits = common.limits();
    let result = check_candidate_date(trips, as_of, &limits);

    if common.json {
        let per_trip: Vec<serde_json::Value> = trips
            .iter()
            .map(|trip| {
                serde_json::json!({
                    "start_date": trip.start(),
                    "end_date": trip.end(),
                    "note": trip.note(),
                    "full_absence_days": trip.full_absence_days(),
                })
            })
            .collect();
        let summary = serde_json::json!({
            "as_of": as_of,
            "trips": per_trip,
            "check": result,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if trips.is_empty() {
        println!("No trips recorded.");
    } else {
        println!("Trips ({}):", trips.len());
        for trip in trips {
            let label = if trip.note().is_empty() {
                String::new()
            } else {
                format!("  ({})", trip.note())
            };
            println!(
                "  {} \u{2192} {}  {:>4} full days{}",
                trip.start(),
                trip.end(),
                trip.full_absence_days(),
                label
            );
        }
    }
    println!();
    println!("Absence totals as of {}:", as_of);
    println!(
        "  Last 12 months: {} / {}",
        result.days_12_months, limits.max_12_month_absences
    );
    println!(
        "  Last 5 years:   {} / {}",
        result.days_5_years, limits.max_5_year_absences
    );
    Ok(())
}

fn print_report(result: &CandidateCheckResult, limits: &RuleLimits) {
    let mark = |ok: bool| if ok { "PASS" } else { "FAIL" };

    println!("Candidate application date: {}", result.candidate_date);
    println!(
        "  12-month absences: {} / {}  [{}]",
        result.days_12_months,
        limits.max_12_month_absences,
        mark(result.meets_12m_rule)
    );
    println!(
        "  5-year absences:   {} / {}  [{}]",
        result.days_5_years,
        limits.max_5_year_absences,
        mark(result.meets_5y_rule)
    );
    println!(
        "  Present on {}:  {}  [{}]",
        result.presence_date_5y,
        if result.present_on_presence_date {
            "yes"
        } else {
            "no"
        },
        mark(result.present_on_presence_date)
    );
    println!(
        "Verdict: {}",
        if result.fully_eligible {
            "ELIGIBLE"
        } else {
            "NOT ELIGIBLE"
        }
    );
}
