//! `trucks` CLI — consolidate food-truck schedules and check what is open.
//!
//! ## Usage
//!
//! ```sh
//! # Combine raw slot records (stdin → stdout)
//! cat slots.json | trucks combine
//!
//! # Combine a saved ArcGIS FeatureServer response, pretty-printed, to a file
//! trucks combine --format arcgis -i feed.json -o trucks.json --pretty
//!
//! # Which day parts does a range fall in?
//! trucks classify "11 a.m. - 3 p.m."
//!
//! # Is a range open at a given time?
//! trucks within "10 p.m. - 2 a.m." --at 23:30
//!
//! # Which trucks are open on Monday at lunch / in the evening?
//! trucks open -i slots.json --day Monday --at "12:30 p.m."
//! trucks open -i slots.json --day Monday --part evening
//! ```
//!
//! Log output goes to stderr and is controlled by `RUST_LOG` (default `warn`,
//! or `debug` with `--verbose`).

mod feed;

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use truck_combiner::{CombinedRecord, DayPart, RawRecord};

#[derive(Parser)]
#[command(
    name = "trucks",
    version,
    about = "Consolidate food-truck schedules and check what is open"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fold raw schedule slots into one record per truck location
    Combine {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Shape of the input document
        #[arg(long, value_enum, default_value_t = InputFormat::Raw)]
        format: InputFormat,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the day parts (morning, afternoon, evening) a range falls in
    Classify {
        /// Availability range, e.g. "11 a.m. - 3 p.m."
        range: String,
    },
    /// Print "open" if the range contains the given time, "closed" otherwise
    Within {
        /// Availability range, e.g. "10 p.m. - 2 a.m."
        range: String,
        /// Time to check, as HH:MM or H[:MM] a.m./p.m.
        #[arg(long, value_parser = parse_clock)]
        at: NaiveTime,
    },
    /// List the trucks open on a day at a time or during a day part
    #[command(group(ArgGroup::new("when").required(true).args(["at", "part"])))]
    Open {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Shape of the input document
        #[arg(long, value_enum, default_value_t = InputFormat::Raw)]
        format: InputFormat,
        /// Weekday name as it appears in the feed, e.g. "Monday"
        #[arg(long)]
        day: String,
        /// Time to check, as HH:MM or H[:MM] a.m./p.m.
        #[arg(long, value_parser = parse_clock)]
        at: Option<NaiveTime>,
        /// Day part to check: morning, afternoon or evening
        #[arg(long)]
        part: Option<DayPart>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// JSON array of raw slot records
    Raw,
    /// ArcGIS FeatureServer query response
    Arcgis,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Combine {
            input,
            output,
            format,
            pretty,
        } => {
            let combined = load_combined(input.as_deref(), format)?;
            let mut json = if pretty {
                serde_json::to_string_pretty(&combined)?
            } else {
                serde_json::to_string(&combined)?
            };
            json.push('\n');
            write_output(output.as_deref(), &json)?;
        }
        Commands::Classify { range } => {
            let parts = truck_combiner::day_parts(&range)
                .with_context(|| format!("Failed to classify '{}'", range))?;
            for part in parts {
                println!("{}", part);
            }
        }
        Commands::Within { range, at } => {
            let open = truck_combiner::date_within_availability(&range, &at)
                .with_context(|| format!("Failed to check '{}'", range))?;
            println!("{}", if open { "open" } else { "closed" });
        }
        Commands::Open {
            input,
            format,
            day,
            at,
            part,
        } => {
            let combined = load_combined(input.as_deref(), format)?;
            let open = match (at, part) {
                (Some(at), _) => truck_combiner::open_at(&combined, &day, &at)?,
                (None, part) => {
                    let part = part.context("Either --at or --part is required")?;
                    truck_combiner::open_during(&combined, &day, part)?
                }
            };
            for truck in open {
                println!("{}\t{}", truck.title, truck.location);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")
}

/// Read the input document and run it through the grouper.
fn load_combined(input: Option<&str>, format: InputFormat) -> Result<Vec<CombinedRecord>> {
    let text = read_input(input)?;
    let records: Vec<RawRecord> = match format {
        InputFormat::Raw => {
            serde_json::from_str(&text).context("Failed to parse raw truck records")?
        }
        InputFormat::Arcgis => feed::records_from_feed(&text)?,
    };

    let combined =
        truck_combiner::combine_trucks(&records).context("Failed to combine truck records")?;
    info!(
        raw = records.len(),
        combined = combined.len(),
        "combined schedule"
    );
    Ok(combined)
}

/// Accept `HH:MM` (24-hour) or the feed's own `H[:MM] a.m.|p.m.` form.
fn parse_clock(s: &str) -> std::result::Result<NaiveTime, String> {
    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        return Ok(t);
    }
    truck_combiner::parser::parse_time(s)
        .map(NaiveTime::from)
        .map_err(|e| e.to_string())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
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
