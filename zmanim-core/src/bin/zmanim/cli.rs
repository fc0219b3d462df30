use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Zmanim calculator.
#[derive(Parser)]
#[command(
    name = "zmanim",
    version,
    about = "Compute halachic times from a configurable algorithm document"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Calculate zmanim for one date and location.
    Calc(CalcArgs),
    /// Check an algorithm document and list every problem found.
    Validate(ValidateArgs),
}

/// Arguments for the `calc` subcommand.
#[derive(clap::Args)]
pub struct CalcArgs {
    /// Civil date to calculate, YYYY-MM-DD.
    #[arg(short, long)]
    pub date: NaiveDate,

    /// Path to a TOML settings file with [location] and [algorithm].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Latitude in degrees, north positive.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees, east positive.
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Observer elevation in meters.
    #[arg(long)]
    pub elevation: Option<f64>,

    /// IANA timezone name, e.g. America/New_York.
    #[arg(long)]
    pub timezone: Option<String>,

    /// Algorithm JSON document; overrides the settings file.
    #[arg(short, long)]
    pub algorithm: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `validate` subcommand.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Algorithm JSON document to check.
    pub file: PathBuf,
}
