mod cli;
mod logging;

use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use zmanim_core::parsing::parse_raw_algorithm;
use zmanim_core::preprocessing::AlgorithmValidator;
use zmanim_core::settings::{AlgorithmSettings, LocationSettings, Settings};
use zmanim_core::{calculate_zmanim, load_algorithm};

use crate::cli::{CalcArgs, Cli, Command, ValidateArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Calc(args) => calc(args),
        Command::Validate(args) => validate(args),
    }
}

/// Settings file first, then environment, then flags.
fn resolve_settings(args: &CalcArgs) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::from_file(path)?,
        None => {
            let (Some(latitude), Some(longitude)) = (args.lat, args.lon) else {
                bail!("either --config or both --lat and --lon are required");
            };
            let mut settings = Settings {
                location: LocationSettings {
                    latitude,
                    longitude,
                    elevation: 0.0,
                    timezone: "UTC".to_string(),
                },
                algorithm: AlgorithmSettings::default(),
            };
            settings.apply_env_overrides()?;
            settings
        }
    };

    if let Some(lat) = args.lat {
        settings.location.latitude = lat;
    }
    if let Some(lon) = args.lon {
        settings.location.longitude = lon;
    }
    if let Some(elevation) = args.elevation {
        settings.location.elevation = elevation;
    }
    if let Some(tz) = &args.timezone {
        settings.location.timezone = tz.clone();
    }
    Ok(settings)
}

fn calc(args: CalcArgs) -> Result<()> {
    let settings = resolve_settings(&args)?;
    let location = settings.geo_location()?;
    let algorithm = match &args.algorithm {
        Some(path) => load_algorithm(path)?,
        None => settings.algorithm()?,
    };
    info!(
        "Calculating '{}' for {} at {}",
        algorithm.name,
        args.date,
        location.timezone.name()
    );

    let results = calculate_zmanim(args.date, location, &algorithm)
        .with_context(|| format!("Failed to evaluate algorithm '{}'", algorithm.name))?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };
    println!("{output}");
    Ok(())
}

fn validate(args: ValidateArgs) -> Result<()> {
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("Failed to read algorithm file: {}", args.file.display()))?;
    let raw = parse_raw_algorithm(&bytes)
        .with_context(|| format!("Failed to parse {}", args.file.display()))?;
    let report = AlgorithmValidator::report(&raw);

    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    for error in &report.errors {
        println!("error: {error}");
    }

    if !report.is_valid {
        bail!("{} validation error(s)", report.errors.len());
    }
    println!("{}: ok ({} zmanim)", args.file.display(), raw.zmanim.len());
    Ok(())
}
