//! Settings file support.
//!
//! A settings file names the observer location and the algorithm to run:
//!
//! ```toml
//! [location]
//! latitude = 40.6782
//! longitude = -73.9442
//! elevation = 0.0
//! timezone = "America/New_York"
//!
//! [algorithm]
//! path = "my_shul.json"   # or: builtin = "standard"
//! ```
//!
//! `ZMANIM_TIMEZONE` and `ZMANIM_ELEVATION` override the file.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LocationError;
use crate::models::{AlgorithmConfig, GeoLocation};
use crate::parsing::load_algorithm;

pub const TIMEZONE_ENV: &str = "ZMANIM_TIMEZONE";
pub const ELEVATION_ENV: &str = "ZMANIM_ELEVATION";

/// Name of the built-in algorithm set.
pub const BUILTIN_STANDARD: &str = "standard";

/// Settings loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub location: LocationSettings,
    #[serde(default)]
    pub algorithm: AlgorithmSettings,
}

/// Observer location settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSettings {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation: f64,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

/// Which algorithm document to evaluate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSettings {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub builtin: Option<String>,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Settings {
    /// Load settings from a TOML file and apply environment overrides.
    ///
    /// A relative `algorithm.path` is resolved against the settings file's
    /// directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let mut settings = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        if let (Some(algorithm_path), Some(dir)) = (&settings.algorithm.path, path.parent()) {
            if algorithm_path.is_relative() {
                settings.algorithm.path = Some(dir.join(algorithm_path));
            }
        }

        settings.apply_env_overrides()?;
        Ok(settings)
    }

    /// Parse settings from TOML text without touching the environment.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `ZMANIM_TIMEZONE` and `ZMANIM_ELEVATION` from the process environment.
    pub fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(tz) = lookup(TIMEZONE_ENV) {
            log::info!("Timezone overridden by {}: {}", TIMEZONE_ENV, tz);
            self.location.timezone = tz;
        }
        if let Some(elevation) = lookup(ELEVATION_ENV) {
            self.location.elevation = elevation
                .trim()
                .parse()
                .with_context(|| format!("{ELEVATION_ENV} is not a number: {elevation}"))?;
            log::info!(
                "Elevation overridden by {}: {}m",
                ELEVATION_ENV,
                self.location.elevation
            );
        }
        Ok(())
    }

    /// Build the observer location.
    pub fn geo_location(&self) -> Result<GeoLocation, LocationError> {
        let loc = &self.location;
        GeoLocation::with_timezone_name(loc.latitude, loc.longitude, loc.elevation, &loc.timezone)
    }

    /// Load the configured algorithm; the built-in standard set when none is named.
    pub fn algorithm(&self) -> anyhow::Result<AlgorithmConfig> {
        match (&self.algorithm.path, self.algorithm.builtin.as_deref()) {
            (Some(_), Some(_)) => bail!("[algorithm] sets both `path` and `builtin`"),
            (Some(path), None) => load_algorithm(path),
            (None, None) | (None, Some(BUILTIN_STANDARD)) => Ok(AlgorithmConfig::standard()),
            (None, Some(other)) => bail!("Unknown builtin algorithm: {other}"),
        }
    }
}
