use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::GeoLocation;
use crate::time::format_hms;

/// How a zman was computed, for display next to the time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaInfo {
    pub method: String,
    pub parameters: serde_json::Map<String, serde_json::Value>,
    pub explanation: String,
}

/// One computed zman.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZmanResult {
    pub key: String,
    /// Exact instant; `None` when the event does not occur on this date.
    #[serde(skip)]
    pub instant: Option<DateTime<Tz>>,
    /// Local wall-clock time as `HH:MM:SS`.
    pub time: Option<String>,
    pub formula: FormulaInfo,
}

impl ZmanResult {
    pub fn new(key: impl Into<String>, instant: Option<DateTime<Tz>>, formula: FormulaInfo) -> Self {
        Self {
            key: key.into(),
            time: instant.as_ref().map(format_hms),
            instant,
            formula,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.instant.is_some()
    }
}

/// Location block of the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub timezone: String,
}

impl From<&GeoLocation> for LocationInfo {
    fn from(loc: &GeoLocation) -> Self {
        Self {
            latitude: loc.latitude,
            longitude: loc.longitude,
            elevation: loc.elevation,
            timezone: loc.timezone.name().to_string(),
        }
    }
}

/// Full answer for one (date, location, algorithm) request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZmanimResults {
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
    pub location: LocationInfo,
    pub zmanim: Vec<ZmanResult>,
}

impl ZmanimResults {
    pub fn get(&self, key: &str) -> Option<&ZmanResult> {
        self.zmanim.iter().find(|z| z.key == key)
    }

    /// Keys in output order.
    pub fn keys(&self) -> Vec<&str> {
        self.zmanim.iter().map(|z| z.key.as_str()).collect()
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format("%Y-%m-%d"))
}
