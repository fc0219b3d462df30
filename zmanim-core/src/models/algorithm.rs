//! Validated algorithm configuration.
//!
//! An [`AlgorithmConfig`] is what a publisher's JSON document turns into once
//! it has passed [`crate::preprocessing::validator`]. Every method carries its
//! own typed parameters, so an invalid combination cannot reach the executor.

use serde::{Deserialize, Serialize};

/// Reference name for the standard sunrise anchor.
pub const SUNRISE: &str = "sunrise";
/// Reference name for the standard sunset anchor.
pub const SUNSET: &str = "sunset";
/// Dawn anchor; falls back to sunrise minus 72 minutes when not defined.
pub const ALOS: &str = "alos";
/// Dusk anchor; falls back to sunset plus 72 minutes when not defined.
pub const TZEIS: &str = "tzeis";

/// A complete, validated set of zman definitions for one publisher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Zman definitions in document order.
    pub zmanim: Vec<ZmanConfig>,
}

impl AlgorithmConfig {
    pub fn get(&self, key: &str) -> Option<&ZmanConfig> {
        self.zmanim.iter().find(|z| z.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.zmanim.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zmanim.is_empty()
    }
}

/// One named zman and how to compute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZmanConfig {
    pub key: String,
    pub method: ZmanMethod,
}

impl ZmanConfig {
    pub fn new(key: impl Into<String>, method: ZmanMethod) -> Self {
        Self {
            key: key.into(),
            method,
        }
    }
}

/// The closed set of calculation methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "snake_case")]
pub enum ZmanMethod {
    Sunrise,
    Sunset,
    SolarAngle {
        degrees: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        direction: Option<SolarDirection>,
    },
    FixedMinutes {
        minutes: f64,
        from: String,
    },
    Proportional {
        hours: f64,
        base: ProportionalBase,
    },
    Midpoint {
        start: String,
        end: String,
    },
}

impl ZmanMethod {
    /// Method name as it appears in configuration documents.
    pub fn name(&self) -> &'static str {
        match self {
            ZmanMethod::Sunrise => "sunrise",
            ZmanMethod::Sunset => "sunset",
            ZmanMethod::SolarAngle { .. } => "solar_angle",
            ZmanMethod::FixedMinutes { .. } => "fixed_minutes",
            ZmanMethod::Proportional { .. } => "proportional",
            ZmanMethod::Midpoint { .. } => "midpoint",
        }
    }

    /// Methods that only need sun times, never another zman.
    pub fn is_independent(&self) -> bool {
        matches!(
            self,
            ZmanMethod::Sunrise
                | ZmanMethod::Sunset
                | ZmanMethod::SolarAngle { .. }
                | ZmanMethod::Proportional { .. }
        )
    }

    pub fn is_midpoint(&self) -> bool {
        matches!(self, ZmanMethod::Midpoint { .. })
    }

    /// Names this method looks up at evaluation time.
    pub fn references(&self) -> Vec<&str> {
        match self {
            ZmanMethod::FixedMinutes { from, .. } => vec![from.as_str()],
            ZmanMethod::Midpoint { start, end } => vec![start.as_str(), end.as_str()],
            _ => Vec::new(),
        }
    }
}

/// Which side of the day an angle-based zman falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolarDirection {
    BeforeSunrise,
    AfterSunset,
}

impl SolarDirection {
    /// Angles above this are read as dawn when no direction is given.
    pub const DAWN_THRESHOLD_DEGREES: f64 = 10.0;

    /// Direction implied by angle magnitude alone.
    pub fn infer(degrees: f64) -> Self {
        if degrees > Self::DAWN_THRESHOLD_DEGREES {
            SolarDirection::BeforeSunrise
        } else {
            SolarDirection::AfterSunset
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SolarDirection::BeforeSunrise => "before_sunrise",
            SolarDirection::AfterSunset => "after_sunset",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "before_sunrise" => Some(SolarDirection::BeforeSunrise),
            "after_sunset" => Some(SolarDirection::AfterSunset),
            _ => None,
        }
    }
}

/// Anchor pair that defines the length of a proportional hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProportionalBase {
    /// Sunrise to sunset.
    Gra,
    /// 72 minutes before sunrise to 72 minutes after sunset.
    Mga,
}

impl ProportionalBase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProportionalBase::Gra => "gra",
            ProportionalBase::Mga => "mga",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "gra" => Some(ProportionalBase::Gra),
            "mga" => Some(ProportionalBase::Mga),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_direction() {
        assert_eq!(SolarDirection::infer(16.1), SolarDirection::BeforeSunrise);
        assert_eq!(SolarDirection::infer(11.5), SolarDirection::BeforeSunrise);
        assert_eq!(SolarDirection::infer(10.0), SolarDirection::AfterSunset);
        assert_eq!(SolarDirection::infer(8.5), SolarDirection::AfterSunset);
    }

    #[test]
    fn test_method_classification() {
        let fixed = ZmanMethod::FixedMinutes {
            minutes: -72.0,
            from: SUNRISE.into(),
        };
        assert!(!fixed.is_independent());
        assert_eq!(fixed.references(), vec!["sunrise"]);
        assert!(ZmanMethod::Sunset.is_independent());
        assert!(ZmanMethod::Sunset.references().is_empty());

        let mid = ZmanMethod::Midpoint {
            start: "a".into(),
            end: "b".into(),
        };
        assert!(mid.is_midpoint());
        assert_eq!(mid.name(), "midpoint");
    }

    #[test]
    fn test_serialized_shape() {
        let z = ZmanMethod::Proportional {
            hours: 3.0,
            base: ProportionalBase::Mga,
        };
        let json = serde_json::to_value(&z).unwrap();
        assert_eq!(json["method"], "proportional");
        assert_eq!(json["params"]["base"], "mga");
        assert_eq!(json["params"]["hours"], 3.0);
    }
}
