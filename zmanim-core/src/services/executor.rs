//! Two-phase zmanim evaluator.
//!
//! One [`Executor`] serves exactly one calculation: it owns the sun times
//! for the requested date and location, the 72-minute fallback anchors and
//! the map of already-resolved zmanim.
//!
//! Evaluation order:
//!
//! 1. Phase 1, everything except `midpoint`. Methods that only need sun
//!    times (sunrise, sunset, solar_angle, proportional) run first, then
//!    `fixed_minutes`, each group in document order.
//! 2. Phase 2, every `midpoint`, which may reference any phase-1 key.
//!
//! A reference that is not resolved by the time it is needed aborts the
//! whole calculation. Missing sun events are not errors; they surface as
//! `None` on every zman derived from them.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::error::{CalculationError, CalculationResult};
use crate::models::algorithm::{ALOS, SUNRISE, SUNSET, TZEIS};
use crate::models::{
    AlgorithmConfig, GeoLocation, LocationInfo, ProportionalBase, SolarDirection, ZmanConfig,
    ZmanMethod, ZmanResult, ZmanimResults,
};
use crate::services::formula::formula_info;
use crate::services::ordering::sort_results;
use crate::solar::{compute_angle_times, compute_sun_times, SunTimes};
use crate::time::{add_offset, midpoint, proportional_hour};

/// Offset of the alos/tzeis fallback anchors and of the MGA day.
pub const FALLBACK_ANCHOR_MINUTES: f64 = 72.0;

/// Per-calculation evaluation context.
#[derive(Debug)]
pub struct Executor {
    date: NaiveDate,
    location: GeoLocation,
    sun: SunTimes,
    alos_anchor: Option<DateTime<Tz>>,
    tzeis_anchor: Option<DateTime<Tz>>,
    resolved: HashMap<String, Option<DateTime<Tz>>>,
}

impl Executor {
    pub fn new(date: NaiveDate, location: GeoLocation) -> Self {
        let sun = compute_sun_times(date, &location);
        let alos_anchor = sun
            .sunrise
            .as_ref()
            .map(|t| add_offset(t, -FALLBACK_ANCHOR_MINUTES));
        let tzeis_anchor = sun
            .sunset
            .as_ref()
            .map(|t| add_offset(t, FALLBACK_ANCHOR_MINUTES));

        Self {
            date,
            location,
            sun,
            alos_anchor,
            tzeis_anchor,
            resolved: HashMap::new(),
        }
    }

    pub fn sun_times(&self) -> &SunTimes {
        &self.sun
    }

    /// Evaluate every zman of `config` and return them in canonical order.
    pub fn execute(mut self, config: &AlgorithmConfig) -> CalculationResult<ZmanimResults> {
        log::debug!(
            "Calculating '{}' for {} at ({:.4}, {:.4}, {}m, {})",
            config.name,
            self.date,
            self.location.latitude,
            self.location.longitude,
            self.location.elevation,
            self.location.timezone.name()
        );

        let (midpoints, phase_one): (Vec<&ZmanConfig>, Vec<&ZmanConfig>) =
            config.zmanim.iter().partition(|z| z.method.is_midpoint());

        let independent = phase_one.iter().filter(|z| z.method.is_independent());
        let offsets = phase_one.iter().filter(|z| !z.method.is_independent());
        for zman in independent.chain(offsets) {
            let instant = self.evaluate(zman, config)?;
            self.resolved.insert(zman.key.clone(), instant);
        }
        log::debug!("Phase 1 resolved {} zmanim", self.resolved.len());

        for zman in &midpoints {
            let instant = self.evaluate(zman, config)?;
            self.resolved.insert(zman.key.clone(), instant);
        }
        log::debug!("Phase 2 resolved {} midpoints", midpoints.len());

        let mut zmanim: Vec<ZmanResult> = config
            .zmanim
            .iter()
            .map(|z| {
                let instant = self.resolved.get(&z.key).cloned().flatten();
                ZmanResult::new(z.key.clone(), instant, formula_info(&z.method))
            })
            .collect();
        sort_results(&mut zmanim);

        Ok(ZmanimResults {
            date: self.date,
            location: LocationInfo::from(&self.location),
            zmanim,
        })
    }

    fn evaluate(
        &self,
        zman: &ZmanConfig,
        config: &AlgorithmConfig,
    ) -> CalculationResult<Option<DateTime<Tz>>> {
        let instant = match &zman.method {
            ZmanMethod::Sunrise => self.sun.sunrise,
            ZmanMethod::Sunset => self.sun.sunset,
            ZmanMethod::SolarAngle { degrees, direction } => {
                let direction = direction.unwrap_or_else(|| {
                    log::debug!(
                        "zman '{}': no direction for {}°, inferring from magnitude",
                        zman.key,
                        degrees
                    );
                    SolarDirection::infer(*degrees)
                });
                let (dawn, dusk) = compute_angle_times(self.date, &self.location, *degrees);
                match direction {
                    SolarDirection::BeforeSunrise => dawn,
                    SolarDirection::AfterSunset => dusk,
                }
            }
            ZmanMethod::FixedMinutes { minutes, from } => self
                .resolve(&zman.key, from, config, true)?
                .map(|base| add_offset(&base, *minutes)),
            ZmanMethod::Proportional { hours, base } => {
                let (start, end) = match base {
                    ProportionalBase::Gra => (self.sun.sunrise, self.sun.sunset),
                    ProportionalBase::Mga => (self.alos_anchor, self.tzeis_anchor),
                };
                match (start, end) {
                    (Some(start), Some(end)) => Some(proportional_hour(&start, &end, *hours)),
                    _ => None,
                }
            }
            ZmanMethod::Midpoint { start, end } => {
                let start = self.resolve(&zman.key, start, config, false)?;
                let end = self.resolve(&zman.key, end, config, false)?;
                match (start, end) {
                    (Some(start), Some(end)) => Some(midpoint(&start, &end)),
                    _ => None,
                }
            }
        };
        Ok(instant)
    }

    /// Look up a `from`/`start`/`end` reference.
    ///
    /// Offsets may only point at sun-only zmanim; midpoints may point at
    /// anything except another midpoint. The alos/tzeis anchors are only
    /// available to offsets.
    fn resolve(
        &self,
        key: &str,
        reference: &str,
        config: &AlgorithmConfig,
        allow_anchors: bool,
    ) -> CalculationResult<Option<DateTime<Tz>>> {
        match reference {
            SUNRISE => return Ok(self.sun.sunrise),
            SUNSET => return Ok(self.sun.sunset),
            _ => {}
        }
        if let Some(target) = config.get(reference) {
            let permitted = if allow_anchors {
                target.method.is_independent()
            } else {
                !target.method.is_midpoint()
            };
            return match self.resolved.get(reference) {
                Some(instant) if permitted => Ok(*instant),
                _ => Err(CalculationError::UnsupportedDependency {
                    key: key.to_string(),
                    reference: reference.to_string(),
                }),
            };
        }
        match reference {
            ALOS if allow_anchors => Ok(self.alos_anchor),
            TZEIS if allow_anchors => Ok(self.tzeis_anchor),
            _ => Err(CalculationError::UnresolvedReference {
                key: key.to_string(),
                reference: reference.to_string(),
            }),
        }
    }
}

/// Compute every zman of `config` for one date and location.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use zmanim_core::models::{AlgorithmConfig, GeoLocation};
/// use zmanim_core::services::calculate_zmanim;
///
/// let location =
///     GeoLocation::with_timezone_name(31.7683, 35.2137, 754.0, "Asia/Jerusalem").unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
/// let results = calculate_zmanim(date, location, &AlgorithmConfig::standard()).unwrap();
/// assert_eq!(results.zmanim[0].key, "alos_hashachar");
/// ```
pub fn calculate_zmanim(
    date: NaiveDate,
    location: GeoLocation,
    config: &AlgorithmConfig,
) -> CalculationResult<ZmanimResults> {
    Executor::new(date, location).execute(config)
}
