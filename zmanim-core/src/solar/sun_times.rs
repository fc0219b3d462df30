use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::models::GeoLocation;
use crate::solar::noaa::{self, Event, PolarCondition, MINUTES_PER_DAY, STANDARD_ZENITH};

/// Sunrise, solar noon and sunset for one date and location.
///
/// `sunrise` and `sunset` are `None` when the Sun does not cross the horizon
/// that day; solar noon always exists.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimes {
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub timezone: Tz,
    pub sunrise: Option<DateTime<Tz>>,
    pub solar_noon: DateTime<Tz>,
    pub sunset: Option<DateTime<Tz>>,
    /// Minutes between sunrise and sunset; 1440 under midnight sun, 0 in
    /// polar night.
    pub day_length_minutes: f64,
    /// Set when sunrise/sunset do not occur.
    pub polar: Option<PolarCondition>,
}

impl SunTimes {
    /// Whether the standard horizon crossing exists on both sides of noon.
    pub fn has_rise_and_set(&self) -> bool {
        self.sunrise.is_some() && self.sunset.is_some()
    }
}

/// Compute standard sunrise, solar noon and sunset, adjusted for elevation.
pub fn compute_sun_times(date: NaiveDate, location: &GeoLocation) -> SunTimes {
    let jd = julian_day_of(date);
    let zenith = STANDARD_ZENITH + noaa::horizon_dip(location.dip_elevation());

    let rise = crossing(jd, location, zenith, Event::Rising);
    let set = crossing(jd, location, zenith, Event::Setting);
    let noon_min = noaa::solar_noon_utc_minutes(jd, location.longitude);

    let polar = rise.err().or(set.err());
    let day_length_minutes = match (rise, set) {
        (Ok(r), Ok(s)) => s - r,
        _ => match polar {
            Some(PolarCondition::MidnightSun) => MINUTES_PER_DAY,
            _ => 0.0,
        },
    };

    if let Some(condition) = polar {
        log::warn!(
            "No sunrise/sunset on {} at ({:.4}, {:.4}): {:?}",
            date,
            location.latitude,
            location.longitude,
            condition
        );
    }

    SunTimes {
        date,
        latitude: location.latitude,
        longitude: location.longitude,
        elevation: location.elevation,
        timezone: location.timezone,
        sunrise: rise.ok().map(|m| to_local(date, m, &location.timezone)),
        solar_noon: to_local(date, noon_min, &location.timezone),
        sunset: set.ok().map(|m| to_local(date, m, &location.timezone)),
        day_length_minutes,
        polar,
    }
}

/// Dawn and dusk when the Sun's center is `angle_degrees` below the
/// horizon, adjusted for elevation. Either side is `None` if the Sun never
/// gets that low (or never rises that high) on this date.
pub fn compute_angle_times(
    date: NaiveDate,
    location: &GeoLocation,
    angle_degrees: f64,
) -> (Option<DateTime<Tz>>, Option<DateTime<Tz>>) {
    let jd = julian_day_of(date);
    let zenith = 90.0 + angle_degrees + noaa::horizon_dip(location.dip_elevation());

    let dawn = crossing(jd, location, zenith, Event::Rising)
        .ok()
        .map(|m| to_local(date, m, &location.timezone));
    let dusk = crossing(jd, location, zenith, Event::Setting)
        .ok()
        .map(|m| to_local(date, m, &location.timezone));
    (dawn, dusk)
}

fn crossing(
    jd: f64,
    location: &GeoLocation,
    zenith: f64,
    event: Event,
) -> Result<f64, PolarCondition> {
    noaa::event_utc_minutes(jd, location.latitude, location.longitude, zenith, event)
}

fn julian_day_of(date: NaiveDate) -> f64 {
    noaa::julian_day(date.year(), date.month(), date.day())
}

/// Turn UTC minutes after 0h UT of `date` into a local instant.
///
/// Minutes outside [0, 1440) land on the previous or next UTC day before the
/// timezone shift is applied.
fn to_local(date: NaiveDate, utc_minutes: f64, tz: &Tz) -> DateTime<Tz> {
    let midnight = Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN));
    let offset = Duration::nanoseconds((utc_minutes * 60.0e9).round() as i64);
    (midnight + offset).with_timezone(tz)
}
