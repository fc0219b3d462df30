//! NOAA low-precision solar geometry.
//!
//! Julian-century based series for the Sun's declination and the equation of
//! time, plus the hour-angle solution used for rise/set and twilight events.
//! Accuracy is about one minute for latitudes within the polar circles.
//!
//! Sources: NOAA Global Monitoring Laboratory solar calculator, after
//! Meeus, *Astronomical Algorithms*, ch. 25 and 28.

/// Julian Day of the J2000.0 epoch.
pub const J2000: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Zenith for standard sunrise/sunset: 90° plus 34' refraction and 16'
/// solar semidiameter.
pub const STANDARD_ZENITH: f64 = 90.833;

/// Mean Earth radius in meters, for horizon dip.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Julian Day at 0h UT of a proleptic Gregorian calendar date.
///
/// January and February count as months 13 and 14 of the previous year.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
}

/// Julian centuries since J2000.0.
pub fn julian_century(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Geometric mean longitude of the Sun in degrees, [0, 360).
pub fn geom_mean_longitude(t: f64) -> f64 {
    (280.466_46 + t * (36_000.769_83 + 0.000_303_2 * t)).rem_euclid(360.0)
}

/// Geometric mean anomaly of the Sun in degrees.
pub fn geom_mean_anomaly(t: f64) -> f64 {
    357.529_11 + t * (35_999.050_29 - 0.000_153_7 * t)
}

/// Eccentricity of Earth's orbit (unitless).
pub fn eccentricity(t: f64) -> f64 {
    0.016_708_634 - t * (0.000_042_037 + 0.000_000_126_7 * t)
}

/// Equation of center in degrees.
pub fn equation_of_center(t: f64) -> f64 {
    let m = geom_mean_anomaly(t).to_radians();
    m.sin() * (1.914_602 - t * (0.004_817 + 0.000_014 * t))
        + (2.0 * m).sin() * (0.019_993 - 0.000_101 * t)
        + (3.0 * m).sin() * 0.000_289
}

pub fn true_longitude(t: f64) -> f64 {
    geom_mean_longitude(t) + equation_of_center(t)
}

/// Longitude of the Moon's ascending node, degrees; drives nutation terms.
fn ascending_node(t: f64) -> f64 {
    125.04 - 1_934.136 * t
}

/// Apparent longitude of the Sun in degrees (nutation and aberration applied).
pub fn apparent_longitude(t: f64) -> f64 {
    true_longitude(t) - 0.005_69 - 0.004_78 * ascending_node(t).to_radians().sin()
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.815 + t * (0.000_59 - t * 0.001_813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity corrected for nutation, degrees.
pub fn obliquity_correction(t: f64) -> f64 {
    mean_obliquity(t) + 0.002_56 * ascending_node(t).to_radians().cos()
}

/// Solar declination in degrees.
pub fn declination(t: f64) -> f64 {
    let eps = obliquity_correction(t).to_radians();
    let lambda = apparent_longitude(t).to_radians();
    (eps.sin() * lambda.sin()).asin().to_degrees()
}

/// Equation of time in minutes (apparent minus mean solar time).
pub fn equation_of_time(t: f64) -> f64 {
    let eps = obliquity_correction(t).to_radians();
    let l0 = geom_mean_longitude(t).to_radians();
    let e = eccentricity(t);
    let m = geom_mean_anomaly(t).to_radians();

    let y = (eps / 2.0).tan().powi(2);
    let eq = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    4.0 * eq.to_degrees()
}

/// Declination and equation of time at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarGeometry {
    /// Julian centuries since J2000.0.
    pub t: f64,
    pub declination_deg: f64,
    pub equation_of_time_min: f64,
}

impl SolarGeometry {
    pub fn at_century(t: f64) -> Self {
        Self {
            t,
            declination_deg: declination(t),
            equation_of_time_min: equation_of_time(t),
        }
    }

    pub fn at_jd(jd: f64) -> Self {
        Self::at_century(julian_century(jd))
    }
}

/// Cosine of the hour angle at which the Sun reaches `zenith_deg`.
///
/// Values outside [-1, 1] mean the Sun never reaches that zenith on this day.
pub fn hour_angle_cosine(latitude_deg: f64, declination_deg: f64, zenith_deg: f64) -> f64 {
    let phi = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();
    zenith_deg.to_radians().cos() / (phi.cos() * dec.cos()) - phi.tan() * dec.tan()
}

/// Why an hour angle has no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolarCondition {
    /// The Sun stays below the target zenith all day.
    PolarNight,
    /// The Sun stays above the target zenith all day.
    MidnightSun,
}

/// Hour angle in degrees (always positive) for the target zenith.
pub fn hour_angle(
    latitude_deg: f64,
    declination_deg: f64,
    zenith_deg: f64,
) -> Result<f64, PolarCondition> {
    let cos_ha = hour_angle_cosine(latitude_deg, declination_deg, zenith_deg);
    if cos_ha > 1.0 {
        Err(PolarCondition::PolarNight)
    } else if cos_ha < -1.0 {
        Err(PolarCondition::MidnightSun)
    } else if cos_ha.is_nan() {
        // cos(lat) == 0 at the poles; the sign of the declination decides
        if declination_deg * latitude_deg > 0.0 {
            Err(PolarCondition::MidnightSun)
        } else {
            Err(PolarCondition::PolarNight)
        }
    } else {
        Ok(cos_ha.acos().to_degrees())
    }
}

/// Geometric dip of the visible horizon for an observer `elevation_m` above
/// the surrounding terrain, in degrees. Zero for non-positive elevations.
pub fn horizon_dip(elevation_m: f64) -> f64 {
    if elevation_m <= 0.0 {
        return 0.0;
    }
    (EARTH_RADIUS_M / (EARTH_RADIUS_M + elevation_m))
        .acos()
        .to_degrees()
}

/// Which half of the day an hour-angle event falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Rising,
    Setting,
}

/// UTC minutes after 0h UT of the date at which the Sun crosses `zenith_deg`
/// on the rising or setting side.
///
/// Two passes: the first uses solar geometry at approximate local noon, the
/// second re-evaluates it at the first estimate. Longitude is east positive.
pub fn event_utc_minutes(
    jd_midnight: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    zenith_deg: f64,
    event: Event,
) -> Result<f64, PolarCondition> {
    let noon = SolarGeometry::at_jd(jd_midnight + 0.5 - longitude_deg / 360.0);
    let first = event_minutes_for(&noon, latitude_deg, longitude_deg, zenith_deg, event)?;

    let refined = SolarGeometry::at_jd(jd_midnight + first / MINUTES_PER_DAY);
    event_minutes_for(&refined, latitude_deg, longitude_deg, zenith_deg, event)
}

fn event_minutes_for(
    geometry: &SolarGeometry,
    latitude_deg: f64,
    longitude_deg: f64,
    zenith_deg: f64,
    event: Event,
) -> Result<f64, PolarCondition> {
    let ha = hour_angle(latitude_deg, geometry.declination_deg, zenith_deg)?;
    let signed_ha = match event {
        Event::Rising => ha,
        Event::Setting => -ha,
    };
    Ok(720.0 - 4.0 * (longitude_deg + signed_ha) - geometry.equation_of_time_min)
}

/// UTC minutes after 0h UT of the date at which the Sun transits the local
/// meridian.
pub fn solar_noon_utc_minutes(jd_midnight: f64, longitude_deg: f64) -> f64 {
    let first = SolarGeometry::at_jd(jd_midnight + 0.5 - longitude_deg / 360.0);
    let estimate = 720.0 - 4.0 * longitude_deg - first.equation_of_time_min;
    let refined = SolarGeometry::at_jd(jd_midnight + estimate / MINUTES_PER_DAY);
    720.0 - 4.0 * longitude_deg - refined.equation_of_time_min
}
