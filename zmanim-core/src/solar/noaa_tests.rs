#[cfg(test)]
mod tests {
    use crate::solar::noaa::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_julian_day_epoch() {
        assert_eq!(julian_day(2000, 1, 1), 2_451_544.5);
        assert_eq!(julian_century(J2000), 0.0);
    }

    #[test]
    fn test_julian_day_known_dates() {
        assert_eq!(julian_day(2025, 11, 26), 2_461_005.5);
        // Leap day: February is month 14 of the previous year
        assert_eq!(julian_day(2024, 2, 29), 2_460_369.5);
        assert_eq!(julian_day(2024, 3, 1), 2_460_370.5);
    }

    #[test]
    fn test_mean_obliquity_at_j2000() {
        assert!(close(mean_obliquity(0.0), 23.439_291, 1e-6));
    }

    #[test]
    fn test_declination_extremes() {
        let solstice = julian_century(julian_day(2024, 6, 20) + 0.5);
        assert!(close(declination(solstice), 23.44, 0.02));

        let equinox = julian_century(julian_day(2024, 3, 20));
        assert!(declination(equinox).abs() < 0.5);
    }

    #[test]
    fn test_equation_of_time_extremes() {
        let november = julian_century(julian_day(2024, 11, 3));
        let february = julian_century(julian_day(2024, 2, 11));
        assert!(close(equation_of_time(november), 16.4, 0.3), "{}", equation_of_time(november));
        assert!(close(equation_of_time(february), -14.2, 0.3), "{}", equation_of_time(february));
    }

    #[test]
    fn test_geom_mean_longitude_wraps() {
        for t in [-1.0, -0.1, 0.0, 0.25, 0.5, 1.0] {
            let l = geom_mean_longitude(t);
            assert!((0.0..360.0).contains(&l), "L0({t}) = {l}");
        }
    }

    #[test]
    fn test_hour_angle_equator_equinox() {
        let ha = hour_angle(0.0, 0.0, 90.0).unwrap();
        assert!(close(ha, 90.0, 1e-9));
    }

    #[test]
    fn test_hour_angle_polar_conditions() {
        assert_eq!(
            hour_angle(70.0, 23.44, STANDARD_ZENITH),
            Err(PolarCondition::MidnightSun)
        );
        assert_eq!(
            hour_angle(70.0, -23.44, STANDARD_ZENITH),
            Err(PolarCondition::PolarNight)
        );
        // Southern hemisphere mirrors the north
        assert_eq!(
            hour_angle(-70.0, -23.44, STANDARD_ZENITH),
            Err(PolarCondition::MidnightSun)
        );
    }

    #[test]
    fn test_horizon_dip() {
        assert_eq!(horizon_dip(0.0), 0.0);
        assert_eq!(horizon_dip(-50.0), 0.0);
        // ~sqrt(2h/R) radians for small h
        assert!(close(horizon_dip(1000.0), 1.015, 0.01));
        assert!(horizon_dip(2000.0) > horizon_dip(1000.0));
    }

    #[test]
    fn test_rising_before_noon_before_setting() {
        let jd = julian_day(2025, 3, 20);
        let rise = event_utc_minutes(jd, 31.7683, 35.2137, STANDARD_ZENITH, Event::Rising).unwrap();
        let set = event_utc_minutes(jd, 31.7683, 35.2137, STANDARD_ZENITH, Event::Setting).unwrap();
        let noon = solar_noon_utc_minutes(jd, 35.2137);
        assert!(rise < noon && noon < set);
        // Equinox: day length close to 12h plus refraction
        assert!(close(set - rise, 12.0 * 60.0 + 8.0, 6.0), "{}", set - rise);
    }

    #[test]
    fn test_far_east_rise_is_previous_utc_day() {
        // Auckland sunrise happens before 0h UT of the local date
        let jd = julian_day(2025, 1, 15);
        let rise =
            event_utc_minutes(jd, -36.8485, 174.7633, STANDARD_ZENITH, Event::Rising).unwrap();
        assert!(rise < 0.0, "{rise}");
    }
}
