#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Timelike};
    use chrono_tz::{America::New_York, Tz};
    use proptest::prelude::*;

    use crate::time::{add_offset, format_hms, midpoint, parse_hms, proportional_hour, shaah_zmanis};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Tz> {
        New_York.with_ymd_and_hms(2025, 11, 26, h, m, s).unwrap()
    }

    #[test]
    fn test_add_offset_forward_and_back() {
        let t = at(6, 50, 0);
        assert_eq!(add_offset(&t, 72.0), at(8, 2, 0));
        assert_eq!(add_offset(&t, -72.0), at(5, 38, 0));
        assert_eq!(add_offset(&t, 0.5), at(6, 50, 30));
    }

    #[test]
    fn test_midpoint_basic() {
        let a = at(6, 0, 0);
        let b = at(18, 0, 0);
        assert_eq!(midpoint(&a, &b), at(12, 0, 0));
        assert_eq!(midpoint(&b, &a), at(12, 0, 0));
        assert_eq!(midpoint(&a, &a), a);
    }

    #[test]
    fn test_midpoint_symmetric_on_odd_nanos() {
        let a = at(6, 0, 0);
        let b = a + Duration::nanoseconds(3);
        assert_eq!(midpoint(&a, &b), midpoint(&b, &a));
    }

    #[test]
    fn test_proportional_hour_anchors() {
        let start = at(6, 54, 13);
        let end = at(16, 31, 47);
        assert_eq!(proportional_hour(&start, &end, 0.0), start);
        assert_eq!(proportional_hour(&start, &end, 12.0), end);
        assert_eq!(proportional_hour(&start, &end, 6.0), midpoint(&start, &end));
    }

    #[test]
    fn test_proportional_hour_is_not_sixty_minutes() {
        // 12h span -> one hour is exactly 60 minutes; 9h span -> 45 minutes
        let start = at(7, 0, 0);
        let end = at(16, 0, 0);
        assert_eq!(proportional_hour(&start, &end, 1.0), at(7, 45, 0));
        assert_eq!(shaah_zmanis(&start, &end), Duration::minutes(45));
    }

    #[test]
    fn test_proportional_hour_fractional() {
        let start = at(6, 0, 0);
        let end = at(18, 0, 0);
        assert_eq!(proportional_hour(&start, &end, 10.75), at(16, 45, 0));
    }

    #[test]
    fn test_proportional_hour_keeps_subsecond_precision() {
        let start = at(6, 0, 0);
        let end = start + Duration::milliseconds(12_000 * 60 * 60 + 120);
        let h = proportional_hour(&start, &end, 1.0);
        assert_eq!(h - start, Duration::milliseconds(60 * 60 * 1000 + 10));
    }

    #[test]
    fn test_format_truncates_subseconds() {
        let t = at(6, 54, 59) + Duration::milliseconds(999);
        assert_eq!(format_hms(&t), "06:54:59");
    }

    #[test]
    fn test_parse_hms_rejects_garbage() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 26).unwrap();
        assert!(parse_hms(date, &New_York, "25:00:00").is_none());
        assert!(parse_hms(date, &New_York, "noon").is_none());
    }

    proptest! {
        #[test]
        fn prop_midpoint_symmetric(a_ns in 0i64..86_400_000_000_000, b_ns in 0i64..86_400_000_000_000) {
            let base = at(0, 0, 0);
            let a = base + Duration::nanoseconds(a_ns);
            let b = base + Duration::nanoseconds(b_ns);
            prop_assert_eq!(midpoint(&a, &b), midpoint(&b, &a));
        }

        #[test]
        fn prop_six_hours_is_midpoint(a_ns in 0i64..86_400_000_000_000, b_ns in 0i64..86_400_000_000_000) {
            let base = at(0, 0, 0);
            let a = base + Duration::nanoseconds(a_ns);
            let b = base + Duration::nanoseconds(b_ns);
            prop_assert_eq!(proportional_hour(&a, &b, 6.0), midpoint(&a, &b));
            prop_assert_eq!(proportional_hour(&a, &b, 0.0), a);
            prop_assert_eq!(proportional_hour(&a, &b, 12.0), b);
        }

        #[test]
        fn prop_format_round_trips_minute(secs in 0i64..86_399) {
            let t = at(0, 0, 0) + Duration::seconds(secs) + Duration::milliseconds(secs % 1000);
            let date = t.date_naive();
            let rebuilt = parse_hms(date, &New_York, &format_hms(&t)).unwrap();
            prop_assert_eq!(rebuilt.hour(), t.hour());
            prop_assert_eq!(rebuilt.minute(), t.minute());
        }
    }
}
