#[cfg(test)]
mod tests {
    use crate::error::{ValidationErrors, ValidationIssue};
    use crate::models::{AlgorithmConfig, SolarDirection, ZmanMethod};
    use crate::parsing::parse_raw_algorithm;
    use crate::preprocessing::validator::{validate, AlgorithmValidator};

    fn check(json: &str) -> Result<AlgorithmConfig, ValidationErrors> {
        let raw = parse_raw_algorithm(json.as_bytes()).expect("document should parse");
        validate(&raw)
    }

    fn issues(json: &str) -> Vec<ValidationIssue> {
        check(json).unwrap_err().into_iter().collect()
    }

    #[test]
    fn test_missing_degrees_names_key_and_method() {
        let found = issues(
            r#"{ "name": "X", "zmanim": { "alos": { "method": "solar_angle", "params": {} } } }"#,
        );
        assert_eq!(
            found,
            vec![ValidationIssue::MissingParameter {
                key: "alos".into(),
                method: "solar_angle".into(),
                param: "degrees".into(),
            }]
        );
        let message = found[0].to_string();
        assert!(message.contains("alos"));
        assert!(message.contains("solar_angle"));
    }

    #[test]
    fn test_all_issues_reported_together() {
        let errors = check(
            r#"{
                "name": "Many",
                "zmanim": {
                    "a": { "method": "fixed_minutes", "params": { "from": "sunrise" } },
                    "b": { "method": "proportional", "params": { "hours": 3 } },
                    "c": { "method": "midpoint", "params": { "start": "sunrise" } },
                    "d": { "method": "sunrise" }
                }
            }"#,
        )
        .unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(errors.mentions("a"));
        assert!(errors.mentions("b"));
        assert!(errors.mentions("c"));
        assert!(!errors.mentions("d"));
    }

    #[test]
    fn test_fixed_minutes_missing_both() {
        let found =
            issues(r#"{ "name": "X", "zmanim": { "k": { "method": "fixed_minutes" } } }"#);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_empty_name_and_no_zmanim() {
        let found = issues(r#"{ "name": "  ", "zmanim": {} }"#);
        assert_eq!(found, vec![ValidationIssue::EmptyName, ValidationIssue::NoZmanim]);
    }

    #[test]
    fn test_unknown_method() {
        let found =
            issues(r#"{ "name": "X", "zmanim": { "k": { "method": "lunar_angle" } } }"#);
        assert_eq!(
            found,
            vec![ValidationIssue::UnknownMethod {
                key: "k".into(),
                method: "lunar_angle".into()
            }]
        );
    }

    #[test]
    fn test_invalid_parameter_values() {
        let found = issues(
            r#"{
                "name": "X",
                "zmanim": {
                    "a": { "method": "proportional", "params": { "hours": 3, "base": "baal_hatanya" } },
                    "b": { "method": "solar_angle", "params": { "degrees": "sixteen" } },
                    "c": { "method": "solar_angle", "params": { "degrees": 8.5, "direction": "noon" } },
                    "d": { "method": "midpoint", "params": { "start": "", "end": "sunset" } }
                }
            }"#,
        );

        let params: Vec<(&str, &str)> = found
            .iter()
            .map(|issue| match issue {
                ValidationIssue::InvalidParameter { key, param, .. } => {
                    (key.as_str(), param.as_str())
                }
                other => panic!("unexpected issue {other:?}"),
            })
            .collect();
        assert_eq!(
            params,
            vec![("a", "base"), ("b", "degrees"), ("c", "direction"), ("d", "start")]
        );
    }

    #[test]
    fn test_unresolved_reference() {
        let found = issues(
            r#"{ "name": "X", "zmanim": {
                "candle_lighting": { "method": "fixed_minutes", "params": { "minutes": -18, "from": "shkia" } }
            } }"#,
        );
        assert_eq!(
            found,
            vec![ValidationIssue::UnresolvedReference {
                key: "candle_lighting".into(),
                reference: "shkia".into()
            }]
        );
    }

    #[test]
    fn test_offset_of_offset_is_too_deep() {
        let found = issues(
            r#"{ "name": "X", "zmanim": {
                "alos_72": { "method": "fixed_minutes", "params": { "minutes": -72, "from": "sunrise" } },
                "korbanos": { "method": "fixed_minutes", "params": { "minutes": 10, "from": "alos_72" } }
            } }"#,
        );
        assert_eq!(
            found,
            vec![ValidationIssue::UnsupportedDependency {
                key: "korbanos".into(),
                method: "fixed_minutes".into(),
                reference: "alos_72".into()
            }]
        );
    }

    #[test]
    fn test_offset_of_midpoint_is_too_deep() {
        let found = issues(
            r#"{ "name": "X", "zmanim": {
                "chatzos": { "method": "midpoint", "params": { "start": "sunrise", "end": "sunset" } },
                "after": { "method": "fixed_minutes", "params": { "minutes": 30, "from": "chatzos" } }
            } }"#,
        );
        assert!(matches!(
            found.as_slice(),
            [ValidationIssue::UnsupportedDependency { key, .. }] if key == "after"
        ));
    }

    #[test]
    fn test_midpoint_of_midpoint_is_too_deep() {
        let found = issues(
            r#"{ "name": "X", "zmanim": {
                "chatzos": { "method": "midpoint", "params": { "start": "sunrise", "end": "sunset" } },
                "quarter": { "method": "midpoint", "params": { "start": "sunrise", "end": "chatzos" } }
            } }"#,
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].zman_key(), Some("quarter"));
    }

    #[test]
    fn test_supported_references() {
        let config = check(
            r#"{ "name": "X", "zmanim": {
                "chatzos_mga": { "method": "midpoint", "params": { "start": "alos_72", "end": "tzais" } },
                "alos_72": { "method": "fixed_minutes", "params": { "minutes": -72, "from": "sunrise" } },
                "korbanos": { "method": "fixed_minutes", "params": { "minutes": 30, "from": "alos" } },
                "tzais": { "method": "solar_angle", "params": { "degrees": 8.5 } },
                "tzais_plus": { "method": "fixed_minutes", "params": { "minutes": 10, "from": "tzais" } }
            } }"#,
        );
        assert!(config.is_ok(), "{:?}", config.err());
    }

    #[test]
    fn test_anchor_not_allowed_in_midpoint() {
        let found = issues(
            r#"{ "name": "X", "zmanim": {
                "odd": { "method": "midpoint", "params": { "start": "alos", "end": "sunset" } }
            } }"#,
        );
        assert!(matches!(
            found.as_slice(),
            [ValidationIssue::UnresolvedReference { reference, .. }] if reference == "alos"
        ));
    }

    #[test]
    fn test_reference_to_broken_entry_not_double_reported() {
        let found = issues(
            r#"{ "name": "X", "zmanim": {
                "weird": { "method": "moonrise" },
                "after": { "method": "fixed_minutes", "params": { "minutes": 5, "from": "weird" } }
            } }"#,
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].zman_key(), Some("weird"));
    }

    #[test]
    fn test_typed_direction() {
        let config = check(
            r#"{ "name": "X", "zmanim": {
                "tzais": { "method": "solar_angle", "params": { "degrees": 16.1, "direction": "after_sunset" } }
            } }"#,
        )
        .unwrap();
        assert_eq!(
            config.zmanim[0].method,
            ZmanMethod::SolarAngle {
                degrees: 16.1,
                direction: Some(SolarDirection::AfterSunset)
            }
        );
    }

    #[test]
    fn test_report_warnings() {
        let raw = parse_raw_algorithm(
            br#"{ "name": "W", "zmanim": {
                "alos": { "method": "solar_angle", "params": { "degrees": 16.1 } },
                "late": { "method": "proportional", "params": { "hours": 13, "base": "gra" } },
                "bad": { "method": "midpoint", "params": { "start": "sunrise" } }
            } }"#,
        )
        .unwrap();

        let report = AlgorithmValidator::report(&raw);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("alos"));
        assert!(report.warnings[1].contains("late"));
    }
}
