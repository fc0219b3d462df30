//! Algorithm configuration validation with aggregated error reporting.
//!
//! Turns a [`RawAlgorithmConfig`] into a typed [`AlgorithmConfig`]. Every
//! problem in the document is collected, so a publisher can fix all of them
//! in one pass. Beyond required parameters, references between zmanim are
//! checked against what the two-phase executor can evaluate:
//!
//! * `fixed_minutes.from` may name `sunrise`, `sunset`, the `alos`/`tzeis`
//!   anchors, or a zman computed directly from the sun (sunrise, sunset,
//!   solar_angle, proportional).
//! * `midpoint.start`/`end` may name `sunrise`, `sunset` or any
//!   non-midpoint zman.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ValidationErrors, ValidationIssue};
use crate::models::algorithm::{ALOS, SUNRISE, SUNSET, TZEIS};
use crate::models::{AlgorithmConfig, ProportionalBase, SolarDirection, ZmanConfig, ZmanMethod};
use crate::parsing::{RawAlgorithmConfig, RawZman};

/// Method names accepted in documents.
pub const METHODS: [&str; 6] = [
    "sunrise",
    "sunset",
    "solar_angle",
    "fixed_minutes",
    "proportional",
    "midpoint",
];

/// Validation outcome with non-fatal warnings.
///
/// # Examples
///
/// ```
/// use zmanim_core::parsing::parse_raw_algorithm;
/// use zmanim_core::preprocessing::validator::AlgorithmValidator;
///
/// let raw = parse_raw_algorithm(br#"{
///     "name": "Heuristic",
///     "zmanim": { "alos": { "method": "solar_angle", "params": { "degrees": 16.1 } } }
/// }"#).unwrap();
/// let report = AlgorithmValidator::report(&raw);
/// assert!(report.is_valid);
/// assert_eq!(report.warnings.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Validator for publisher algorithm documents.
pub struct AlgorithmValidator;

impl AlgorithmValidator {
    /// Validate a raw document into a typed configuration.
    pub fn validate(raw: &RawAlgorithmConfig) -> Result<AlgorithmConfig, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if raw.name.trim().is_empty() {
            errors.push(ValidationIssue::EmptyName);
        }
        if raw.zmanim.is_empty() {
            errors.push(ValidationIssue::NoZmanim);
        }

        let mut zmanim = Vec::with_capacity(raw.zmanim.len());
        for (key, zman) in raw.zmanim.iter() {
            if let Some(method) = typed_method(key, zman, &mut errors) {
                zmanim.push(ZmanConfig::new(key, method));
            }
        }

        for zman in &zmanim {
            check_references(zman, raw, &mut errors);
        }

        if errors.is_empty() {
            Ok(AlgorithmConfig {
                name: raw.name.clone(),
                description: raw.description.clone(),
                version: raw.version.clone(),
                zmanim,
            })
        } else {
            Err(errors)
        }
    }

    /// Validate and describe the outcome, including warnings that do not
    /// block evaluation.
    pub fn report(raw: &RawAlgorithmConfig) -> ValidationReport {
        let mut warnings = Vec::new();
        for (key, zman) in raw.zmanim.iter() {
            if zman.method == "solar_angle" && !zman.params.contains_key("direction") {
                warnings.push(format!(
                    "zman `{key}`: no `direction` given; side of the day is inferred from the angle"
                ));
            }
            if zman.method == "proportional" {
                if let Some(hours) = zman.params.get("hours").and_then(Value::as_f64) {
                    if !(0.0..=12.0).contains(&hours) {
                        warnings.push(format!(
                            "zman `{key}`: {hours} proportional hours falls outside the day"
                        ));
                    }
                }
            }
        }

        match Self::validate(raw) {
            Ok(_) => ValidationReport {
                is_valid: true,
                errors: Vec::new(),
                warnings,
            },
            Err(errors) => ValidationReport {
                is_valid: false,
                errors: errors.issues().iter().map(|i| i.to_string()).collect(),
                warnings,
            },
        }
    }
}

/// Validate a raw document into a typed configuration.
pub fn validate(raw: &RawAlgorithmConfig) -> Result<AlgorithmConfig, ValidationErrors> {
    AlgorithmValidator::validate(raw)
}

fn typed_method(key: &str, zman: &RawZman, errors: &mut ValidationErrors) -> Option<ZmanMethod> {
    let params = Params {
        key,
        method: &zman.method,
        values: &zman.params,
    };
    let before = errors.len();

    let method = match zman.method.as_str() {
        "sunrise" => Some(ZmanMethod::Sunrise),
        "sunset" => Some(ZmanMethod::Sunset),
        "solar_angle" => {
            let degrees = params.number("degrees", errors);
            let direction = params.direction(errors);
            degrees.map(|degrees| ZmanMethod::SolarAngle { degrees, direction })
        }
        "fixed_minutes" => {
            let minutes = params.number("minutes", errors);
            let from = params.string("from", errors);
            Some(ZmanMethod::FixedMinutes {
                minutes: minutes?,
                from: from?,
            })
        }
        "proportional" => {
            let hours = params.number("hours", errors);
            let base = params.base(errors);
            Some(ZmanMethod::Proportional {
                hours: hours?,
                base: base?,
            })
        }
        "midpoint" => {
            let start = params.string("start", errors);
            let end = params.string("end", errors);
            Some(ZmanMethod::Midpoint {
                start: start?,
                end: end?,
            })
        }
        other => {
            errors.push(ValidationIssue::UnknownMethod {
                key: key.to_string(),
                method: other.to_string(),
            });
            None
        }
    };

    if errors.len() > before {
        None
    } else {
        method
    }
}

/// Typed accessors over one zman's parameter map.
struct Params<'a> {
    key: &'a str,
    method: &'a str,
    values: &'a Map<String, Value>,
}

impl Params<'_> {
    fn missing(&self, param: &str) -> ValidationIssue {
        ValidationIssue::MissingParameter {
            key: self.key.to_string(),
            method: self.method.to_string(),
            param: param.to_string(),
        }
    }

    fn invalid(&self, param: &str, reason: &str) -> ValidationIssue {
        ValidationIssue::InvalidParameter {
            key: self.key.to_string(),
            method: self.method.to_string(),
            param: param.to_string(),
            reason: reason.to_string(),
        }
    }

    fn number(&self, param: &str, errors: &mut ValidationErrors) -> Option<f64> {
        match self.values.get(param) {
            None | Some(Value::Null) => {
                errors.push(self.missing(param));
                None
            }
            Some(v) => match v.as_f64() {
                Some(n) if n.is_finite() => Some(n),
                _ => {
                    errors.push(self.invalid(param, "expected a number"));
                    None
                }
            },
        }
    }

    fn string(&self, param: &str, errors: &mut ValidationErrors) -> Option<String> {
        match self.values.get(param) {
            None | Some(Value::Null) => {
                errors.push(self.missing(param));
                None
            }
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Some(Value::String(_)) => {
                errors.push(self.invalid(param, "must not be empty"));
                None
            }
            Some(_) => {
                errors.push(self.invalid(param, "expected a string"));
                None
            }
        }
    }

    fn base(&self, errors: &mut ValidationErrors) -> Option<ProportionalBase> {
        let base = self.string("base", errors)?;
        let parsed = ProportionalBase::parse(&base);
        if parsed.is_none() {
            errors.push(self.invalid("base", "expected `gra` or `mga`"));
        }
        parsed
    }

    fn direction(&self, errors: &mut ValidationErrors) -> Option<SolarDirection> {
        let value = match self.values.get("direction") {
            None | Some(Value::Null) => return None,
            Some(v) => v,
        };
        let parsed = value.as_str().and_then(SolarDirection::parse);
        if parsed.is_none() {
            errors.push(self.invalid("direction", "expected `before_sunrise` or `after_sunset`"));
        }
        parsed
    }
}

/// Whether a raw entry is evaluated in phase 1 without needing other zmanim.
fn is_independent_method(method: &str) -> bool {
    matches!(method, "sunrise" | "sunset" | "solar_angle" | "proportional")
}

fn check_references(zman: &ZmanConfig, raw: &RawAlgorithmConfig, errors: &mut ValidationErrors) {
    match &zman.method {
        ZmanMethod::FixedMinutes { from, .. } => {
            check_reference(zman, from, raw, true, errors);
        }
        ZmanMethod::Midpoint { start, end } => {
            check_reference(zman, start, raw, false, errors);
            check_reference(zman, end, raw, false, errors);
        }
        _ => {}
    }
}

fn check_reference(
    zman: &ZmanConfig,
    reference: &str,
    raw: &RawAlgorithmConfig,
    allow_anchors: bool,
    errors: &mut ValidationErrors,
) {
    if reference == SUNRISE || reference == SUNSET {
        return;
    }

    match raw.zmanim.get(reference) {
        Some(target) => {
            // Entries with their own errors are reported on their own key
            if !METHODS.contains(&target.method.as_str()) {
                return;
            }
            let allowed = if zman.method.is_midpoint() {
                target.method != "midpoint"
            } else {
                is_independent_method(&target.method)
            };
            if !allowed {
                errors.push(ValidationIssue::UnsupportedDependency {
                    key: zman.key.clone(),
                    method: zman.method.name().to_string(),
                    reference: reference.to_string(),
                });
            }
        }
        None if allow_anchors && (reference == ALOS || reference == TZEIS) => {}
        None => errors.push(ValidationIssue::UnresolvedReference {
            key: zman.key.clone(),
            reference: reference.to_string(),
        }),
    }
}
