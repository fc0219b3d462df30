//! Human-readable formula descriptions attached to every result.

use serde_json::{json, Map, Value};

use crate::models::{FormulaInfo, ProportionalBase, SolarDirection, ZmanMethod};

/// Describe how a method computes its time.
pub fn formula_info(method: &ZmanMethod) -> FormulaInfo {
    let mut parameters = Map::new();

    let explanation = match method {
        ZmanMethod::Sunrise => {
            "Sunrise: the upper edge of the sun appears over the horizon \
             (zenith 90.833°, adjusted for elevation)"
                .to_string()
        }
        ZmanMethod::Sunset => {
            "Sunset: the upper edge of the sun disappears below the horizon \
             (zenith 90.833°, adjusted for elevation)"
                .to_string()
        }
        ZmanMethod::SolarAngle { degrees, direction } => {
            parameters.insert("degrees".into(), json!(degrees));
            if let Some(d) = direction {
                parameters.insert("direction".into(), Value::from(d.as_str()));
            }
            let side = match (*direction).unwrap_or_else(|| SolarDirection::infer(*degrees)) {
                SolarDirection::BeforeSunrise => "before sunrise",
                SolarDirection::AfterSunset => "after sunset",
            };
            format!("Sun is {degrees}° below the horizon {side}")
        }
        ZmanMethod::FixedMinutes { minutes, from } => {
            parameters.insert("minutes".into(), json!(minutes));
            parameters.insert("from".into(), Value::from(from.as_str()));
            if *minutes < 0.0 {
                format!("{} minutes before {from}", -minutes)
            } else if *minutes > 0.0 {
                format!("{minutes} minutes after {from}")
            } else {
                format!("Same time as {from}")
            }
        }
        ZmanMethod::Proportional { hours, base } => {
            parameters.insert("hours".into(), json!(hours));
            parameters.insert("base".into(), Value::from(base.as_str()));
            let day = match base {
                ProportionalBase::Gra => "GRA: day from sunrise to sunset",
                ProportionalBase::Mga => {
                    "MGA: day from 72 minutes before sunrise to 72 minutes after sunset"
                }
            };
            format!("{hours} proportional hours (shaos zmaniyos) into the day, {day}")
        }
        ZmanMethod::Midpoint { start, end } => {
            parameters.insert("start".into(), Value::from(start.as_str()));
            parameters.insert("end".into(), Value::from(end.as_str()));
            format!("Midpoint between {start} and {end}")
        }
    };

    FormulaInfo {
        method: method.name().to_string(),
        parameters,
        explanation,
    }
}
