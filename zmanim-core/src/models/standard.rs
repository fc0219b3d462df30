use crate::models::algorithm::{SUNRISE, SUNSET};
use crate::models::{AlgorithmConfig, ProportionalBase, SolarDirection, ZmanConfig, ZmanMethod};

impl AlgorithmConfig {
    /// Built-in default set: 16.1° alos, 11.5° misheyakir, GRA and MGA
    /// shma/tfila, chatzos, mincha, plag, 8.5° tzais and 72-minute tzais.
    ///
    /// Matches `data/standard.json`.
    pub fn standard() -> Self {
        let gra = |hours| ZmanMethod::Proportional {
            hours,
            base: ProportionalBase::Gra,
        };
        let mga = |hours| ZmanMethod::Proportional {
            hours,
            base: ProportionalBase::Mga,
        };
        let angle = |degrees, direction| ZmanMethod::SolarAngle {
            degrees,
            direction: Some(direction),
        };

        Self {
            name: "Standard".to_string(),
            description: Some(
                "Common GRA and MGA zmanim with 16.1 degree alos and 8.5 degree tzais".to_string(),
            ),
            version: Some("1.0".to_string()),
            zmanim: vec![
                ZmanConfig::new("alos_hashachar", angle(16.1, SolarDirection::BeforeSunrise)),
                ZmanConfig::new("misheyakir", angle(11.5, SolarDirection::BeforeSunrise)),
                ZmanConfig::new("sunrise", ZmanMethod::Sunrise),
                ZmanConfig::new("sof_zman_shma_mga", mga(3.0)),
                ZmanConfig::new("sof_zman_shma_gra", gra(3.0)),
                ZmanConfig::new("sof_zman_tfila_mga", mga(4.0)),
                ZmanConfig::new("sof_zman_tfila_gra", gra(4.0)),
                ZmanConfig::new(
                    "chatzos",
                    ZmanMethod::Midpoint {
                        start: SUNRISE.to_string(),
                        end: SUNSET.to_string(),
                    },
                ),
                ZmanConfig::new("mincha_gedola", gra(6.5)),
                ZmanConfig::new("mincha_ketana", gra(9.5)),
                ZmanConfig::new("plag_hamincha", gra(10.75)),
                ZmanConfig::new("sunset", ZmanMethod::Sunset),
                ZmanConfig::new("tzais", angle(8.5, SolarDirection::AfterSunset)),
                ZmanConfig::new(
                    "tzais_72",
                    ZmanMethod::FixedMinutes {
                        minutes: 72.0,
                        from: SUNSET.to_string(),
                    },
                ),
            ],
        }
    }
}
