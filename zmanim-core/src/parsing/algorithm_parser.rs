use std::fmt;
use std::path::Path;

use anyhow::Context;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{ConfigError, ConfigResult};
use crate::models::AlgorithmConfig;
use crate::preprocessing::validator;

/// Custom deserializer that accepts either a string or a number for the version
fn deserialize_version<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    }))
}

/// Raw zman entry: method name plus untyped parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawZman {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Map<String, serde_json::Value>,
}

/// Zman entries in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawZmanim(pub Vec<(String, RawZman)>);

impl RawZmanim {
    pub fn get(&self, key: &str) -> Option<&RawZman> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, z)| z)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawZman)> {
        self.0.iter().map(|(k, z)| (k.as_str(), z))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for RawZmanim {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = RawZmanim;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of zman key to {method, params}")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                use serde::de::Error;

                let mut entries: Vec<(String, RawZman)> = Vec::new();
                while let Some((key, zman)) = map.next_entry::<String, RawZman>()? {
                    if entries.iter().any(|(k, _)| *k == key) {
                        return Err(A::Error::custom(format!("duplicate zman key `{key}`")));
                    }
                    entries.push((key, zman));
                }
                Ok(RawZmanim(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// Algorithm document exactly as published, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawAlgorithmConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_version")]
    pub version: Option<String>,
    #[serde(default)]
    pub zmanim: RawZmanim,
}

/// Parse an algorithm document without validating it.
///
/// Syntax and shape errors carry the JSON path of the offending value.
pub fn parse_raw_algorithm(bytes: &[u8]) -> ConfigResult<RawAlgorithmConfig> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let raw: RawAlgorithmConfig = serde_path_to_error::deserialize(&mut de)?;
    de.end().map_err(|e| ConfigError::Parse {
        path: ".".to_string(),
        message: e.to_string(),
    })?;
    Ok(raw)
}

/// Parse and validate an algorithm document.
///
/// # Example
///
/// ```
/// use zmanim_core::parsing::parse_algorithm;
///
/// let config = parse_algorithm(br#"{
///     "name": "Minimal",
///     "zmanim": { "sunrise": { "method": "sunrise" } }
/// }"#).unwrap();
/// assert_eq!(config.zmanim.len(), 1);
/// ```
pub fn parse_algorithm(bytes: &[u8]) -> ConfigResult<AlgorithmConfig> {
    let raw = parse_raw_algorithm(bytes)?;
    let config = validator::validate(&raw)?;
    log::debug!(
        "Parsed algorithm '{}' with {} zmanim",
        config.name,
        config.zmanim.len()
    );
    Ok(config)
}

/// Parse an algorithm document from a string
pub fn parse_algorithm_str(json: &str) -> ConfigResult<AlgorithmConfig> {
    parse_algorithm(json.as_bytes())
}

/// Read and parse an algorithm document from disk
pub fn load_algorithm(path: &Path) -> anyhow::Result<AlgorithmConfig> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read algorithm file: {}", path.display()))?;
    parse_algorithm(&bytes)
        .with_context(|| format!("Failed to load algorithm from {}", path.display()))
}
