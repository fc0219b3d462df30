//! Error types for configuration parsing, validation and calculation.
//!
//! Geometric undefinedness (polar day or night) is absent from
//! this module: it is carried as `None` on the affected instant.

use std::fmt;

/// Result type for configuration parsing and validation
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for a single zmanim calculation
pub type CalculationResult<T> = Result<T, CalculationError>;

/// Error type for loading an algorithm configuration document
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Malformed algorithm config at `{path}`: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid algorithm config: {0}")]
    Validation(#[from] ValidationErrors),
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        ConfigError::Parse {
            path,
            message: err.into_inner().to_string(),
        }
    }
}

/// A single problem found while validating an algorithm configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("algorithm name must not be empty")]
    EmptyName,

    #[error("algorithm must define at least one zman")]
    NoZmanim,

    #[error("zman `{key}`: unknown method `{method}`")]
    UnknownMethod { key: String, method: String },

    #[error("zman `{key}`: method `{method}` requires parameter `{param}`")]
    MissingParameter {
        key: String,
        method: String,
        param: String,
    },

    #[error("zman `{key}`: method `{method}` has invalid parameter `{param}`: {reason}")]
    InvalidParameter {
        key: String,
        method: String,
        param: String,
        reason: String,
    },

    #[error("zman `{key}`: reference `{reference}` does not name sunrise, sunset or a defined zman")]
    UnresolvedReference { key: String, reference: String },

    #[error("zman `{key}`: `{reference}` cannot be referenced from method `{method}` (dependency too deep)")]
    UnsupportedDependency {
        key: String,
        method: String,
        reference: String,
    },
}

impl ValidationIssue {
    /// The zman key the issue belongs to, if it is not a config-level issue.
    pub fn zman_key(&self) -> Option<&str> {
        match self {
            ValidationIssue::EmptyName | ValidationIssue::NoZmanim => None,
            ValidationIssue::UnknownMethod { key, .. }
            | ValidationIssue::MissingParameter { key, .. }
            | ValidationIssue::InvalidParameter { key, .. }
            | ValidationIssue::UnresolvedReference { key, .. }
            | ValidationIssue::UnsupportedDependency { key, .. } => Some(key),
        }
    }
}

/// Every validation issue of one document, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Whether any issue names the given zman key.
    pub fn mentions(&self, key: &str) -> bool {
        self.issues.iter().any(|i| i.zman_key() == Some(key))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} issue(s)", self.issues.len())?;
        for issue in &self.issues {
            write!(f, "; {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationIssue;
    type IntoIter = std::vec::IntoIter<ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

/// Error type for a calculation run; aborts the whole request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculationError {
    #[error("zman `{key}`: reference `{reference}` could not be resolved")]
    UnresolvedReference { key: String, reference: String },

    #[error("zman `{key}`: `{reference}` is itself a derived zman and cannot be referenced here")]
    UnsupportedDependency { key: String, reference: String },
}

impl CalculationError {
    /// The zman key that caused the calculation to abort.
    pub fn zman_key(&self) -> &str {
        match self {
            CalculationError::UnresolvedReference { key, .. }
            | CalculationError::UnsupportedDependency { key, .. } => key,
        }
    }
}

/// Error type for building an observer location
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("{name} out of range: {value}")]
    InvalidCoordinate { name: &'static str, value: f64 },
}
