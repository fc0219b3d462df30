//! Zmanim calculation engine.
//!
//! Computes halachic times for a date and location from a publisher's
//! JSON algorithm document:
//!
//! - [`solar`]: NOAA solar position model (sunrise, sunset, solar noon,
//!   depression-angle crossings)
//! - [`parsing`] and [`preprocessing`]: algorithm documents, parsed and then
//!   validated into typed configurations
//! - [`services`]: the two-phase executor and formula descriptions
//! - [`time`]: instant arithmetic shared by the executor

pub mod error;
pub mod models;
pub mod parsing;
pub mod preprocessing;
pub mod services;
pub mod settings;
pub mod solar;
pub mod time;

pub use error::{CalculationError, ConfigError, LocationError, ValidationErrors, ValidationIssue};
pub use models::{AlgorithmConfig, GeoLocation, ZmanResult, ZmanimResults};
pub use parsing::{load_algorithm, parse_algorithm};
pub use services::calculate_zmanim;
pub use solar::{compute_sun_times, SunTimes};
