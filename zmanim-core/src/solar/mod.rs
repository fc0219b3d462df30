//! Solar position engine.
//!
//! [`noaa`] holds the raw geometry; [`sun_times`] turns it into
//! timezone-aware instants for a calendar date and observer.

pub mod noaa;
pub mod sun_times;

#[cfg(test)]
mod noaa_tests;

pub use noaa::{PolarCondition, SolarGeometry};
pub use sun_times::{compute_angle_times, compute_sun_times, SunTimes};
