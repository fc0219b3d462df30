pub mod algorithm;
pub mod location;
pub mod result;
mod standard;

pub use algorithm::{AlgorithmConfig, ProportionalBase, SolarDirection, ZmanConfig, ZmanMethod};
pub use location::{parse_timezone, GeoLocation};
pub use result::{FormulaInfo, LocationInfo, ZmanResult, ZmanimResults};
