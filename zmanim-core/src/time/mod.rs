//! Time arithmetic over timezone-aware instants.

pub mod arithmetic;

#[cfg(test)]
mod arithmetic_tests;

pub use arithmetic::{
    add_offset, format_hms, midpoint, parse_hms, proportional_hour, shaah_zmanis, HOURS_PER_DAY,
};
