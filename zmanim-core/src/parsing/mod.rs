//! Parsers for publisher algorithm documents.
//!
//! - [`algorithm_parser`]: JSON algorithm documents, raw and validated
//!
//! # Example
//!
//! ```no_run
//! use zmanim_core::parsing::load_algorithm;
//! use std::path::Path;
//!
//! let config = load_algorithm(Path::new("data/standard.json"))
//!     .expect("Failed to load algorithm");
//! ```

pub mod algorithm_parser;


pub use algorithm_parser::{
    load_algorithm, parse_algorithm, parse_algorithm_str, parse_raw_algorithm,
    RawAlgorithmConfig, RawZman, RawZmanim,
};
