//! Calculation services.
//!
//! - [`executor`]: two-phase evaluation of an algorithm for one date and place
//! - [`formula`]: human-readable formula descriptions
//! - [`ordering`]: canonical output order

pub mod executor;
pub mod formula;
pub mod ordering;


pub use executor::{calculate_zmanim, Executor, FALLBACK_ANCHOR_MINUTES};
pub use formula::formula_info;
pub use ordering::{order_rank, sort_results, CANONICAL_ORDER};
