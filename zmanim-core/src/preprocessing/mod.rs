pub mod validator;

#[cfg(test)]
mod validator_tests;

pub use validator::{validate, AlgorithmValidator, ValidationReport};
