//! Configuration validation
//!
//! Validates trainer configuration for correctness before a run starts.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::{validate_config, validate_paths};
