//! Error types

use thiserror::Error;

/// Errors reported by store operations.
///
/// Neither variant is exceptional: both are returned to the caller and
/// rendered as client errors by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
  /// A required key or value was missing or empty
  #[error("{0}")]
  InvalidInput(&'static str),

  /// The key is not present in the store
  #[error("Key not found")]
  NotFound,
}

impl StoreError {
  pub const KEY_REQUIRED: Self = StoreError::InvalidInput("Key is required");
  pub const KEY_VALUE_REQUIRED: Self = StoreError::InvalidInput("Key and value are required");
}

/// Errors raised while resolving the startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid port '{value}': {source}")]
  InvalidPort {
    value: String,
    #[source]
    source: std::num::ParseIntError,
  },
}
