//! Core error types for defi-bureau-core.
//!
//! A blocked increment is the only error a user is expected to see; it is
//! non-fatal and leaves the score state untouched. Storage reads never fail
//! outward (malformed data loads as the zero default) and writes are
//! best-effort.

use std::path::PathBuf;
use thiserror::Error;

use crate::gate::GateDecision;

/// An increment was attempted while the gate disallows it.
///
/// Carries the advisory message from the gate decision, or a generic
/// fallback when the decision supplied none.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct GateError {
    pub reason: String,
}

impl GateError {
    pub fn from_decision(decision: &GateDecision) -> Self {
        let reason = decision
            .reason
            .clone()
            .unwrap_or_else(|| "scoring is closed outside work hours".to_string());
        Self { reason }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Core error type for defi-bureau-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Scoring blocked by the work-hours gate
    #[error(transparent)]
    Gate(#[from] GateError),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_error_carries_advisory_reason() {
        let decision = GateDecision::blocked("challenge active only on weekdays".to_string());
        let err = GateError::from_decision(&decision);
        assert_eq!(err.to_string(), "challenge active only on weekdays");
    }

    #[test]
    fn gate_error_falls_back_to_generic_reason() {
        let decision = GateDecision {
            allowed: false,
            reason: None,
        };
        let err = GateError::from_decision(&decision);
        assert_eq!(err.to_string(), "scoring is closed outside work hours");
    }
}
