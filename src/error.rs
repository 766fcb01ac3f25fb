//! Error types for simulation setup.

use thiserror::Error;

/// Errors that can occur while building or configuring a simulation.
///
/// Stepping never fails: every error here surfaces before the first
/// `advance` call.
#[derive(Debug, Error)]
pub enum SimError {
    /// Non-positive or non-finite arena dimension, radius, mass, etc.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Description of the configuration error.
        reason: String,
    },

    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for `SimConfig`.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SimError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Result type for simulation setup.
pub type Result<T> = std::result::Result<T, SimError>;

/// Require a strictly positive, finite value.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert!(require_positive("width", 1.0).is_ok());
        assert!(require_positive("width", 0.0).is_err());
        assert!(require_positive("width", -3.0).is_err());
        assert!(require_positive("width", f64::NAN).is_err());
        assert!(require_positive("width", f64::INFINITY).is_err());
    }

    #[test]
    fn test_invalid_message() {
        let err = require_positive("mass", 0.0).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfiguration { .. }));
        assert_eq!(
            err.to_string(),
            "invalid configuration: mass must be positive and finite, got 0"
        );
    }
}
