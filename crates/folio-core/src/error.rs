//! Core error types for folio behaviors.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.
//! None of them is ever shown to a visitor: a failing component is simply
//! skipped by the host layer.

use thiserror::Error;

/// Core error type for folio operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Typewriter input errors
    #[error("typewriter needs at least one phrase")]
    NoPhrases,

    #[error("typewriter phrase {index} is empty")]
    EmptyPhrase { index: usize },

    // Slider input errors
    #[error("slider needs at least one slide")]
    NoSlides,

    // Configuration errors
    #[error("delay '{field}' must be greater than zero")]
    InvalidDelay { field: &'static str },

    #[error("threshold '{field}' must be within 0.0..=1.0, got {value}")]
    InvalidThreshold { field: &'static str, value: String },

    #[error("config parse error: {reason}")]
    ConfigParse { reason: String },
}

impl Error {
    /// Create an invalid delay error.
    #[must_use]
    pub const fn invalid_delay(field: &'static str) -> Self {
        Self::InvalidDelay { field }
    }

    /// Create an invalid threshold error.
    #[must_use]
    pub fn invalid_threshold(field: &'static str, value: f64) -> Self {
        Self::InvalidThreshold {
            field,
            value: value.to_string(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse(reason: impl Into<String>) -> Self {
        Self::ConfigParse {
            reason: reason.into(),
        }
    }
}
