//! Error types for configuration validation.

use thiserror::Error;

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid duration value (zero or too large).
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A built-in lookup endpoint failed to parse.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// An endpoint list ended up empty.
    #[error("No lookup endpoints configured for {family}")]
    NoEndpoints {
        /// Family the list was meant for
        family: crate::network::IpFamily,
    },
}

/// Well-known field names for error reporting.
pub mod field {
    /// The public lookup timeout.
    pub const TIMEOUT: &str = "timeout";
}
