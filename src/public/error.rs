//! Error types for public address lookups.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong without dictating recovery strategy.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL could not be turned into a request.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Why a single lookup endpoint did not produce an address.
///
/// Every variant moves the resolver on to the next endpoint.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request itself failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The service answered with a non-2xx status.
    #[error("Unexpected HTTP status {0}")]
    Status(http::StatusCode),

    /// The body was not valid UTF-8.
    #[error("Response body is not valid UTF-8")]
    InvalidBody,

    /// The body was empty after trimming.
    #[error("Response body is empty")]
    EmptyBody,
}
