//! Error types for running a query.

use thiserror::Error;

/// Error type for [`super::Aggregator::run`].
///
/// Lookup failures never show up here; they become empty results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The request selected no category, so there is nothing to do.
    #[error("No address category requested")]
    NothingRequested,
}
