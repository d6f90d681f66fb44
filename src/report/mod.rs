//! Aggregation of the local and public lookups into one report.
//!
//! This module provides:
//! - Category selection ([`QueryRequest`], [`Category`])
//! - Concurrent dispatch of the requested categories ([`Aggregator`])
//! - The collected, display-ordered results ([`Report`])

mod aggregator;
mod error;
mod query;
mod summary;


pub use aggregator::{Aggregator, ethernet_filter, loopback_filter};
pub use error::QueryError;
pub use query::{Category, QueryRequest};
pub use summary::Report;
