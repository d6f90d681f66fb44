//! Network layer for enumerating and scanning local interface addresses.
//!
//! This module provides types and traits for:
//! - Representing discovered addresses ([`InterfaceAddress`])
//! - Address family classification ([`IpFamily`])
//! - Enumerating interface addresses ([`AddressFetcher`])
//! - Selecting addresses by interface name and loopback flag ([`filter`])
//! - Streaming scans over the above ([`LocalScanner`])
//! - Platform-specific implementations ([`platform`])

mod address;
mod fetcher;
pub mod filter;
pub mod platform;
mod scanner;

#[cfg(test)]
mod scanner_tests;

pub use address::{InterfaceAddress, IpFamily};
pub use fetcher::{AddressFetcher, FetchError};
pub use scanner::LocalScanner;
