//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default per-request timeout for public address lookups, in seconds.
pub const TIMEOUT_SECS: u64 = 5;

/// Largest accepted per-request timeout, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 120;

/// Separator between addresses of the same family.
pub const ADDRESS_SEPARATOR: &str = ", ";

/// Interface name prefixes scanned for the ethernet category.
pub const ETHERNET_PREFIXES: [char; 1] = ['e'];

/// Interface name prefixes scanned for the loopback category.
pub const LOOPBACK_PREFIXES: [char; 1] = ['l'];

/// IPv4 lookup services, in the order they are tried.
pub const IPV4_ENDPOINTS: [&str; 2] = ["https://api.ipify.org", "https://ipv4.icanhazip.com"];

/// IPv6 lookup services, in the order they are tried.
pub const IPV6_ENDPOINTS: [&str; 2] = ["https://api6.ipify.org", "https://ipv6.icanhazip.com"];

/// Default per-request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
