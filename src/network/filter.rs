//! Address filtering for selective scans.
//!
//! # Design
//!
//! - **Pure Matchers**: [`PrefixFilter`] and [`LoopbackFilter`] only answer
//!   "does this address match?" without include/exclude semantics.
//! - **Filter Chain**: [`FilterChain`] combines matchers with correct semantics:
//!   - Exclude filters: AND logic (must pass ALL excludes)
//!   - Include filters: OR logic (pass ANY include, empty = match all)

use std::collections::BTreeSet;

use super::InterfaceAddress;

/// Trait for filtering discovered interface addresses.
///
/// Filters must be `Send + Sync` because the scanner evaluates them on a
/// blocking worker thread.
pub trait AddressFilter: Send + Sync {
    /// Returns `true` if the address matches this filter.
    fn matches(&self, address: &InterfaceAddress) -> bool;
}

// ============================================================================
// PrefixFilter - Pure matcher by first character of the interface name
// ============================================================================

/// Matches addresses whose interface name starts with one of a set of characters.
///
/// Only the first character of the name is compared, so `'e'` matches
/// `en0`, `eth0` and `enp3s0` alike.
///
/// # Examples
///
/// ```
/// use myip::network::filter::{AddressFilter, PrefixFilter};
/// use myip::network::InterfaceAddress;
///
/// let filter = PrefixFilter::new(['e']);
///
/// let eth = InterfaceAddress::from_ip("eth0", "192.168.1.10".parse().unwrap());
/// let wlan = InterfaceAddress::from_ip("wlan0", "192.168.1.11".parse().unwrap());
///
/// assert!(filter.matches(&eth));
/// assert!(!filter.matches(&wlan));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixFilter {
    prefixes: BTreeSet<char>,
}

impl PrefixFilter {
    /// Creates a filter accepting any of the given first characters.
    #[must_use]
    pub fn new(prefixes: impl IntoIterator<Item = char>) -> Self {
        Self {
            prefixes: prefixes.into_iter().collect(),
        }
    }
}

impl AddressFilter for PrefixFilter {
    fn matches(&self, address: &InterfaceAddress) -> bool {
        address
            .name
            .chars()
            .next()
            .is_some_and(|first| self.prefixes.contains(&first))
    }
}

// ============================================================================
// LoopbackFilter - Pure matcher by loopback flag
// ============================================================================

/// Matches loopback addresses (`127.0.0.0/8`, `::1`).
///
/// Usually used as an exclude filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopbackFilter;

impl AddressFilter for LoopbackFilter {
    fn matches(&self, address: &InterfaceAddress) -> bool {
        address.is_loopback
    }
}

// ============================================================================
// FilterChain - Include OR / Exclude AND semantics
// ============================================================================

/// Filter chain with include/exclude semantics.
///
/// Evaluation order:
/// 1. **Exclude filters (AND)**: Any match → reject.
/// 2. **Include filters (OR)**: Any match → accept.
///    Empty includes = match all (passthrough).
///
/// # Examples
///
/// ```
/// use myip::network::filter::{AddressFilter, FilterChain, LoopbackFilter, PrefixFilter};
/// use myip::network::InterfaceAddress;
///
/// let chain = FilterChain::new()
///     .include(PrefixFilter::new(['e']))
///     .exclude(LoopbackFilter);
///
/// let eth = InterfaceAddress::from_ip("en0", "10.0.0.2".parse().unwrap());
/// let lo = InterfaceAddress::from_ip("lo0", "127.0.0.1".parse().unwrap());
///
/// assert!(chain.matches(&eth));
/// assert!(!chain.matches(&lo));
/// ```
#[derive(Default)]
pub struct FilterChain {
    includes: Vec<Box<dyn AddressFilter>>,
    excludes: Vec<Box<dyn AddressFilter>>,
}

impl FilterChain {
    /// Creates an empty filter chain (matches all addresses).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an include filter (OR semantics).
    #[must_use]
    pub fn include<F: AddressFilter + 'static>(mut self, filter: F) -> Self {
        self.includes.push(Box::new(filter));
        self
    }

    /// Adds an exclude filter (AND semantics - must not match ANY).
    #[must_use]
    pub fn exclude<F: AddressFilter + 'static>(mut self, filter: F) -> Self {
        self.excludes.push(Box::new(filter));
        self
    }
}

impl AddressFilter for FilterChain {
    fn matches(&self, address: &InterfaceAddress) -> bool {
        if self.excludes.iter().any(|f| f.matches(address)) {
            return false;
        }

        self.includes.is_empty() || self.includes.iter().any(|f| f.matches(address))
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("include_count", &self.includes.len())
            .field("exclude_count", &self.excludes.len())
            .finish()
    }
}

// Box<dyn AddressFilter> implements AddressFilter
impl AddressFilter for Box<dyn AddressFilter> {
    fn matches(&self, address: &InterfaceAddress) -> bool {
        self.as_ref().matches(address)
    }
}
