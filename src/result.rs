//! Per-category address results.

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::network::IpFamily;

/// The IPv4 and IPv6 addresses found for one category.
///
/// Each side is either a `", "`-joined list or empty. Empty means the lookup
/// ran and found nothing (or failed); it is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResult {
    /// Joined IPv4 addresses.
    pub ipv4: String,
    /// Joined IPv6 addresses.
    pub ipv6: String,
}

impl AddressResult {
    /// Creates a result from already joined strings, trimming both.
    #[must_use]
    pub fn new(ipv4: impl AsRef<str>, ipv6: impl AsRef<str>) -> Self {
        Self {
            ipv4: ipv4.as_ref().trim().to_string(),
            ipv6: ipv6.as_ref().trim().to_string(),
        }
    }

    /// Creates a result by joining one address list per family.
    #[must_use]
    pub fn from_lists<S: AsRef<str>>(ipv4: &[S], ipv6: &[S]) -> Self {
        Self {
            ipv4: join_addresses(ipv4),
            ipv6: join_addresses(ipv6),
        }
    }

    /// Returns the joined addresses for one family.
    #[must_use]
    pub fn get(&self, family: IpFamily) -> &str {
        match family {
            IpFamily::V4 => &self.ipv4,
            IpFamily::V6 => &self.ipv6,
        }
    }

    /// Returns true if neither family has an address.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }
}

/// Joins addresses with `", "` and trims the result.
///
/// ```
/// use myip::result::join_addresses;
///
/// assert_eq!(join_addresses::<&str>(&[]), "");
/// assert_eq!(join_addresses(&["10.0.0.1", "10.0.0.2"]), "10.0.0.1, 10.0.0.2");
/// ```
#[must_use]
pub fn join_addresses<S: AsRef<str>>(addresses: &[S]) -> String {
    addresses
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(defaults::ADDRESS_SEPARATOR)
        .trim()
        .to_string()
}
