//! Core network types for interface address representation.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// Address family of a discovered address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpFamily {
    /// IPv4 (4-byte) addresses.
    V4,
    /// IPv6 (16-byte) addresses.
    V6,
}

impl IpFamily {
    /// Both families, IPv4 first.
    pub const ALL: [Self; 2] = [Self::V4, Self::V6];

    /// Classifies an address.
    ///
    /// An address is IPv4 when it can be represented in 4-byte form, which
    /// includes IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`).
    #[must_use]
    pub const fn of(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => Self::V4,
            IpAddr::V6(v6) => {
                if v6.to_ipv4_mapped().is_some() {
                    Self::V4
                } else {
                    Self::V6
                }
            }
        }
    }

    /// Parses a textual address and returns its family.
    ///
    /// Returns `None` when the text is not a valid IP address.
    #[must_use]
    pub fn classify(text: &str) -> Option<Self> {
        text.trim().parse::<IpAddr>().ok().map(Self::of)
    }
}

impl fmt::Display for IpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// A single address bound to a local network interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceAddress {
    /// The system name of the interface (e.g., "eth0", "en0", "lo").
    pub name: String,
    /// The bound address.
    pub ip: IpAddr,
    /// Whether the OS flags this address as loopback.
    pub is_loopback: bool,
}

impl InterfaceAddress {
    /// Creates a new interface address.
    #[must_use]
    pub fn new(name: impl Into<String>, ip: IpAddr, is_loopback: bool) -> Self {
        Self {
            name: name.into(),
            ip,
            is_loopback,
        }
    }

    /// Creates an address, deriving the loopback flag from the IP itself.
    #[must_use]
    pub fn from_ip(name: impl Into<String>, ip: IpAddr) -> Self {
        Self::new(name, ip, ip.is_loopback())
    }

    /// Returns the family this address is classified under.
    #[must_use]
    pub const fn family(&self) -> IpFamily {
        IpFamily::of(self.ip)
    }

    /// Returns the textual form of the address.
    ///
    /// IPv4-mapped IPv6 addresses are rendered in dotted IPv4 form so the
    /// text agrees with [`Self::family`].
    #[must_use]
    pub fn to_text(&self) -> String {
        match self.ip {
            IpAddr::V6(v6) => v6
                .to_ipv4_mapped()
                .map_or_else(|| v6.to_string(), |v4| v4.to_string()),
            IpAddr::V4(v4) => v4.to_string(),
        }
    }
}
