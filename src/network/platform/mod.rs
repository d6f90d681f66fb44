//! Platform interface enumeration.
//!
//! The [`AddressFetcher`](super::AddressFetcher) implementation here is backed
//! by the `if-addrs` crate, which wraps `getifaddrs` on Unix and
//! `GetAdaptersAddresses` on Windows.

mod system;

pub use system::SystemFetcher;

/// The fetcher used by the binary on every supported platform.
pub type PlatformFetcher = SystemFetcher;
