//! Address fetching trait and error types.

use super::InterfaceAddress;
use thiserror::Error;

/// Error type for interface enumeration.
///
/// The scanner treats it as "no addresses".
#[derive(Debug, Error)]
pub enum FetchError {
    /// The OS call listing interfaces failed.
    #[error("Failed to enumerate interfaces: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for enumerating the addresses bound to local network interfaces.
///
/// # Design
///
/// - Enables dependency injection for testing with mock implementations
/// - The production implementation lives in [`super::platform`]
///
/// # Example
///
/// ```
/// use myip::network::{AddressFetcher, FetchError, InterfaceAddress};
///
/// struct StaticFetcher(Vec<InterfaceAddress>);
///
/// impl AddressFetcher for StaticFetcher {
///     fn fetch(&self) -> Result<Vec<InterfaceAddress>, FetchError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let fetcher = StaticFetcher(vec![InterfaceAddress::from_ip(
///     "eth0",
///     "192.168.1.10".parse().unwrap(),
/// )]);
/// assert_eq!(fetcher.fetch().unwrap().len(), 1);
/// ```
pub trait AddressFetcher: Send + Sync {
    /// Fetches every address of every interface on the system.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the interface list (or the address list of
    /// any interface) cannot be read. Implementations fail the whole call
    /// rather than return a partial list.
    ///
    /// # Implementation Notes
    ///
    /// - Implementations should return ALL addresses; filtering is done by the caller
    /// - Order should follow the OS interface listing
    /// - This is a blocking call; the scanner runs it off the async executor
    fn fetch(&self) -> Result<Vec<InterfaceAddress>, FetchError>;
}
