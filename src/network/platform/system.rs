//! Interface enumeration through `if_addrs::get_if_addrs`.

use crate::network::{AddressFetcher, FetchError, InterfaceAddress};

/// Production implementation of [`AddressFetcher`].
///
/// Lists every address of every interface, in the order the OS reports them.
///
/// # Example
///
/// ```no_run
/// use myip::network::{AddressFetcher, platform::SystemFetcher};
///
/// let fetcher = SystemFetcher::new();
/// for address in fetcher.fetch().unwrap_or_default() {
///     println!("{}: {}", address.name, address.to_text());
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFetcher {
    _private: (),
}

impl SystemFetcher {
    /// Creates a new system fetcher.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AddressFetcher for SystemFetcher {
    fn fetch(&self) -> Result<Vec<InterfaceAddress>, FetchError> {
        let interfaces = if_addrs::get_if_addrs()?;

        Ok(interfaces
            .into_iter()
            .map(|iface| {
                let ip = iface.ip();
                let is_loopback = iface.is_loopback();
                InterfaceAddress::new(iface.name, ip, is_loopback)
            })
            .collect())
    }
}
