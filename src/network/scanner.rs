//! Local interface scanning.
//!
//! A scan enumerates addresses on a blocking worker and streams each accepted
//! address into one channel per family. The caller merges both channels and
//! finishes once the worker has closed them.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::UnboundedReceiverStream;

use super::filter::AddressFilter;
use super::{AddressFetcher, IpFamily};
use crate::result::AddressResult;

/// Scans local interfaces through an [`AddressFetcher`].
///
/// Cheap to clone; clones share the fetcher.
#[derive(Debug)]
pub struct LocalScanner<F> {
    fetcher: Arc<F>,
}

impl<F> Clone for LocalScanner<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}

impl<F: AddressFetcher + 'static> LocalScanner<F> {
    /// Creates a scanner over the given fetcher.
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
        }
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Scans for addresses accepted by `filter`.
    ///
    /// Never fails: enumeration errors are logged and produce an empty result.
    /// Addresses keep the OS enumeration order within each family, and
    /// duplicates are preserved.
    pub async fn scan<A: AddressFilter + 'static>(&self, filter: A) -> AddressResult {
        let (v4_tx, v4_rx) = mpsc::unbounded_channel();
        let (v6_tx, v6_rx) = mpsc::unbounded_channel();

        let fetcher = Arc::clone(&self.fetcher);
        let producer = tokio::task::spawn_blocking(move || {
            produce(fetcher.as_ref(), &filter, v4_tx, v6_tx);
        });

        let result = merge_families(v4_rx, v6_rx).await;

        if let Err(e) = producer.await {
            tracing::warn!("Interface scan worker failed: {e}");
        }

        result
    }
}

/// Enumerates, filters and classifies addresses, sending each to its family channel.
///
/// Both senders are dropped on return, which closes the channels.
fn produce<F, A>(
    fetcher: &F,
    filter: &A,
    v4_tx: UnboundedSender<String>,
    v6_tx: UnboundedSender<String>,
) where
    F: AddressFetcher + ?Sized,
    A: AddressFilter + ?Sized,
{
    let addresses = match fetcher.fetch() {
        Ok(addresses) => addresses,
        Err(e) => {
            tracing::debug!("Interface enumeration failed, scan yields nothing: {e}");
            return;
        }
    };

    for address in addresses.iter().filter(|a| filter.matches(a)) {
        let tx = match address.family() {
            IpFamily::V4 => &v4_tx,
            IpFamily::V6 => &v6_tx,
        };
        tracing::trace!(interface = %address.name, family = %address.family(), "{}", address.to_text());

        if tx.send(address.to_text()).is_err() {
            // Receiver dropped; nobody is waiting for the rest.
            return;
        }
    }
}

/// Drains both family channels until each has been closed by its sender.
///
/// Values are accepted from whichever channel is ready first; order within a
/// family is preserved.
pub(crate) async fn merge_families(
    v4_rx: UnboundedReceiver<String>,
    v6_rx: UnboundedReceiver<String>,
) -> AddressResult {
    let v4 = UnboundedReceiverStream::new(v4_rx).map(|addr| (IpFamily::V4, addr));
    let v6 = UnboundedReceiverStream::new(v6_rx).map(|addr| (IpFamily::V6, addr));
    let mut merged = std::pin::pin!(v4.merge(v6));

    let mut ipv4 = Vec::new();
    let mut ipv6 = Vec::new();
    while let Some((family, addr)) = merged.next().await {
        match family {
            IpFamily::V4 => ipv4.push(addr),
            IpFamily::V6 => ipv6.push(addr),
        }
    }

    AddressResult::from_lists(&ipv4, &ipv6)
}
