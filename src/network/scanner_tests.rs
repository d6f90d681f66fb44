//! Tests for the local interface scanner.

use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::mpsc;

use super::filter::{FilterChain, LoopbackFilter, PrefixFilter};
use super::scanner::{LocalScanner, merge_families};
use super::{AddressFetcher, FetchError, InterfaceAddress};
use crate::result::AddressResult;

/// Mock fetcher returning a fixed listing, or failing.
#[derive(Debug)]
struct MockFetcher {
    addresses: Option<Vec<InterfaceAddress>>,
    calls: AtomicUsize,
}

impl MockFetcher {
    fn returning(addresses: Vec<InterfaceAddress>) -> Self {
        Self {
            addresses: Some(addresses),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            addresses: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AddressFetcher for MockFetcher {
    fn fetch(&self) -> Result<Vec<InterfaceAddress>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.addresses
            .clone()
            .ok_or_else(|| FetchError::Io(std::io::Error::other("getifaddrs failed")))
    }
}

fn addr(name: &str, ip: &str) -> InterfaceAddress {
    InterfaceAddress::from_ip(name, ip.parse().unwrap())
}

fn ethernet() -> FilterChain {
    FilterChain::new()
        .include(PrefixFilter::new(['e']))
        .exclude(LoopbackFilter)
}

fn loopback() -> FilterChain {
    FilterChain::new().include(PrefixFilter::new(['l']))
}

fn typical_machine() -> Vec<InterfaceAddress> {
    vec![
        addr("lo", "127.0.0.1"),
        addr("lo", "::1"),
        addr("eth0", "192.168.1.10"),
        addr("eth0", "fe80::a00:27ff:fe4e:66a1"),
        addr("wlan0", "192.168.1.42"),
        addr("en1", "10.0.0.7"),
        addr("eth0", "::ffff:172.16.0.5"),
    ]
}

mod scan {
    use super::*;

    #[tokio::test]
    async fn single_ethernet_ipv4_address() {
        let scanner = LocalScanner::new(MockFetcher::returning(vec![
            addr("lo", "127.0.0.1"),
            addr("eth0", "192.168.1.10"),
        ]));

        let result = scanner.scan(ethernet()).await;

        assert_eq!(result, AddressResult::new("192.168.1.10", ""));
    }

    #[tokio::test]
    async fn ethernet_scan_joins_in_enumeration_order() {
        let scanner = LocalScanner::new(MockFetcher::returning(typical_machine()));

        let result = scanner.scan(ethernet()).await;

        assert_eq!(result.ipv4, "192.168.1.10, 10.0.0.7, 172.16.0.5");
        assert_eq!(result.ipv6, "fe80::a00:27ff:fe4e:66a1");
    }

    #[tokio::test]
    async fn loopback_scan_keeps_loopback_addresses() {
        let scanner = LocalScanner::new(MockFetcher::returning(typical_machine()));

        let result = scanner.scan(loopback()).await;

        assert_eq!(result, AddressResult::new("127.0.0.1", "::1"));
    }

    #[tokio::test]
    async fn loopback_addresses_on_ethernet_named_interface_are_dropped() {
        let scanner = LocalScanner::new(MockFetcher::returning(vec![
            addr("eth0", "127.0.0.2"),
            addr("eth0", "10.1.1.1"),
        ]));

        let result = scanner.scan(ethernet()).await;

        assert_eq!(result.ipv4, "10.1.1.1");
    }

    #[tokio::test]
    async fn no_matching_interface_yields_empty_result() {
        let scanner = LocalScanner::new(MockFetcher::returning(vec![
            addr("wlan0", "192.168.1.42"),
            addr("docker0", "172.17.0.1"),
        ]));

        assert!(scanner.scan(loopback()).await.is_empty());
        assert!(scanner.scan(ethernet()).await.is_empty());
    }

    #[tokio::test]
    async fn enumeration_failure_degrades_to_empty() {
        let scanner = LocalScanner::new(MockFetcher::failing());

        let result = scanner.scan(ethernet()).await;

        assert!(result.is_empty());
        assert_eq!(scanner.fetcher().calls(), 1);
    }

    #[tokio::test]
    async fn duplicates_are_preserved() {
        let scanner = LocalScanner::new(MockFetcher::returning(vec![
            addr("eth0", "10.0.0.1"),
            addr("eth1", "10.0.0.1"),
        ]));

        let result = scanner.scan(ethernet()).await;

        assert_eq!(result.ipv4, "10.0.0.1, 10.0.0.1");
    }

    #[tokio::test]
    async fn every_scan_enumerates_afresh() {
        let scanner = LocalScanner::new(MockFetcher::returning(typical_machine()));
        let clone = scanner.clone();

        let _ = scanner.scan(ethernet()).await;
        let _ = clone.scan(loopback()).await;

        assert_eq!(scanner.fetcher().calls(), 2);
    }
}

mod merge {
    use super::*;

    #[tokio::test]
    async fn finishes_when_both_channels_close() {
        let (v4_tx, v4_rx) = mpsc::unbounded_channel();
        let (v6_tx, v6_rx) = mpsc::unbounded_channel();

        v4_tx.send("10.0.0.1".to_string()).unwrap();
        v6_tx.send("fe80::1".to_string()).unwrap();
        v4_tx.send("10.0.0.2".to_string()).unwrap();
        drop(v4_tx);
        drop(v6_tx);

        let result = merge_families(v4_rx, v6_rx).await;

        assert_eq!(result, AddressResult::new("10.0.0.1, 10.0.0.2", "fe80::1"));
    }

    #[tokio::test]
    async fn waits_for_the_slower_family() {
        let (v4_tx, v4_rx) = mpsc::unbounded_channel();
        let (v6_tx, v6_rx) = mpsc::unbounded_channel::<String>();

        v4_tx.send("10.0.0.1".to_string()).unwrap();
        drop(v4_tx);

        let late = tokio::spawn(async move {
            tokio::task::yield_now().await;
            v6_tx.send("2001:db8::1".to_string()).unwrap();
        });

        let result = merge_families(v4_rx, v6_rx).await;
        late.await.unwrap();

        assert_eq!(result, AddressResult::new("10.0.0.1", "2001:db8::1"));
    }

    #[tokio::test]
    async fn closed_empty_channels_yield_empty_result() {
        let (v4_tx, v4_rx) = mpsc::unbounded_channel::<String>();
        let (v6_tx, v6_rx) = mpsc::unbounded_channel::<String>();
        drop(v4_tx);
        drop(v6_tx);

        assert!(merge_families(v4_rx, v6_rx).await.is_empty());
    }
}
