//! Runs the requested categories concurrently and collects a [`Report`].

use super::{Category, QueryError, QueryRequest, Report};
use crate::config::defaults;
use crate::network::filter::{FilterChain, LoopbackFilter, PrefixFilter};
use crate::network::{AddressFetcher, LocalScanner};
use crate::public::{HttpClient, PublicResolver};
use crate::result::AddressResult;

/// Filter for the ethernet category: `e*` interfaces, loopback excluded.
#[must_use]
pub fn ethernet_filter() -> FilterChain {
    FilterChain::new()
        .include(PrefixFilter::new(defaults::ETHERNET_PREFIXES))
        .exclude(LoopbackFilter)
}

/// Filter for the loopback category: `l*` interfaces, loopback included.
#[must_use]
pub fn loopback_filter() -> FilterChain {
    FilterChain::new().include(PrefixFilter::new(defaults::LOOPBACK_PREFIXES))
}

/// Dispatches each requested category to the scanner or the resolver.
///
/// Categories are independent: an empty result in one never affects the
/// others, and the report is assembled in display order regardless of which
/// lookup finishes first.
#[derive(Debug)]
pub struct Aggregator<F, C> {
    scanner: LocalScanner<F>,
    resolver: PublicResolver<C>,
}

impl<F, C> Aggregator<F, C>
where
    F: AddressFetcher + 'static,
    C: HttpClient,
{
    /// Creates an aggregator from its two lookup components.
    #[must_use]
    pub const fn new(scanner: LocalScanner<F>, resolver: PublicResolver<C>) -> Self {
        Self { scanner, resolver }
    }

    /// Returns the public address resolver.
    #[must_use]
    pub const fn resolver(&self) -> &PublicResolver<C> {
        &self.resolver
    }

    /// Runs every requested category concurrently and waits for all of them.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NothingRequested`] if `request` selects no
    /// category. Lookup failures are never errors; they yield empty results.
    pub async fn run(&self, request: QueryRequest) -> Result<Report, QueryError> {
        if request.is_empty() {
            return Err(QueryError::NothingRequested);
        }
        tracing::debug!(%request, "Running address query");

        let run_if = |category: Category| async move {
            if request.includes(category) {
                Some(self.query(category).await)
            } else {
                None
            }
        };

        let (ethernet, loopback, public) = tokio::join!(
            run_if(Category::Ethernet),
            run_if(Category::Loopback),
            run_if(Category::Public)
        );

        let mut report = Report::default();
        for (category, result) in [
            (Category::Ethernet, ethernet),
            (Category::Loopback, loopback),
            (Category::Public, public),
        ] {
            if let Some(result) = result {
                report.set(category, result);
            }
        }
        Ok(report)
    }

    /// Queries a single category.
    pub async fn query(&self, category: Category) -> AddressResult {
        let result = match category {
            Category::Ethernet => self.scanner.scan(ethernet_filter()).await,
            Category::Loopback => self.scanner.scan(loopback_filter()).await,
            Category::Public => self.resolver.resolve().await,
        };

        if result.is_empty() {
            tracing::debug!(%category, "No addresses found");
        } else {
            tracing::debug!(%category, ipv4 = %result.ipv4, ipv6 = %result.ipv6, "Query finished");
        }
        result
    }
}
