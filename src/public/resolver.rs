//! Public address resolution with per-family fallback.

use std::time::Duration;

use http::HeaderValue;
use http::header::ACCEPT;
use url::Url;

use super::{FallbackEndpoints, HttpClient, HttpRequest, LookupError};
use crate::config::defaults;
use crate::network::IpFamily;
use crate::result::AddressResult;

/// Looks up the address this machine is seen as by external services.
///
/// Each family walks its own [`FallbackEndpoints`] once, front to back, and
/// both families run concurrently. There are no retries beyond the list and
/// no backoff; a family whose endpoints all fail resolves to an empty string.
#[derive(Debug)]
pub struct PublicResolver<C> {
    client: C,
    ipv4: FallbackEndpoints,
    ipv6: FallbackEndpoints,
    timeout: Duration,
}

impl<C: HttpClient> PublicResolver<C> {
    /// Creates a resolver using the default per-request timeout.
    #[must_use]
    pub const fn new(client: C, ipv4: FallbackEndpoints, ipv6: FallbackEndpoints) -> Self {
        Self {
            client,
            ipv4,
            ipv6,
            timeout: defaults::timeout(),
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns a reference to the HTTP client.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Resolves both families concurrently.
    pub async fn resolve(&self) -> AddressResult {
        let (ipv4, ipv6) = tokio::join!(
            self.resolve_family(&self.ipv4),
            self.resolve_family(&self.ipv6)
        );
        AddressResult::new(ipv4, ipv6)
    }

    /// Walks one endpoint list and returns the first trimmed body, or an empty string.
    pub async fn resolve_family(&self, endpoints: &FallbackEndpoints) -> String {
        let family = endpoints.family();

        for url in endpoints.urls() {
            match self.lookup(url).await {
                Ok(address) => {
                    if IpFamily::classify(&address) != Some(family) {
                        tracing::debug!(%family, %url, "Unexpected body: {address}");
                    }
                    tracing::debug!(%family, %url, "Public address: {address}");
                    return address;
                }
                Err(e) => tracing::debug!(%family, %url, "Lookup failed: {e}"),
            }
        }

        tracing::debug!(%family, "All lookup endpoints failed");
        String::new()
    }

    /// Performs one GET and validates the response.
    async fn lookup(&self, url: &Url) -> Result<String, LookupError> {
        let request = HttpRequest::get(url.clone())
            .with_header(ACCEPT, HeaderValue::from_static("text/plain"))
            .with_timeout(self.timeout);

        let response = self.client.request(request).await?;
        if !response.is_success() {
            return Err(LookupError::Status(response.status));
        }

        let body = response
            .body_text()
            .ok_or(LookupError::InvalidBody)?
            .trim();
        if body.is_empty() {
            return Err(LookupError::EmptyBody);
        }

        Ok(body.to_string())
    }
}
