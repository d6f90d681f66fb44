//! Validated configuration built from CLI arguments.
//!
//! All validation is performed during construction.

use std::fmt;
use std::time::Duration;

use crate::network::IpFamily;
use crate::public::FallbackEndpoints;
use crate::report::QueryRequest;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};

/// Fully validated configuration ready for use by the application.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Categories to query; never empty
    pub request: QueryRequest,

    /// Per-request timeout for public lookups
    pub timeout: Duration,

    /// IPv4 lookup services in fallback order
    pub ipv4_endpoints: FallbackEndpoints,

    /// IPv6 lookup services in fallback order
    pub ipv6_endpoints: FallbackEndpoints,

    /// Print JSON instead of label lines
    pub json: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ request: {}, timeout: {}s, endpoints: {}+{}, json: {} }}",
            self.request,
            self.timeout.as_secs(),
            self.ipv4_endpoints.urls().len(),
            self.ipv6_endpoints.urls().len(),
            self.json,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The timeout is zero or above [`defaults::MAX_TIMEOUT_SECS`]
    /// - A built-in endpoint URL fails to parse
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let request = QueryRequest::from_flags(cli.all, cli.ethernet, cli.loopback, cli.public);
        let timeout = Self::resolve_timeout(cli)?;
        let ipv4_endpoints = Self::resolve_endpoints(IpFamily::V4, &defaults::IPV4_ENDPOINTS)?;
        let ipv6_endpoints = Self::resolve_endpoints(IpFamily::V6, &defaults::IPV6_ENDPOINTS)?;

        Ok(Self {
            request,
            timeout,
            ipv4_endpoints,
            ipv6_endpoints,
            json: cli.json,
            verbose: cli.verbose,
        })
    }

    fn resolve_timeout(cli: &Cli) -> Result<Duration, ConfigError> {
        let secs = cli.timeout.unwrap_or(defaults::TIMEOUT_SECS);

        if secs == 0 {
            return Err(ConfigError::InvalidDuration {
                field: field::TIMEOUT,
                reason: "must be greater than zero".to_string(),
            });
        }
        if secs > defaults::MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidDuration {
                field: field::TIMEOUT,
                reason: format!("must be at most {}s", defaults::MAX_TIMEOUT_SECS),
            });
        }

        Ok(Duration::from_secs(secs))
    }

    fn resolve_endpoints(family: IpFamily, urls: &[&str]) -> Result<FallbackEndpoints, ConfigError> {
        FallbackEndpoints::parse(family, urls.iter().copied())
            .map_err(|(url, e)| ConfigError::InvalidUrl {
                url,
                reason: e.to_string(),
            })?
            .ok_or(ConfigError::NoEndpoints { family })
    }
}
