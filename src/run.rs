//! Application execution logic.
//!
//! Wires the platform fetcher and the reqwest client into an
//! [`Aggregator`], runs the requested categories and renders the output.

use thiserror::Error;

use myip::config::ValidatedConfig;
use myip::network::LocalScanner;
use myip::network::platform::PlatformFetcher;
use myip::public::{PublicResolver, ReqwestClient};
use myip::report::{Aggregator, QueryError, Report};

/// Type alias for the application's aggregator.
type AppAggregator = Aggregator<PlatformFetcher, ReqwestClient>;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The request could not be run.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The report could not be rendered as JSON.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Runs the configured query and returns the text to print.
///
/// # Errors
///
/// Returns an error if the request selects no category or JSON rendering
/// fails. Lookup failures are not errors; they only drop output lines.
///
/// # Coverage Note
///
/// Excluded from coverage because it touches real interfaces and the network.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: &ValidatedConfig) -> Result<String, RunError> {
    let aggregator = create_aggregator(config);
    let report = aggregator.run(config.request).await?;
    render(&report, config.json)
}

/// Creates the aggregator from configuration.
fn create_aggregator(config: &ValidatedConfig) -> AppAggregator {
    let scanner = LocalScanner::new(PlatformFetcher::default());
    let resolver = PublicResolver::new(
        ReqwestClient::new(),
        config.ipv4_endpoints.clone(),
        config.ipv6_endpoints.clone(),
    )
    .with_timeout(config.timeout);

    Aggregator::new(scanner, resolver)
}

/// Renders a report as label lines or as JSON.
fn render(report: &Report, json: bool) -> Result<String, RunError> {
    if json {
        Ok(format!("{}\n", report.render_json()?))
    } else {
        Ok(report.render_text())
    }
}
