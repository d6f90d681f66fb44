//! reqwest-backed lookup client.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// [`HttpClient`] backed by a shared `reqwest::Client`.
///
/// No client-wide timeout is set; each lookup carries its own through
/// [`HttpRequest::timeout`].
///
/// # Example
///
/// ```no_run
/// use myip::public::{HttpClient, HttpRequest, ReqwestClient};
/// use std::time::Duration;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://api.ipify.org")?;
/// let request = HttpRequest::get(url).with_timeout(Duration::from_secs(5));
/// let response = client.request(request).await?;
/// println!("{}", response.body_text().unwrap_or_default());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.get(req.url.as_str()).headers(req.headers);
        if let Some(timeout) = req.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(map_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_error)?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

fn map_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}
