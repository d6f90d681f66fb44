//! Plain-text GET lookups and the client seam they go through.

use std::time::Duration;

use super::HttpError;

/// A GET request for a lookup endpoint.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Endpoint to query
    pub url: url::Url,
    /// Extra headers, sent as given
    pub headers: http::HeaderMap,
    /// Upper bound for the whole exchange, body included
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Creates a GET request with no headers and no timeout.
    #[must_use]
    pub fn get(url: url::Url) -> Self {
        Self {
            url,
            headers: http::HeaderMap::new(),
            timeout: None,
        }
    }

    /// Appends a header value; earlier values for the same name are kept.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Bounds the request by `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Status and buffered body of a finished lookup.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Raw body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// True for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The body as UTF-8, or `None` if it is not valid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Sends lookup requests.
///
/// The resolver is generic over this trait so tests can answer from a table
/// instead of the network.
///
/// # Example
///
/// ```ignore
/// use myip::public::{HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// struct Fixed(&'static str);
///
/// impl HttpClient for Fixed {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(http::StatusCode::OK, self.0.as_bytes().to_vec()))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends `req` and buffers the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] when the exchange fails,
    /// [`HttpError::Timeout`] when it exceeds `req.timeout`, and
    /// [`HttpError::InvalidUrl`] when the request cannot be built.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
