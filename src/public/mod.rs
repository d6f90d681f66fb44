//! Public address lookup through external "what is my IP" services.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Ordered lookup services per family ([`FallbackEndpoints`])
//! - Resolving both families with fallback ([`PublicResolver`])

mod client;
mod endpoints;
mod error;
mod http;
mod resolver;


pub use client::ReqwestClient;
pub use endpoints::FallbackEndpoints;
pub use error::{HttpError, LookupError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use resolver::PublicResolver;
