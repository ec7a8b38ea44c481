//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network; a `Transport` (or any other host) executes the
//! actual I/O.
//!
//! Every request the SVGL API accepts is a bare GET, so a request is just its
//! absolute URL.

/// A GET request described as plain data.
///
/// Built by `SvglClient::build_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`, then passed to
/// `SvglClient::parse_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Reason phrase reported alongside the status, e.g. `Not Found`.
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
