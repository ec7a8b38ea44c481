//! Async transports that execute `HttpRequest` values.
//!
//! `Transport` is the seam between the pure build/parse core and the network.
//! `ReqwestTransport` is the production implementation; tests substitute
//! their own.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BoxError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one GET request and reports the response as plain data.
///
/// A non-2xx status is a successful execution; only failures to obtain a
/// response at all are errors. The body of a non-2xx response is best
/// effort and may be empty.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        (**self).execute(request).await
    }
}

/// `Transport` backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("svgl-core/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http_client))
    }

    /// Use a pre-configured client, e.g. one with a request timeout.
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let response = self.http_client.get(&request.url).send().await?;
        let status = response.status();
        let status_text = reason_phrase(&response);
        let body = if status.is_success() {
            response.text().await?
        } else {
            response.text().await.unwrap_or_default()
        };
        Ok(HttpResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

/// Reason phrase as sent on the wire. hyper only records it when it differs
/// from the canonical phrase for the status.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}
