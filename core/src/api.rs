//! Async facade over `SvglClient` and a `Transport`.
//!
//! Each operation validates and builds its request, executes it once and
//! parses the response. There is no retry and no caching; concurrent calls
//! share nothing but the immutable client and the transport.

use tracing::debug;

use crate::client::{ClientConfig, SvglClient};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{CategorySummary, SvgRecord};

/// SVGL API client performing real requests through `T`.
#[derive(Debug, Clone)]
pub struct Svgl<T> {
    client: SvglClient,
    transport: T,
}

impl Svgl<ReqwestTransport> {
    /// Client for the public API over a default `reqwest` transport.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_config(&ClientConfig::default())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new().map_err(ApiError::transport)?;
        Ok(Self::with_transport(SvglClient::with_config(config), transport))
    }
}

impl<T: Transport> Svgl<T> {
    pub fn with_transport(client: SvglClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &SvglClient {
        &self.client
    }

    /// Get all SVGs, or at most `limit` of them.
    pub async fn list_all(&self, limit: Option<u32>) -> Result<Vec<SvgRecord>, ApiError> {
        let request = self.client.build_list_all(limit)?;
        let response = self.send(request).await?;
        self.client.parse_list_all(response)
    }

    /// Get the SVGs in `category`. Unknown categories fail with a 404
    /// `ApiError::Http`.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<SvgRecord>, ApiError> {
        let request = self.client.build_list_by_category(category)?;
        let response = self.send(request).await?;
        self.client.parse_list_by_category(response)
    }

    /// Get every category with its entry count.
    pub async fn list_categories(&self) -> Result<Vec<CategorySummary>, ApiError> {
        let request = self.client.build_list_categories()?;
        let response = self.send(request).await?;
        self.client.parse_list_categories(response)
    }

    /// Search SVGs by title. The server may report no match as a 404, which
    /// surfaces as `ApiError::Http`; see `search_or_empty`.
    pub async fn search(&self, query: &str) -> Result<Vec<SvgRecord>, ApiError> {
        let request = self.client.build_search(query)?;
        let response = self.send(request).await?;
        self.client.parse_search(response)
    }

    /// Like `search`, but a 404 yields an empty result.
    pub async fn search_or_empty(&self, query: &str) -> Result<Vec<SvgRecord>, ApiError> {
        match self.search(query).await {
            Err(err) if err.is_not_found() => Ok(Vec::new()),
            other => other,
        }
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(url = %request.url, "GET");
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(ApiError::Transport)?;
        debug!(status = response.status, "response");
        Ok(response)
    }
}
