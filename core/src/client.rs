//! Stateless HTTP request builder and response parser for the SVGL API.
//!
//! # Design
//! `SvglClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Input validation happens in `build_*`, so an invalid call never yields a
//! request to execute.

use serde::de::DeserializeOwned;
use tracing::warn;
use url::Url;

use crate::error::{ApiError, ValidationError};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CategorySummary, SvgRecord};

/// Origin of the public SVGL API.
pub const DEFAULT_BASE_URL: &str = "https://api.svgl.app";

/// API client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Synchronous, stateless client for the SVGL API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct SvglClient {
    base_url: String,
}

impl SvglClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn with_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All entries, or the first `limit` of them. A limit of zero sends no
    /// `limit` parameter.
    pub fn build_list_all(&self, limit: Option<u32>) -> Result<HttpRequest, ApiError> {
        match limit {
            Some(n) if n > 0 => {
                let limit = n.to_string();
                self.request("", &[("limit", limit.as_str())])
            }
            _ => self.request("", &[]),
        }
    }

    /// Entries in one category. Leading and trailing `/` are stripped from
    /// the label; the empty check runs on the label as given.
    pub fn build_list_by_category(&self, category: &str) -> Result<HttpRequest, ApiError> {
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory.into());
        }
        let sanitized = category.trim_matches('/');
        self.request(&format!("/category/{sanitized}"), &[])
    }

    pub fn build_list_categories(&self) -> Result<HttpRequest, ApiError> {
        self.request("/categories", &[])
    }

    pub fn build_search(&self, query: &str) -> Result<HttpRequest, ApiError> {
        if query.is_empty() {
            return Err(ValidationError::EmptySearchQuery.into());
        }
        self.request("", &[("search", query)])
    }

    pub fn parse_list_all(&self, response: HttpResponse) -> Result<Vec<SvgRecord>, ApiError> {
        parse_json(response)
    }

    pub fn parse_list_by_category(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<SvgRecord>, ApiError> {
        parse_json(response)
    }

    pub fn parse_list_categories(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<CategorySummary>, ApiError> {
        parse_json(response)
    }

    pub fn parse_search(&self, response: HttpResponse) -> Result<Vec<SvgRecord>, ApiError> {
        parse_json(response)
    }

    fn request(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<HttpRequest, ApiError> {
        let mut url = Url::parse(&format!("{}{endpoint}", self.base_url))?;
        if !params.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        Ok(HttpRequest { url: url.into() })
    }
}

impl Default for SvglClient {
    fn default() -> Self {
        Self::with_config(&ClientConfig::default())
    }
}

/// Map any non-2xx status to `ApiError::Http`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    warn!(status = response.status, status_text = %response.status_text, "request failed");
    Err(ApiError::Http {
        status: response.status,
        status_text: response.status_text.clone(),
    })
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    Ok(serde_json::from_str(&response.body)?)
}
