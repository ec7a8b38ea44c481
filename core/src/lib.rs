//! Async client for the SVGL logo API (`https://api.svgl.app`).
//!
//! # Overview
//! Four read-only operations: list every SVG (optionally limited), list the
//! SVGs of one category, list categories with their totals, and search by
//! title. Non-2xx responses become `ApiError::Http`, empty required inputs
//! become `ApiError::Validation` without touching the network.
//!
//! # Design
//! - `SvglClient` is stateless: it holds only `base_url` and splits each
//!   operation into `build_*` (produces request) and `parse_*` (consumes
//!   response), so the core is deterministic and host-does-IO friendly.
//! - `Transport` executes requests; `ReqwestTransport` is the default.
//! - `Svgl` composes the two into async operations.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.
//!
//! ```no_run
//! # async fn run() -> Result<(), svgl_core::ApiError> {
//! let svgl = svgl_core::Svgl::new()?;
//! let logos = svgl.search("discord").await?;
//! println!("{} matches", logos.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::Svgl;
pub use client::{ClientConfig, SvglClient, DEFAULT_BASE_URL};
pub use error::{ApiError, BoxError, ValidationError};
pub use http::{HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{CategoryField, CategorySummary, Route, SvgRecord, ThemePair};
