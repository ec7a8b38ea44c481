//! Domain DTOs for the SVGL API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch drift between the two crates.
//!
//! Union-shaped wire fields are two-variant enums serialized untagged, so a
//! caller matches on the shape instead of probing JSON. Required fields are
//! the only shape check performed: fields the types do not name are kept in
//! `extra` and written back out on serialization.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Light and dark variants of one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePair {
    pub light: String,
    pub dark: String,
}

/// An asset location: one URL for every theme, or a light/dark pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Route {
    Url(String),
    Themed(ThemePair),
}

impl Route {
    /// URL to use on a light background.
    pub fn light(&self) -> &str {
        match self {
            Route::Url(url) => url,
            Route::Themed(pair) => &pair.light,
        }
    }

    /// URL to use on a dark background.
    pub fn dark(&self) -> &str {
        match self {
            Route::Url(url) => url,
            Route::Themed(pair) => &pair.dark,
        }
    }
}

/// One category label, or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryField {
    Single(String),
    Multiple(Vec<String>),
}

impl CategoryField {
    pub fn labels(&self) -> &[String] {
        match self {
            CategoryField::Single(label) => std::slice::from_ref(label),
            CategoryField::Multiple(labels) => labels,
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels().iter().any(|l| l == label)
    }
}

/// A single logo entry returned by the API.
///
/// Optional fields are `None` when absent and `Some(None)` when sent as an
/// explicit `null`, so both forms serialize back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgRecord {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Option<Option<u64>>,
    pub title: String,
    pub category: CategoryField,
    pub route: Route,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub wordmark: Option<Option<Route>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub brand_url: Option<Option<String>>,
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SvgRecord {
    pub fn id(&self) -> Option<u64> {
        self.id.flatten()
    }

    pub fn wordmark(&self) -> Option<&Route> {
        self.wordmark.as_ref().and_then(Option::as_ref)
    }

    pub fn brand_url(&self) -> Option<&str> {
        self.brand_url.as_ref().and_then(|url| url.as_deref())
    }
}

/// Marks a field that appeared in the input, `null` included.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Number of entries the server reports for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
