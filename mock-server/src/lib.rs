use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// One label or several, as the public API sends them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Labels {
    One(String),
    Many(Vec<String>),
}

impl Labels {
    fn iter(&self) -> impl Iterator<Item = &str> {
        let labels: &[String] = match self {
            Labels::One(label) => std::slice::from_ref(label),
            Labels::Many(labels) => labels,
        };
        labels.iter().map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Asset {
    Single(String),
    Themed { light: String, dark: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Svg {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub category: Labels,
    pub route: Asset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordmark: Option<Asset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_url: Option<String>,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: usize,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
    pub search: Option<String>,
}

pub type Db = Arc<Vec<Svg>>;

fn asset(url: &str) -> Asset {
    Asset::Single(url.to_string())
}

fn themed(light: &str, dark: &str) -> Asset {
    Asset::Themed {
        light: light.to_string(),
        dark: dark.to_string(),
    }
}

/// Fixed catalogue served by `app()`.
pub fn catalogue() -> Vec<Svg> {
    vec![
        Svg {
            id: Some(0),
            title: "Discord".to_string(),
            category: Labels::One("Social".to_string()),
            route: asset("https://svgl.app/library/discord.svg"),
            wordmark: None,
            brand_url: Some("https://discord.com/branding".to_string()),
            url: "https://discord.com/".to_string(),
        },
        Svg {
            id: Some(1),
            title: "Rust".to_string(),
            category: Labels::Many(vec!["Language".to_string(), "Software".to_string()]),
            route: themed(
                "https://svgl.app/library/rust_light.svg",
                "https://svgl.app/library/rust_dark.svg",
            ),
            wordmark: None,
            brand_url: None,
            url: "https://www.rust-lang.org/".to_string(),
        },
        Svg {
            id: Some(2),
            title: "Visual Studio Code".to_string(),
            category: Labels::One("Software".to_string()),
            route: asset("https://svgl.app/library/vscode.svg"),
            wordmark: None,
            brand_url: None,
            url: "https://code.visualstudio.com/".to_string(),
        },
        Svg {
            id: Some(3),
            title: "React".to_string(),
            category: Labels::Many(vec!["Library".to_string(), "Framework".to_string()]),
            route: themed(
                "https://svgl.app/library/react_light.svg",
                "https://svgl.app/library/react_dark.svg",
            ),
            wordmark: Some(asset("https://svgl.app/library/react_wordmark.svg")),
            brand_url: None,
            url: "https://react.dev/".to_string(),
        },
        Svg {
            id: Some(4),
            title: "Figma".to_string(),
            category: Labels::One("Design".to_string()),
            route: asset("https://svgl.app/library/figma.svg"),
            wordmark: Some(themed(
                "https://svgl.app/library/figma_wordmark_light.svg",
                "https://svgl.app/library/figma_wordmark_dark.svg",
            )),
            brand_url: Some("https://www.figma.com/using-the-figma-brand/".to_string()),
            url: "https://www.figma.com/".to_string(),
        },
    ]
}

pub fn app() -> Router {
    app_with(catalogue())
}

/// Router serving `svgs` instead of the built-in catalogue.
pub fn app_with(svgs: Vec<Svg>) -> Router {
    let db: Db = Arc::new(svgs);
    Router::new()
        .route("/", get(list_svgs))
        .route("/category/{name}", get(svgs_by_category))
        .route("/categories", get(list_categories))
        .with_state(db)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_svgs(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Svg>>, StatusCode> {
    let mut svgs: Vec<Svg> = match &params.search {
        Some(query) => {
            let needle = query.to_lowercase();
            let found: Vec<Svg> = db
                .iter()
                .filter(|svg| svg.title.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            if found.is_empty() {
                return Err(StatusCode::NOT_FOUND);
            }
            found
        }
        None => db.iter().cloned().collect(),
    };
    if let Some(limit) = params.limit {
        svgs.truncate(limit);
    }
    Ok(Json(svgs))
}

async fn svgs_by_category(
    State(db): State<Db>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Svg>>, StatusCode> {
    let svgs: Vec<Svg> = db
        .iter()
        .filter(|svg| svg.category.iter().any(|label| label.eq_ignore_ascii_case(&name)))
        .cloned()
        .collect();
    if svgs.is_empty() {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(svgs))
}

async fn list_categories(State(db): State<Db>) -> Json<Vec<CategoryTotal>> {
    Json(category_totals(&db))
}

/// Per-category entry counts, in first-seen order.
pub fn category_totals(svgs: &[Svg]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for label in svgs.iter().flat_map(|svg| svg.category.iter()) {
        match totals.iter_mut().find(|t| t.category == label) {
            Some(total) => total.total += 1,
            None => totals.push(CategoryTotal {
                category: label.to_string(),
                total: 1,
            }),
        }
    }
    totals
}
