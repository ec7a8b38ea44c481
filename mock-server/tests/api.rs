use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, catalogue, CategoryTotal, Svg};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn titles(svgs: &[Svg]) -> Vec<&str> {
    svgs.iter().map(|svg| svg.title.as_str()).collect()
}

// --- list ---

#[tokio::test]
async fn list_returns_whole_catalogue() {
    let resp = app().oneshot(get("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let svgs: Vec<Svg> = body_json(resp).await;
    assert_eq!(svgs, catalogue());
}

#[tokio::test]
async fn list_with_limit_truncates() {
    let resp = app().oneshot(get("/?limit=2")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let svgs: Vec<Svg> = body_json(resp).await;
    assert_eq!(titles(&svgs), vec!["Discord", "Rust"]);
}

#[tokio::test]
async fn list_with_limit_above_total() {
    let resp = app().oneshot(get("/?limit=100")).await.unwrap();

    let svgs: Vec<Svg> = body_json(resp).await;
    assert_eq!(svgs.len(), catalogue().len());
}

#[tokio::test]
async fn list_with_bad_limit_returns_400() {
    let resp = app().oneshot(get("/?limit=many")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_empty_catalogue() {
    let resp = app_with(Vec::new()).oneshot(get("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let svgs: Vec<Svg> = body_json(resp).await;
    assert!(svgs.is_empty());
}

// --- search ---

#[tokio::test]
async fn search_matches_title_case_insensitively() {
    let resp = app().oneshot(get("/?search=DISCORD")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let svgs: Vec<Svg> = body_json(resp).await;
    assert_eq!(titles(&svgs), vec!["Discord"]);
}

#[tokio::test]
async fn search_decodes_form_encoded_query() {
    let resp = app().oneshot(get("/?search=visual+studio")).await.unwrap();

    let svgs: Vec<Svg> = body_json(resp).await;
    assert_eq!(titles(&svgs), vec!["Visual Studio Code"]);
}

#[tokio::test]
async fn search_without_match_returns_404() {
    let resp = app().oneshot(get("/?search=NoWayThisExists")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- category ---

#[tokio::test]
async fn category_matches_single_and_multiple_labels() {
    let resp = app().oneshot(get("/category/Software")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let svgs: Vec<Svg> = body_json(resp).await;
    assert_eq!(titles(&svgs), vec!["Rust", "Visual Studio Code"]);
}

#[tokio::test]
async fn category_is_case_insensitive() {
    let resp = app().oneshot(get("/category/software")).await.unwrap();

    let svgs: Vec<Svg> = body_json(resp).await;
    assert_eq!(svgs.len(), 2);
}

#[tokio::test]
async fn unknown_category_returns_404() {
    let resp = app().oneshot(get("/category/NonExistent")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- categories ---

#[tokio::test]
async fn categories_report_totals() {
    let resp = app().oneshot(get("/categories")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let totals: Vec<CategoryTotal> = body_json(resp).await;
    let software = totals.iter().find(|t| t.category == "Software").unwrap();
    assert_eq!(software.total, 2);
    let sum: usize = totals.iter().map(|t| t.total).sum();
    let labels: usize = catalogue()
        .iter()
        .map(|svg| match &svg.category {
            mock_server::Labels::One(_) => 1,
            mock_server::Labels::Many(labels) => labels.len(),
        })
        .sum();
    assert_eq!(sum, labels);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(get("/nope")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
