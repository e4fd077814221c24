//! HTTP Route Tests
//!
//! Drives the full router in-process:
//! - `/plants` renders the results page, or the "Sorry" message when empty
//! - the "Sorry" message does not stick to later requests
//! - `/plants.json` returns the records in query order
//! - bad letters are rejected, unreachable catalogs answer 503

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use plant_catalog::catalog::seed::{create_catalog, sample_plants};
use plant_catalog::catalog::{DataSourceConfig, QueryProjector};
use plant_catalog::display::SORRY;
use plant_catalog::web::{CatalogState, HttpServer, HttpServerConfig};
use tempfile::TempDir;
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn seeded_state(tmp: &TempDir, page_size: usize, debug: bool) -> Arc<CatalogState> {
    let path = tmp.path().join("plants.db");
    create_catalog(&path, "plants", &sample_plants()).unwrap();
    state_for(DataSourceConfig::new(path, "plants"), page_size, debug)
}

fn state_for(source: DataSourceConfig, page_size: usize, debug: bool) -> Arc<CatalogState> {
    Arc::new(CatalogState::new(
        QueryProjector::new(source),
        page_size,
        debug,
    ))
}

fn router(state: Arc<CatalogState>) -> Router {
    HttpServer::with_state(state, HttpServerConfig::default()).router()
}

async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// =============================================================================
// Results Page
// =============================================================================

/// A letter with no matches shows the sorry message; the plain index
/// page requested afterwards does not.
#[tokio::test]
async fn test_sorry_message_does_not_persist() {
    let tmp = TempDir::new().unwrap();
    let app = router(seeded_state(&tmp, 10, false));

    let (status, body) = get(&app, "/plants?show=name&letter=X").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Sorry"), "{body}");

    let (status, body) = get(&app, "/plants").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("Sorry"), "{body}");
    assert!(body.contains("Acer palmatum &#39;Bloodgood&#39;"));
}

/// The letter filter is case-insensitive over HTTP too.
#[tokio::test]
async fn test_letter_filter_page() {
    let tmp = TempDir::new().unwrap();
    let app = router(seeded_state(&tmp, 10, false));

    let (_, lower) = get(&app, "/plants?show=name&letter=b").await;
    let (_, upper) = get(&app, "/plants?show=name&letter=B").await;

    assert!(lower.contains("Betula pendula"));
    assert!(lower.contains("Betula utilis"));
    assert!(!lower.contains("Acer palmatum"));
    assert!(!lower.contains(SORRY));
    assert_eq!(lower, upper);
}

/// Results beyond the page size move to the next page.
#[tokio::test]
async fn test_paging_links() {
    let tmp = TempDir::new().unwrap();
    let app = router(seeded_state(&tmp, 5, false));
    let total = sample_plants().len();

    let (_, first) = get(&app, "/plants?show=family").await;
    assert!(first.contains(&format!("Showing 1 to 5 of {total}")));
    assert!(first.contains("/plants?show=family&amp;start=5"));
    assert!(!first.contains(">Previous<"));

    let (_, second) = get(&app, "/plants?show=family&start=5").await;
    assert!(second.contains(&format!("Showing 6 to 10 of {total}")));
    assert!(second.contains(">Previous<"));
}

/// Starting past the end links back to the last page that has records.
#[tokio::test]
async fn test_start_past_end_links_to_last_page() {
    let tmp = TempDir::new().unwrap();
    let app = router(seeded_state(&tmp, 5, false));

    let (status, body) = get(&app, "/plants?start=50").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains(SORRY));
    assert!(body.contains("/plants?show=name&amp;start=10\">Previous"));
    assert!(!body.contains(">Next<"));
}

/// Debug mode adds the image line.
#[tokio::test]
async fn test_debug_shows_images() {
    let tmp = TempDir::new().unwrap();

    let (_, plain) = get(&router(seeded_state(&tmp, 50, false)), "/plants").await;
    assert!(!plain.contains("Image:"));

    let tmp = TempDir::new().unwrap();
    let (_, debug) = get(&router(seeded_state(&tmp, 50, true)), "/plants").await;
    assert!(debug.contains("Image:"));
}

// =============================================================================
// JSON
// =============================================================================

/// JSON listing keeps query order and reports emptiness explicitly.
#[tokio::test]
async fn test_json_listing() {
    let tmp = TempDir::new().unwrap();
    let app = router(seeded_state(&tmp, 10, false));

    let (status, body) = get(&app, "/plants.json?letter=b").await;
    assert_eq!(status, StatusCode::OK);

    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["criterion"], "letter:b");
    assert_eq!(value["no_results"], false);
    assert_eq!(value["total"], 2);
    assert_eq!(value["records"][0]["name"], "Betula pendula");
    assert_eq!(value["records"][1]["cultivar_name"], "Jacquemontii");

    let (_, body) = get(&app, "/plants.json?letter=x").await;
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["no_results"], true);
    assert_eq!(value["records"].as_array().map(Vec::len), Some(0));
}

// =============================================================================
// Errors
// =============================================================================

/// More than one character in `letter` is a bad request.
#[tokio::test]
async fn test_long_letter_rejected() {
    let tmp = TempDir::new().unwrap();
    let app = router(seeded_state(&tmp, 10, false));

    let (status, body) = get(&app, "/plants?letter=ab").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("PLANT_INVALID_LETTER"));
}

/// Injection attempts are one-character letters or rejected, never SQL.
#[tokio::test]
async fn test_quote_letter_is_harmless() {
    let tmp = TempDir::new().unwrap();
    let app = router(seeded_state(&tmp, 10, false));

    let (status, body) = get(&app, "/plants?letter=%27").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(SORRY));

    let (status, _) = get(&app, "/plants?letter=%27%20OR%201%3D1%20--").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// A catalog that cannot be opened answers 503 with its error code.
#[tokio::test]
async fn test_unavailable_catalog() {
    let tmp = TempDir::new().unwrap();
    let source = DataSourceConfig::new(tmp.path().join("absent.db"), "plants");
    let app = router(state_for(source, 10, false));

    let (status, body) = get(&app, "/plants").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("PLANT_DATASOURCE_UNAVAILABLE"));
}

/// Health does not touch the catalog.
#[tokio::test]
async fn test_health() {
    let tmp = TempDir::new().unwrap();
    let source = DataSourceConfig::new(tmp.path().join("absent.db"), "plants");
    let app = router(state_for(source, 10, false));

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"status\":\"ok\""));
}
