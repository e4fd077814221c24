//! Catalog HTTP Routes
//!
//! - `GET /plants?show=&letter=&start=`: HTML results page
//! - `GET /plants.json?show=&letter=`: the result as JSON
//! - `GET /health`: liveness
//!
//! Handlers are stateless between requests. The "no results" state travels
//! in the response itself.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{Instrument, Span};
use uuid::Uuid;

use crate::catalog::{CatalogError, LetterError, QueryProjector, Record, ResultSet, SortCriterion};
use crate::config::CatalogConfig;
use crate::display::{render_page, render_text, PageContext, TextOptions};
use crate::observability::{log_event, Event};

/// Path the results page is served under
pub const PLANTS_PATH: &str = "/plants";

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers
pub struct CatalogState {
    pub projector: QueryProjector,
    pub page_size: usize,
    pub debug: bool,
}

impl CatalogState {
    pub fn new(projector: QueryProjector, page_size: usize, debug: bool) -> Self {
        Self {
            projector,
            page_size,
            debug,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(
            QueryProjector::new(config.data_source()),
            config.page_size,
            config.debug,
        )
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Default, Deserialize)]
pub struct PlantParams {
    #[serde(default)]
    pub show: Option<String>,
    #[serde(default)]
    pub letter: Option<String>,
    #[serde(default)]
    pub start: Option<usize>,
}

impl PlantParams {
    fn criterion(&self) -> Result<SortCriterion, LetterError> {
        SortCriterion::from_show(self.show.as_deref(), self.letter.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct PlantsResponse {
    pub criterion: String,
    pub no_results: bool,
    pub total: usize,
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ==================
// Errors
// ==================

/// Errors a handler can answer with
#[derive(Debug)]
pub enum WebError {
    /// Catalog fetch failed
    Catalog(CatalogError),
    /// Bad request parameters
    InvalidLetter(LetterError),
    /// The blocking task panicked or was cancelled
    Internal(String),
}

impl From<CatalogError> for WebError {
    fn from(e: CatalogError) -> Self {
        WebError::Catalog(e)
    }
}

impl From<LetterError> for WebError {
    fn from(e: LetterError) -> Self {
        WebError::InvalidLetter(e)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            WebError::Catalog(e) => (
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                e.code(),
                e.to_string(),
            ),
            WebError::InvalidLetter(e) => {
                (StatusCode::BAD_REQUEST, "PLANT_INVALID_LETTER", e.to_string())
            }
            WebError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "PLANT_INTERNAL", message)
            }
        };

        (status, Json(ErrorBody { code, message })).into_response()
    }
}

// ==================
// Routes
// ==================

/// Create catalog routes
pub fn catalog_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route(PLANTS_PATH, get(list_plants))
        .route("/plants.json", get(list_plants_json))
        .with_state(state)
}

/// Health check routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Run the blocking fetch off the async workers
async fn fetch(
    state: &Arc<CatalogState>,
    criterion: SortCriterion,
) -> Result<ResultSet, WebError> {
    let state = Arc::clone(state);
    let span = Span::current();

    let results = tokio::task::spawn_blocking(move || {
        span.in_scope(|| {
            let results = state.projector.fetch(&criterion)?;
            if state.debug {
                let text = render_text(&results, TextOptions { show_image: true });
                tracing::debug!(results = %text);
            }
            Ok::<_, CatalogError>(results)
        })
    })
    .await
    .map_err(|e| WebError::Internal(e.to_string()))??;

    Ok(results)
}

fn criterion_or_reject(params: &PlantParams) -> Result<SortCriterion, WebError> {
    params.criterion().map_err(|e| {
        log_event(Event::RequestRejected);
        tracing::warn!(reason = %e);
        WebError::from(e)
    })
}

fn request_span(route: &'static str) -> Span {
    tracing::info_span!("request", request_id = %Uuid::new_v4(), route)
}

async fn list_plants(
    State(state): State<Arc<CatalogState>>,
    Query(params): Query<PlantParams>,
) -> Result<Html<String>, WebError> {
    async move {
        let criterion = criterion_or_reject(&params)?;
        let results = fetch(&state, criterion).await?;

        let ctx = PageContext {
            base_path: PLANTS_PATH,
            criterion,
            start: params.start.unwrap_or(0),
            page_size: state.page_size,
            show_image: state.debug,
        };

        Ok::<_, WebError>(Html(render_page(&results, &ctx)))
    }
    .instrument(request_span(PLANTS_PATH))
    .await
}

async fn list_plants_json(
    State(state): State<Arc<CatalogState>>,
    Query(params): Query<PlantParams>,
) -> Result<Json<PlantsResponse>, WebError> {
    async move {
        let criterion = criterion_or_reject(&params)?;
        let results = fetch(&state, criterion).await?;

        Ok::<_, WebError>(Json(PlantsResponse {
            criterion: criterion.to_string(),
            no_results: results.is_empty(),
            total: results.len(),
            columns: results.columns,
            records: results.records,
        }))
    }
    .instrument(request_span("/plants.json"))
    .await
}
