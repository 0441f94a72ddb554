//! HTTP facade over the tracking pipeline.
//!
//! - `POST /track` with `{"trackingNumber": "..."}` → `TrackingInfo`
//! - `GET /recent?limit=N` → array of tracking numbers, newest first
//! - `GET /health`
//!
//! Every route allows cross-origin calls from any origin, and `OPTIONS`
//! preflights are answered by the CORS layer.
//!
//! Failed lookups still answer with a `TrackingInfo` body (its `error` field
//! set) so clients always have something to render.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderName, Method, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use dtrack_core::{TrackError, Tracker, TrackingInfo};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

pub struct AppState {
    pub tracker: Tracker,
    /// Used when `/recent` is called without `limit`.
    pub recent_limit: i64,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/track", post(track))
        .route("/recent", get(recent))
        .route("/health", get(health))
        .with_state(state)
        .layer(cors())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackBody {
    #[serde(default)]
    pub tracking_number: String,
}

#[derive(Debug, Deserialize)]
pub struct RecentParams {
    pub limit: Option<i64>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn track(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TrackBody>,
) -> (StatusCode, Json<TrackingInfo>) {
    match state.tracker.track_shipment(&body.tracking_number).await {
        Ok(info) => (StatusCode::OK, Json(info)),
        Err(failure) => (status_for(&failure.source), Json(failure.into_info())),
    }
}

async fn recent(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecentParams>,
) -> Json<Vec<String>> {
    let limit = params.limit.unwrap_or(state.recent_limit);
    Json(state.tracker.recent_searches(limit))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

fn status_for(err: &TrackError) -> StatusCode {
    if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::BAD_GATEWAY
    }
}
