//! HTTP gateway (Axum) for grading requests.
//!
//! - `GET /api/health` reports liveness.
//! - `POST /api/analyze` grades one submission and returns a
//!   [`SubmissionResult`](handler::SubmissionResult).

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use error::GatewayError;
pub use handler::{AnalyzeRequest, SubmissionResult, analyze_handler};
pub use state::HandlerState;

use crate::embedding::EmbeddingService;

pub const HEALTH_PATH: &str = "/api/health";
pub const ANALYZE_PATH: &str = "/api/analyze";

pub fn create_router_with_state<E>(state: HandlerState<E>, cors_origins: &[String]) -> Router
where
    E: EmbeddingService + 'static,
{
    let router = Router::new()
        .route(HEALTH_PATH, get(health_handler))
        .route(ANALYZE_PATH, post(analyze_handler::<E>))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    match cors_layer(cors_origins) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// Builds a CORS layer for the given origins; `None` when no origin is usable.
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT]),
    )
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
