use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use ledger_config::ServerConfig;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::{ai, entries, evidence, health, verify};
use crate::state::AppState;

/// Headroom above the file limit for multipart framing and the other fields.
const MULTIPART_OVERHEAD: u64 = 1024 * 1024;

/// All API routes, without transport layers.
pub fn router(state: AppState) -> Router {
    let upload_limit = usize::try_from(state.limits.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD))
        .unwrap_or(usize::MAX);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/entry/create", post(entries::create))
        .route("/api/entries", get(entries::timeline))
        .route("/api/intent/save", post(entries::save_intent))
        .route("/api/evidence", get(evidence::list))
        .route("/api/evidence/add", post(evidence::add))
        .route(
            "/api/evidence/upload",
            post(evidence::upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/evidence/replace",
            post(evidence::replace).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/evidence/{evidence_id}/signed-url", get(evidence::signed_url))
        .route("/api/ai/analyze", post(ai::analyze))
        .route("/api/ai/questions", post(ai::questions))
        .route("/api/ai/evaluate", post(ai::evaluate))
        .route("/api/verify/{public_id}", get(verify::lookup))
        .with_state(state)
}

/// [`router`] plus request tracing and CORS.
pub fn app(state: AppState, server: &ServerConfig) -> Router {
    let app = router(state).layer(TraceLayer::new_for_http());
    if server.cors_allow_any {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
