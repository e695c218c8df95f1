// HTTP routes

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::store::SnapshotStore;
use crate::version::{NAME, VERSION};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) store: Arc<SnapshotStore>,
}

pub fn app(store: Arc<SnapshotStore>) -> Router {
    let state = AppState { store };
    Router::new()
        .route("/", get(|| async { "statusd: host status daemon" })) // GET /
        .route("/version", get(version_handler)) // GET /version
        .route("/status", post(status_handler)) // POST /status (anything else: 405)
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

/// GET /version — returns service name and version (from Cargo.toml at build time).
async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// POST /status — the latest snapshot as JSON, or 503 until the first sample lands.
async fn status_handler(State(state): State<AppState>) -> Response {
    match state.store.current().await {
        Some(snapshot) => axum::Json(snapshot).into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "no sample collected yet").into_response(),
    }
}
