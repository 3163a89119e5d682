//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the read-only board view and the three drag gesture signals as
//! JSON endpoints under one Axum router. Handlers translate payloads
//! and delegate to services; no board logic lives here.

pub mod boards;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/boards", get(boards::get_boards))
        .route("/api/drag/start", post(boards::drag_start))
        .route("/api/drag/hover", post(boards::drag_hover))
        .route("/api/drag/end", post(boards::drag_end))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
