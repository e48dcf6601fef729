use axum::{routing::get, Json, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use common::types::Health;

use crate::state::ServerState;

pub mod books;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        // Catalog: list, add, edit rating, delete
        .route("/", get(books::home))
        .route("/add", get(books::add_form).post(books::add))
        .route("/edit", get(books::edit_form).post(books::edit))
        .route("/delete", get(books::delete))
        // Liveness probe
        .route("/health", get(health))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                // One span per request with method and path, at INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                // Event when the request arrives
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // Event on response with status and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // Failures (5xx and the like) at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
