//! HTTP route trees composed into the application router.

use axum::Router;

use crate::state::SharedState;

/// Generative coaching endpoints.
pub mod coach;
/// Swagger UI and OpenAPI document.
pub mod docs;
/// Liveness probe.
pub mod health;
/// Practice session endpoints.
pub mod practice;
/// Server-sent events stream.
pub mod sse;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(sse::router())
        .merge(practice::router())
        .merge(coach::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
