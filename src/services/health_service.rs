use crate::{dto::health::HealthResponse, state::SharedState};

/// Report liveness and the current in-memory session count. There is no
/// storage backend to probe, so this can never degrade.
pub fn health_status(state: &SharedState) -> HealthResponse {
    HealthResponse::ok(state.sessions().len())
}
