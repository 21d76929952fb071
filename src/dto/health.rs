use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status; always "ok" for this stateless backend.
    pub status: String,
    /// Number of practice sessions currently held in memory.
    pub active_sessions: usize,
}

impl HealthResponse {
    /// Create a health response reporting the live session count.
    pub fn ok(active_sessions: usize) -> Self {
        Self {
            status: "ok".to_string(),
            active_sessions,
        }
    }
}
