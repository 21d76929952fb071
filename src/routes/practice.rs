use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use axum_valid::Valid;
use uuid::Uuid;

use crate::{
    dto::{
        practice::{AttemptRequest, CreateSessionRequest, HitRequest, TurnRequest, TurnResponse},
        session::{SessionSnapshot, SessionSummary},
    },
    error::AppError,
    services::practice_service,
    state::SharedState,
};

/// Routes handling practice session lifecycle and turn submissions.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/practice/sessions", post(create_session).get(list_sessions))
        .route(
            "/practice/sessions/{id}",
            get(get_session).delete(delete_session),
        )
        .route("/practice/sessions/{id}/turn", post(submit_turn))
        .route("/practice/sessions/{id}/attempt", post(submit_attempt))
        .route("/practice/sessions/{id}/hit", post(record_hit))
        .route("/practice/sessions/{id}/miss", post(record_miss))
        .route("/practice/sessions/{id}/restart", post(restart_session))
}

/// Open a fresh practice session for the requested discipline.
#[utoipa::path(
    post,
    path = "/practice/sessions",
    tag = "practice",
    request_body = CreateSessionRequest,
    responses(
        (status = 200, description = "Session created", body = SessionSnapshot)
    )
)]
pub async fn create_session(
    State(state): State<SharedState>,
    Json(payload): Json<CreateSessionRequest>,
) -> Json<SessionSnapshot> {
    Json(practice_service::create_session(&state, payload))
}

/// List all live sessions, oldest first.
#[utoipa::path(
    get,
    path = "/practice/sessions",
    tag = "practice",
    responses(
        (status = 200, description = "Live sessions", body = [SessionSummary])
    )
)]
pub async fn list_sessions(State(state): State<SharedState>) -> Json<Vec<SessionSummary>> {
    Json(practice_service::list_sessions(&state))
}

/// Fetch the full snapshot of one session.
#[utoipa::path(
    get,
    path = "/practice/sessions/{id}",
    tag = "practice",
    params(("id" = Uuid, Path, description = "Identifier of the session")),
    responses(
        (status = 200, description = "Session snapshot", body = SessionSnapshot)
    )
)]
pub async fn get_session(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(practice_service::get_session(&state, id)?))
}

/// Discard a session.
#[utoipa::path(
    delete,
    path = "/practice/sessions/{id}",
    tag = "practice",
    params(("id" = Uuid, Path, description = "Identifier of the session")),
    responses((status = 204, description = "Session discarded"))
)]
pub async fn delete_session(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    practice_service::delete_session(&state, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Submit one three-dart countdown visit for the active player.
#[utoipa::path(
    post,
    path = "/practice/sessions/{id}/turn",
    tag = "practice",
    params(("id" = Uuid, Path, description = "Identifier of the session")),
    request_body = TurnRequest,
    responses(
        (status = 200, description = "Turn resolved", body = TurnResponse),
        (status = 400, description = "Points outside the 0-180 range"),
        (status = 409, description = "Match over or out-of-turn submission")
    )
)]
pub async fn submit_turn(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<TurnRequest>>,
) -> Result<Json<TurnResponse>, AppError> {
    Ok(Json(practice_service::submit_turn(&state, id, payload)?))
}

/// Submit one gauntlet attempt at the current double.
#[utoipa::path(
    post,
    path = "/practice/sessions/{id}/attempt",
    tag = "practice",
    params(("id" = Uuid, Path, description = "Identifier of the session")),
    request_body = AttemptRequest,
    responses(
        (status = 200, description = "Attempt resolved", body = SessionSnapshot),
        (status = 400, description = "Hit count outside the 0-3 range"),
        (status = 409, description = "Run already won or lost")
    )
)]
pub async fn submit_attempt(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<AttemptRequest>>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(practice_service::submit_attempt(&state, id, payload)?))
}

/// Record which dart of the current clock attempt hit the target.
#[utoipa::path(
    post,
    path = "/practice/sessions/{id}/hit",
    tag = "practice",
    params(("id" = Uuid, Path, description = "Identifier of the session")),
    request_body = HitRequest,
    responses(
        (status = 200, description = "Hit recorded", body = SessionSnapshot),
        (status = 400, description = "Dart number outside the 1-3 range"),
        (status = 409, description = "Course already completed")
    )
)]
pub async fn record_hit(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<HitRequest>>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(practice_service::record_hit(&state, id, payload)?))
}

/// Record a clock attempt in which all three darts missed.
#[utoipa::path(
    post,
    path = "/practice/sessions/{id}/miss",
    tag = "practice",
    params(("id" = Uuid, Path, description = "Identifier of the session")),
    responses(
        (status = 200, description = "Miss recorded", body = SessionSnapshot),
        (status = 409, description = "Course already completed")
    )
)]
pub async fn record_miss(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(practice_service::record_miss(&state, id)?))
}

/// Reset the session's game to its starting state.
#[utoipa::path(
    post,
    path = "/practice/sessions/{id}/restart",
    tag = "practice",
    params(("id" = Uuid, Path, description = "Identifier of the session")),
    responses(
        (status = 200, description = "Session restarted", body = SessionSnapshot)
    )
)]
pub async fn restart_session(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(practice_service::restart_session(&state, id)?))
}
