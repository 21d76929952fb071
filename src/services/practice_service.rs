use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    dto::{
        practice::{AttemptRequest, CreateSessionRequest, HitRequest, TurnRequest, TurnResponse},
        session::{SessionSnapshot, SessionSummary},
    },
    error::ServiceError,
    services::sse_events,
    state::{
        SharedState,
        session::{GameMode, GameState, PracticeSession},
    },
};

/// Open a fresh practice session and kick off the background tip fetch.
pub fn create_session(state: &SharedState, request: CreateSessionRequest) -> SessionSnapshot {
    let mode = GameMode::from(request.mode);
    let session = PracticeSession::new(mode);
    let id = session.id;
    let snapshot = SessionSnapshot::from(&session);
    state.sessions().insert(id, session);

    info!(session_id = %id, mode = mode.key(), "practice session created");
    sse_events::broadcast_session_changed(state, &snapshot);
    spawn_tip_fetch(state.clone(), id, mode);

    snapshot
}

/// Snapshot a session by id.
pub fn get_session(state: &SharedState, id: Uuid) -> Result<SessionSnapshot, ServiceError> {
    state
        .sessions()
        .get(&id)
        .map(|session| SessionSnapshot::from(&*session))
        .ok_or_else(|| session_not_found(id))
}

/// List all live sessions, oldest first.
pub fn list_sessions(state: &SharedState) -> Vec<SessionSummary> {
    let mut summaries: Vec<SessionSummary> = state
        .sessions()
        .iter()
        .map(|session| SessionSummary::from(&*session))
        .collect();
    summaries.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    summaries
}

/// Discard a session entirely.
pub fn delete_session(state: &SharedState, id: Uuid) -> Result<(), ServiceError> {
    state
        .sessions()
        .remove(&id)
        .ok_or_else(|| session_not_found(id))?;
    info!(session_id = %id, "practice session discarded");
    sse_events::broadcast_session_deleted(state, id);
    Ok(())
}

/// Reset a session's game to its documented initial state. Valid from any
/// phase, including terminal ones.
pub fn restart_session(state: &SharedState, id: Uuid) -> Result<SessionSnapshot, ServiceError> {
    let snapshot = {
        let mut session = state
            .sessions()
            .get_mut(&id)
            .ok_or_else(|| session_not_found(id))?;
        session.game.restart();
        session.touch();
        SessionSnapshot::from(&*session)
    };
    sse_events::broadcast_session_changed(state, &snapshot);
    Ok(snapshot)
}

/// Resolve one countdown visit.
pub fn submit_turn(
    state: &SharedState,
    id: Uuid,
    request: TurnRequest,
) -> Result<TurnResponse, ServiceError> {
    let (outcome, snapshot) = {
        let mut session = state
            .sessions()
            .get_mut(&id)
            .ok_or_else(|| session_not_found(id))?;
        let outcome = match &mut session.game {
            GameState::Countdown(game) => {
                game.submit_turn(request.player.into(), request.points)?
            }
            other => return Err(wrong_discipline(other, "countdown")),
        };
        session.touch();
        (outcome, SessionSnapshot::from(&*session))
    };
    sse_events::broadcast_session_changed(state, &snapshot);
    Ok(TurnResponse {
        outcome: outcome.into(),
        session: snapshot,
    })
}

/// Resolve one gauntlet attempt.
pub fn submit_attempt(
    state: &SharedState,
    id: Uuid,
    request: AttemptRequest,
) -> Result<SessionSnapshot, ServiceError> {
    let snapshot = {
        let mut session = state
            .sessions()
            .get_mut(&id)
            .ok_or_else(|| session_not_found(id))?;
        match &mut session.game {
            GameState::Gauntlet(run) => run.submit_attempt(request.hits)?,
            other => return Err(wrong_discipline(other, "gauntlet")),
        };
        session.touch();
        SessionSnapshot::from(&*session)
    };
    sse_events::broadcast_session_changed(state, &snapshot);
    Ok(snapshot)
}

/// Record a confirmed hit in a clock round.
pub fn record_hit(
    state: &SharedState,
    id: Uuid,
    request: HitRequest,
) -> Result<SessionSnapshot, ServiceError> {
    let snapshot = {
        let mut session = state
            .sessions()
            .get_mut(&id)
            .ok_or_else(|| session_not_found(id))?;
        match &mut session.game {
            GameState::AroundTheClock(round) => round.record_hit(request.dart)?,
            other => return Err(wrong_discipline(other, "clock")),
        };
        session.touch();
        SessionSnapshot::from(&*session)
    };
    sse_events::broadcast_session_changed(state, &snapshot);
    Ok(snapshot)
}

/// Record a fully missed clock attempt.
pub fn record_miss(state: &SharedState, id: Uuid) -> Result<SessionSnapshot, ServiceError> {
    let snapshot = {
        let mut session = state
            .sessions()
            .get_mut(&id)
            .ok_or_else(|| session_not_found(id))?;
        match &mut session.game {
            GameState::AroundTheClock(round) => round.record_miss()?,
            other => return Err(wrong_discipline(other, "clock")),
        };
        session.touch();
        SessionSnapshot::from(&*session)
    };
    sse_events::broadcast_session_changed(state, &snapshot);
    Ok(snapshot)
}

/// Fetch the mode's training tip off the request path. Whatever happens
/// here, turn submissions are unaffected; the session may even be gone by
/// the time the text arrives, in which case the tip is dropped.
fn spawn_tip_fetch(state: SharedState, session_id: Uuid, mode: GameMode) {
    let oracle = state.oracle();
    tokio::spawn(async move {
        let tip = match oracle.training_tip(mode).await {
            Ok(tip) => tip,
            Err(err) => {
                warn!(%session_id, error = %err, "training tip fetch failed; using fallback");
                state.config().fallback_tip(mode)
            }
        };

        let Some(mut session) = state.sessions().get_mut(&session_id) else {
            return;
        };
        session.tip = Some(tip.clone());
        drop(session);
        sse_events::broadcast_tip_ready(&state, session_id, &tip);
    });
}

fn session_not_found(id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("session `{id}` not found"))
}

fn wrong_discipline(game: &GameState, expected: &str) -> ServiceError {
    ServiceError::InvalidState(format!(
        "session is a {} session, not {expected}",
        game.mode().key()
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::future::BoxFuture;

    use super::*;
    use crate::{
        config::AppConfig,
        dto::{
            phase::VisiblePhase,
            practice::TurnOutcomeDto,
            session::{GameModeDto, PlayerSlotDto},
        },
        services::oracle::{OracleError, TipOracle},
        state::AppState,
    };

    /// Oracle double that always fails, driving the fallback path.
    struct SilentOracle;

    impl TipOracle for SilentOracle {
        fn training_tip(&self, _mode: GameMode) -> BoxFuture<'_, Result<String, OracleError>> {
            Box::pin(async { Err(OracleError::Disabled) })
        }

        fn checkout_advice(&self, _remaining: u16) -> BoxFuture<'_, Result<String, OracleError>> {
            Box::pin(async { Err(OracleError::Disabled) })
        }
    }

    fn test_state() -> SharedState {
        AppState::new(AppConfig::default(), Arc::new(SilentOracle))
    }

    #[tokio::test]
    async fn created_session_is_retrievable() {
        let state = test_state();
        let created = create_session(
            &state,
            CreateSessionRequest {
                mode: GameModeDto::Clock,
            },
        );
        let fetched = get_session(&state, created.id).unwrap();
        assert_eq!(fetched.mode, GameModeDto::Clock);
        assert_eq!(fetched.phase, VisiblePhase::InProgress);
        assert!(fetched.clock.is_some());
    }

    #[tokio::test]
    async fn turn_against_the_wrong_discipline_is_an_invalid_state() {
        let state = test_state();
        let created = create_session(
            &state,
            CreateSessionRequest {
                mode: GameModeDto::Gauntlet,
            },
        );
        let err = submit_turn(
            &state,
            created.id,
            TurnRequest {
                player: PlayerSlotDto::One,
                points: 60,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let state = test_state();
        let err = record_miss(&state, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn countdown_turn_reports_its_outcome() {
        let state = test_state();
        let created = create_session(
            &state,
            CreateSessionRequest {
                mode: GameModeDto::Countdown,
            },
        );
        let response = submit_turn(
            &state,
            created.id,
            TurnRequest {
                player: PlayerSlotDto::One,
                points: 180,
            },
        )
        .unwrap();
        assert_eq!(response.outcome, TurnOutcomeDto::Scored);
        let countdown = response.session.countdown.unwrap();
        assert_eq!(countdown.players[0].remaining, 321);
        assert_eq!(countdown.active, Some(PlayerSlotDto::Two));
    }

    #[tokio::test]
    async fn restart_returns_the_documented_initial_state() {
        let state = test_state();
        let created = create_session(
            &state,
            CreateSessionRequest {
                mode: GameModeDto::Gauntlet,
            },
        );
        for _ in 0..5 {
            submit_attempt(&state, created.id, AttemptRequest { hits: 0 }).unwrap();
        }
        let lost = get_session(&state, created.id).unwrap();
        assert_eq!(lost.phase, VisiblePhase::Lost);

        let restarted = restart_session(&state, created.id).unwrap();
        assert_eq!(restarted.phase, VisiblePhase::InProgress);
        let gauntlet = restarted.gauntlet.unwrap();
        assert_eq!(gauntlet.remaining, 27);
        assert_eq!(gauntlet.target_index, 0);
    }

    #[tokio::test]
    async fn deleted_session_rejects_further_play() {
        let state = test_state();
        let created = create_session(
            &state,
            CreateSessionRequest {
                mode: GameModeDto::Clock,
            },
        );
        delete_session(&state, created.id).unwrap();
        let err = record_hit(&state, created.id, HitRequest { dart: 1 }).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
