use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::{
    dto::{
        session::SessionSnapshot,
        sse::{ServerEvent, SessionChangedEvent, SessionDeletedEvent, TipReadyEvent},
    },
    state::SharedState,
};

const EVENT_SESSION_CHANGED: &str = "session.changed";
const EVENT_SESSION_DELETED: &str = "session.deleted";
const EVENT_SESSION_TIP: &str = "session.tip";

/// Broadcast a full snapshot after a session was created or mutated.
pub fn broadcast_session_changed(state: &SharedState, snapshot: &SessionSnapshot) {
    let payload = SessionChangedEvent(snapshot.clone());
    send_event(state, EVENT_SESSION_CHANGED, &payload);
}

/// Broadcast that a session has been discarded.
pub fn broadcast_session_deleted(state: &SharedState, session_id: Uuid) {
    let payload = SessionDeletedEvent { session_id };
    send_event(state, EVENT_SESSION_DELETED, &payload);
}

/// Broadcast that a session's background tip fetch resolved.
pub fn broadcast_tip_ready(state: &SharedState, session_id: Uuid, tip: &str) {
    let payload = TipReadyEvent {
        session_id,
        tip: tip.to_string(),
    };
    send_event(state, EVENT_SESSION_TIP, &payload);
}

fn send_event(state: &SharedState, event: &str, payload: &impl Serialize) {
    match ServerEvent::json(Some(event.to_string()), payload) {
        Ok(event) => state.sse().broadcast(event),
        Err(err) => warn!(event, error = %err, "failed to serialize SSE payload"),
    }
}
