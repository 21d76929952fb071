use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::session::SessionSnapshot;

#[derive(Clone, Debug)]
/// Dispatched payload carried across the SSE channel.
pub struct ServerEvent {
    /// Optional SSE event name.
    pub event: Option<String>,
    /// Serialized JSON data field.
    pub data: String,
}

impl ServerEvent {
    /// Convenience wrapper that serialises `payload` into the SSE data field.
    pub fn json<E, T>(event: E, payload: &T) -> serde_json::Result<Self>
    where
        E: Into<Option<String>>,
        T: Serialize,
    {
        Ok(Self {
            event: event.into(),
            data: serde_json::to_string(payload)?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
/// Broadcast when a session is created or one of its turns is committed.
pub struct SessionChangedEvent(pub SessionSnapshot);

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast when a session is discarded.
pub struct SessionDeletedEvent {
    /// Identifier of the removed session.
    pub session_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast when the background tip fetch for a session resolves.
pub struct TipReadyEvent {
    /// Session the tip belongs to.
    pub session_id: Uuid,
    /// The advisory one-liner.
    pub tip: String,
}
