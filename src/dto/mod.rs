//! Request/response shapes exposed over REST and SSE, kept separate from
//! the engine types in `state/`.

use std::time::SystemTime;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod coach;
pub mod health;
pub mod phase;
pub mod practice;
pub mod session;
pub mod sse;

fn format_system_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}
