//! Shared application state: the session registry, SSE hub, configuration,
//! and the advisory-text oracle handle.

/// Bob's 27 doubles-ladder state machine.
pub mod bobs27;
/// Around-the-clock state machine.
pub mod clock;
/// Practice sessions and the discipline tagged union.
pub mod session;
mod sse;
/// Countdown (501) match state machine.
pub mod x01;

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::{config::AppConfig, services::oracle::TipOracle, state::session::PracticeSession};

pub use self::sse::SseHub;

/// Cheaply cloneable handle to [`AppState`].
pub type SharedState = Arc<AppState>;

/// Broadcast capacity of the SSE hub; laggards skip events, never block.
const SSE_CAPACITY: usize = 16;

/// Central application state shared by routes, services, and background
/// tip fetches.
pub struct AppState {
    config: AppConfig,
    sessions: DashMap<Uuid, PracticeSession>,
    sse: SseHub,
    oracle: Arc<dyn TipOracle>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be
    /// cloned cheaply into spawned tasks.
    pub fn new(config: AppConfig, oracle: Arc<dyn TipOracle>) -> SharedState {
        Arc::new(Self {
            config,
            sessions: DashMap::new(),
            sse: SseHub::new(SSE_CAPACITY),
            oracle,
        })
    }

    /// Immutable runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Registry of live practice sessions keyed by their identifier.
    pub fn sessions(&self) -> &DashMap<Uuid, PracticeSession> {
        &self.sessions
    }

    /// Broadcast hub used for the SSE stream.
    pub fn sse(&self) -> &SseHub {
        &self.sse
    }

    /// Handle to the generative-text collaborator.
    pub fn oracle(&self) -> Arc<dyn TipOracle> {
        self.oracle.clone()
    }
}
