use serde::Serialize;
use utoipa::ToSchema;

use crate::state::{
    bobs27::GauntletPhase, clock::ClockPhase, session::GameState, x01::MatchPhase,
};

/// Publicly visible game phase exposed to clients (REST/SSE).
#[derive(Debug, Serialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VisiblePhase {
    /// The game accepts further turn submissions.
    InProgress,
    /// Countdown checkout or a completed gauntlet.
    Won,
    /// Gauntlet score went negative.
    Lost,
    /// Around-the-clock course completed.
    Finished,
}

impl From<&GameState> for VisiblePhase {
    fn from(state: &GameState) -> Self {
        match state {
            GameState::Countdown(game) => match game.phase() {
                MatchPhase::InProgress { .. } => VisiblePhase::InProgress,
                MatchPhase::Won { .. } => VisiblePhase::Won,
            },
            GameState::Gauntlet(run) => match run.phase() {
                GauntletPhase::InProgress => VisiblePhase::InProgress,
                GauntletPhase::Won => VisiblePhase::Won,
                GauntletPhase::Lost => VisiblePhase::Lost,
            },
            GameState::AroundTheClock(round) => match round.phase() {
                ClockPhase::InProgress => VisiblePhase::InProgress,
                ClockPhase::Finished => VisiblePhase::Finished,
            },
        }
    }
}
