use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dto::session::{GameModeDto, PlayerSlotDto, SessionSnapshot},
    state::x01::TurnOutcome,
};

/// Payload used to open a new practice session.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSessionRequest {
    /// Discipline to practice.
    pub mode: GameModeDto,
}

/// One three-dart visit in a countdown match.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct TurnRequest {
    /// Slot submitting the visit; must be the active one.
    pub player: PlayerSlotDto,
    /// Total scored by the visit's three darts.
    #[validate(range(min = 0, max = 180))]
    pub points: u16,
}

/// One three-dart attempt at the current gauntlet target.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AttemptRequest {
    /// Darts that landed in the target, 0 to 3.
    #[validate(range(min = 0, max = 3))]
    pub hits: u8,
}

/// A confirmed hit in a clock round.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct HitRequest {
    /// Which dart of the attempt landed (1, 2, or 3); that many darts are
    /// charged.
    #[validate(range(min = 1, max = 3))]
    pub dart: u8,
}

/// Wire representation of a resolved countdown turn.
#[derive(Debug, Clone, Copy, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcomeDto {
    /// Points credited; throw passes.
    Scored,
    /// Points voided; score stands and the throw still passes.
    Bust,
    /// Score reached exactly zero; match won.
    Checkout,
}

impl From<TurnOutcome> for TurnOutcomeDto {
    fn from(value: TurnOutcome) -> Self {
        match value {
            TurnOutcome::Scored => TurnOutcomeDto::Scored,
            TurnOutcome::Bust => TurnOutcomeDto::Bust,
            TurnOutcome::Checkout => TurnOutcomeDto::Checkout,
        }
    }
}

/// Response to a countdown turn: how it resolved plus the refreshed state.
#[derive(Debug, Serialize, ToSchema)]
pub struct TurnResponse {
    /// How the visit resolved.
    pub outcome: TurnOutcomeDto,
    /// Snapshot after the turn was committed.
    pub session: SessionSnapshot,
}
