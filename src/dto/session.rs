use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dto::{format_system_time, phase::VisiblePhase},
    state::{
        bobs27::DoublesGauntlet,
        clock::ClockRound,
        session::{GameMode, GameState, PracticeSession},
        x01::{CountdownMatch, MatchPhase, PlayerSlot},
    },
};

/// Wire representation of a practice discipline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameModeDto {
    /// Two-player 501 race to zero.
    Countdown,
    /// Bob's 27 doubles ladder.
    Gauntlet,
    /// Around the clock.
    Clock,
}

impl From<GameModeDto> for GameMode {
    fn from(value: GameModeDto) -> Self {
        match value {
            GameModeDto::Countdown => GameMode::Countdown,
            GameModeDto::Gauntlet => GameMode::Gauntlet,
            GameModeDto::Clock => GameMode::AroundTheClock,
        }
    }
}

impl From<GameMode> for GameModeDto {
    fn from(value: GameMode) -> Self {
        match value {
            GameMode::Countdown => GameModeDto::Countdown,
            GameMode::Gauntlet => GameModeDto::Gauntlet,
            GameMode::AroundTheClock => GameModeDto::Clock,
        }
    }
}

/// Wire representation of a countdown match slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlayerSlotDto {
    /// First thrower.
    One,
    /// Second thrower.
    Two,
}

impl From<PlayerSlotDto> for PlayerSlot {
    fn from(value: PlayerSlotDto) -> Self {
        match value {
            PlayerSlotDto::One => PlayerSlot::One,
            PlayerSlotDto::Two => PlayerSlot::Two,
        }
    }
}

impl From<PlayerSlot> for PlayerSlotDto {
    fn from(value: PlayerSlot) -> Self {
        match value {
            PlayerSlot::One => PlayerSlotDto::One,
            PlayerSlot::Two => PlayerSlotDto::Two,
        }
    }
}

/// Compact listing entry for a session.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionSummary {
    /// Session identifier.
    pub id: Uuid,
    /// Discipline being practiced.
    pub mode: GameModeDto,
    /// Current phase of the underlying game.
    pub phase: VisiblePhase,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp of the last committed mutation.
    pub updated_at: String,
}

/// Full state snapshot of a session, pushed after every committed mutation.
/// Exactly one of the per-discipline sections is present, matching `mode`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionSnapshot {
    /// Session identifier.
    pub id: Uuid,
    /// Discipline being practiced.
    pub mode: GameModeDto,
    /// Current phase of the underlying game.
    pub phase: VisiblePhase,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp of the last committed mutation.
    pub updated_at: String,
    /// Advisory training tip once the background fetch resolves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    /// Present for countdown sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown: Option<CountdownSnapshot>,
    /// Present for gauntlet sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gauntlet: Option<GauntletSnapshot>,
    /// Present for clock sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<ClockSnapshot>,
}

/// Countdown match state for rendering both score panels.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CountdownSnapshot {
    /// Slot whose submission will be accepted next, if the match runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<PlayerSlotDto>,
    /// Winning slot once the match is decided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<PlayerSlotDto>,
    /// Both player tallies, slot one first.
    pub players: Vec<PlayerSnapshot>,
}

/// One countdown player's tally.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlayerSnapshot {
    /// Which slot this tally belongs to.
    pub slot: PlayerSlotDto,
    /// Points still required to reach zero.
    pub remaining: u16,
    /// Darts thrown; three per completed visit.
    pub darts_thrown: u32,
    /// Mean credited visit total, `0.0` before the first visit.
    pub average: f64,
    /// Credited totals per visit (0 for a bust), in order.
    pub visits: Vec<u16>,
}

/// Gauntlet run state for rendering the ladder position.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GauntletSnapshot {
    /// Current banked score; negative only in the lost terminal state.
    pub remaining: i32,
    /// Position in the 21-target ladder.
    pub target_index: usize,
    /// Display label of the current target (`D1`..`D20`, `Bull`).
    pub target_label: String,
    /// Scoring value of the current target.
    pub target_value: i32,
}

/// Clock round state for rendering the course position.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClockSnapshot {
    /// Target currently aimed at, `1..=21` where 21 is the bull.
    pub current_target: u8,
    /// Display label of the current target (`1`..`20`, `BULL`).
    pub target_label: String,
    /// Total darts thrown across all attempts.
    pub darts_thrown: u32,
    /// Number of targets cleared.
    pub targets_cleared: u8,
    /// Targets cleared per dart thrown, as a percentage.
    pub accuracy: f64,
}

impl From<&CountdownMatch> for CountdownSnapshot {
    fn from(game: &CountdownMatch) -> Self {
        let (active, winner) = match game.phase() {
            MatchPhase::InProgress { active } => (Some(active.into()), None),
            MatchPhase::Won { winner } => (None, Some(winner.into())),
        };
        let players = [PlayerSlot::One, PlayerSlot::Two]
            .into_iter()
            .map(|slot| {
                let tally = game.player(slot);
                PlayerSnapshot {
                    slot: slot.into(),
                    remaining: tally.remaining(),
                    darts_thrown: tally.darts_thrown(),
                    average: tally.average(),
                    visits: tally.visits().to_vec(),
                }
            })
            .collect();
        Self {
            active,
            winner,
            players,
        }
    }
}

impl From<&DoublesGauntlet> for GauntletSnapshot {
    fn from(run: &DoublesGauntlet) -> Self {
        Self {
            remaining: run.remaining(),
            target_index: run.target_index(),
            target_label: DoublesGauntlet::target_label(run.target_index()),
            target_value: DoublesGauntlet::target_value(run.target_index()),
        }
    }
}

impl From<&ClockRound> for ClockSnapshot {
    fn from(round: &ClockRound) -> Self {
        Self {
            current_target: round.current_target(),
            target_label: round.target_label(),
            darts_thrown: round.darts_thrown(),
            targets_cleared: round.targets_cleared(),
            accuracy: round.accuracy(),
        }
    }
}

impl From<&PracticeSession> for SessionSnapshot {
    fn from(session: &PracticeSession) -> Self {
        let (countdown, gauntlet, clock) = match &session.game {
            GameState::Countdown(game) => (Some(game.into()), None, None),
            GameState::Gauntlet(run) => (None, Some(run.into()), None),
            GameState::AroundTheClock(round) => (None, None, Some(round.into())),
        };
        Self {
            id: session.id,
            mode: session.game.mode().into(),
            phase: (&session.game).into(),
            created_at: format_system_time(session.created_at),
            updated_at: format_system_time(session.updated_at),
            tip: session.tip.clone(),
            countdown,
            gauntlet,
            clock,
        }
    }
}

impl From<&PracticeSession> for SessionSummary {
    fn from(session: &PracticeSession) -> Self {
        Self {
            id: session.id,
            mode: session.game.mode().into(),
            phase: (&session.game).into(),
            created_at: format_system_time(session.created_at),
            updated_at: format_system_time(session.updated_at),
        }
    }
}
