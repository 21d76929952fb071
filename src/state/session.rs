use std::time::SystemTime;

use uuid::Uuid;

use crate::state::{
    bobs27::{DoublesGauntlet, GauntletPhase},
    clock::{ClockPhase, ClockRound},
    x01::{CountdownMatch, MatchPhase},
};

/// Selectable practice disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Two-player 501 race to zero.
    Countdown,
    /// Bob's 27 doubles ladder.
    Gauntlet,
    /// Around the clock, 1 through 20 and the bull.
    AroundTheClock,
}

impl GameMode {
    /// Human-readable name used in oracle prompts and logs.
    pub fn title(self) -> &'static str {
        match self {
            GameMode::Countdown => "501 Match",
            GameMode::Gauntlet => "Bob's 27",
            GameMode::AroundTheClock => "Around the Clock",
        }
    }

    /// Stable key used in configuration files.
    pub fn key(self) -> &'static str {
        match self {
            GameMode::Countdown => "countdown",
            GameMode::Gauntlet => "gauntlet",
            GameMode::AroundTheClock => "clock",
        }
    }
}

/// Variant-specific state carried by a session, one arm per discipline.
///
/// The disciplines share no behaviour beyond construction and restart, so
/// they stay separate state machines behind a plain tagged union instead of
/// a common gameplay trait.
#[derive(Debug, Clone)]
pub enum GameState {
    /// Two-player countdown match.
    Countdown(CountdownMatch),
    /// Single-player doubles gauntlet.
    Gauntlet(DoublesGauntlet),
    /// Single-player clock round.
    AroundTheClock(ClockRound),
}

impl GameState {
    /// Fresh state for the given discipline.
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Countdown => GameState::Countdown(CountdownMatch::new()),
            GameMode::Gauntlet => GameState::Gauntlet(DoublesGauntlet::new()),
            GameMode::AroundTheClock => GameState::AroundTheClock(ClockRound::new()),
        }
    }

    /// Discipline this state belongs to.
    pub fn mode(&self) -> GameMode {
        match self {
            GameState::Countdown(_) => GameMode::Countdown,
            GameState::Gauntlet(_) => GameMode::Gauntlet,
            GameState::AroundTheClock(_) => GameMode::AroundTheClock,
        }
    }

    /// True once the variant reached a terminal phase; no further turn
    /// submissions are accepted until a restart.
    pub fn is_over(&self) -> bool {
        match self {
            GameState::Countdown(game) => matches!(game.phase(), MatchPhase::Won { .. }),
            GameState::Gauntlet(run) => run.phase() != GauntletPhase::InProgress,
            GameState::AroundTheClock(round) => round.phase() == ClockPhase::Finished,
        }
    }

    /// Reset the variant to its documented initial state.
    pub fn restart(&mut self) {
        match self {
            GameState::Countdown(game) => game.restart(),
            GameState::Gauntlet(run) => run.restart(),
            GameState::AroundTheClock(round) => round.restart(),
        }
    }
}

/// One in-memory practice run of a single discipline.
///
/// Sessions live only for as long as the process; nothing is persisted.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    /// Stable identifier handed to the presentation layer.
    pub id: Uuid,
    /// Creation timestamp for display and ordering.
    pub created_at: SystemTime,
    /// Last time a turn, restart, or tip landed on this session.
    pub updated_at: SystemTime,
    /// Advisory one-liner fetched in the background; presentation garnish
    /// only, never consulted by the scoring rules.
    pub tip: Option<String>,
    /// The discipline state machine.
    pub game: GameState,
}

impl PracticeSession {
    /// Start a session of the given discipline.
    pub fn new(mode: GameMode) -> Self {
        let now = SystemTime::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            tip: None,
            game: GameState::for_mode(mode),
        }
    }

    /// Bump the update timestamp after a committed mutation.
    pub fn touch(&mut self) {
        self.updated_at = SystemTime::now();
    }
}
