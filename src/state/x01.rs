use thiserror::Error;

/// Points on the board when a leg starts.
pub const STARTING_SCORE: u16 = 501;
/// Highest total three darts can score (three treble twenties).
pub const MAX_TURN_POINTS: u16 = 180;
/// Darts consumed by one completed visit. Individual darts are not tracked.
const DARTS_PER_TURN: u32 = 3;

/// The two competing slots of a countdown match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSlot {
    /// First thrower; opens the match.
    One,
    /// Second thrower.
    Two,
}

impl PlayerSlot {
    /// The opposing slot.
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

/// Progress of a countdown match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Match underway; the named slot throws next.
    InProgress {
        /// Slot whose turn submission will be accepted.
        active: PlayerSlot,
    },
    /// The named slot checked out; no further turns are accepted.
    Won {
        /// Slot that reduced its score to exactly zero.
        winner: PlayerSlot,
    },
}

/// Per-player tally for a countdown match.
#[derive(Debug, Clone)]
pub struct PlayerScore {
    remaining: u16,
    darts_thrown: u32,
    visits: Vec<u16>,
}

impl PlayerScore {
    fn new() -> Self {
        Self {
            remaining: STARTING_SCORE,
            darts_thrown: 0,
            visits: Vec::new(),
        }
    }

    /// Points still required to reach zero.
    pub fn remaining(&self) -> u16 {
        self.remaining
    }

    /// Darts thrown so far; always three per completed visit.
    pub fn darts_thrown(&self) -> u32 {
        self.darts_thrown
    }

    /// Credited totals per visit, in order. A busted visit is recorded as 0.
    pub fn visits(&self) -> &[u16] {
        &self.visits
    }

    /// Mean of the credited visit totals, recomputed from the history on
    /// every call. Returns `0.0` before the first visit.
    pub fn average(&self) -> f64 {
        if self.visits.is_empty() {
            return 0.0;
        }
        let total: u32 = self.visits.iter().map(|visit| u32::from(*visit)).sum();
        f64::from(total) / self.visits.len() as f64
    }
}

/// Error raised when a countdown turn cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Turn total exceeds what three darts can score.
    #[error("turn total {points} is outside the valid 0-180 range")]
    PointsOutOfRange {
        /// The rejected turn total.
        points: u16,
    },
    /// The submitting slot is not the one at the oche.
    #[error("it is not {player:?}'s turn")]
    NotYourTurn {
        /// Slot that submitted out of turn.
        player: PlayerSlot,
    },
    /// The match already has a winner.
    #[error("the match is over; restart to play another leg")]
    MatchOver,
}

/// How a submitted turn was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Points credited; the throw passes to the other slot.
    Scored,
    /// The total would leave a negative score or exactly 1. Points are
    /// voided, the score stands, and the throw still passes.
    Bust,
    /// The total reduced the score to exactly zero, winning the match.
    Checkout,
}

/// Two-player race from 501 down to exactly zero.
///
/// Scoring follows the house rules of the original arena: a turn landing on
/// 1 busts just like going below zero, since no two-dart checkout can finish
/// from 1.
#[derive(Debug, Clone)]
pub struct CountdownMatch {
    players: [PlayerScore; 2],
    phase: MatchPhase,
}

impl Default for CountdownMatch {
    fn default() -> Self {
        Self {
            players: [PlayerScore::new(), PlayerScore::new()],
            phase: MatchPhase::InProgress {
                active: PlayerSlot::One,
            },
        }
    }
}

impl CountdownMatch {
    /// Create a fresh match with both slots on the starting score and
    /// player one throwing first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect the current phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Tally for the given slot.
    pub fn player(&self, slot: PlayerSlot) -> &PlayerScore {
        &self.players[slot.index()]
    }

    /// Resolve one three-dart visit for `player`.
    ///
    /// `points` must be within `[0, 180]` and `player` must be the active
    /// slot; otherwise the turn is rejected and no state changes. Every
    /// accepted turn consumes three darts, bust or not.
    pub fn submit_turn(
        &mut self,
        player: PlayerSlot,
        points: u16,
    ) -> Result<TurnOutcome, TurnError> {
        let MatchPhase::InProgress { active } = self.phase else {
            return Err(TurnError::MatchOver);
        };
        if player != active {
            return Err(TurnError::NotYourTurn { player });
        }
        if points > MAX_TURN_POINTS {
            return Err(TurnError::PointsOutOfRange { points });
        }

        let scorer = &mut self.players[active.index()];
        let outcome = match scorer.remaining.checked_sub(points) {
            None | Some(1) => {
                scorer.visits.push(0);
                TurnOutcome::Bust
            }
            Some(0) => {
                scorer.remaining = 0;
                scorer.visits.push(points);
                TurnOutcome::Checkout
            }
            Some(rest) => {
                scorer.remaining = rest;
                scorer.visits.push(points);
                TurnOutcome::Scored
            }
        };
        scorer.darts_thrown += DARTS_PER_TURN;

        self.phase = match outcome {
            TurnOutcome::Checkout => MatchPhase::Won { winner: active },
            TurnOutcome::Scored | TurnOutcome::Bust => MatchPhase::InProgress {
                active: active.other(),
            },
        };

        Ok(outcome)
    }

    /// Reset both tallies and hand the opening throw back to player one.
    /// Valid from any phase, including after a win.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Alternate strictly between the slots, submitting each total in order.
    fn drive(game: &mut CountdownMatch, turns: &[(PlayerSlot, u16)]) {
        for (slot, points) in turns {
            game.submit_turn(*slot, *points).unwrap();
        }
    }

    /// Bring player one down to 40 with player two idling on zero visits.
    fn match_at_forty() -> CountdownMatch {
        let mut game = CountdownMatch::new();
        drive(
            &mut game,
            &[
                (PlayerSlot::One, 180),
                (PlayerSlot::Two, 26),
                (PlayerSlot::One, 180),
                (PlayerSlot::Two, 26),
                (PlayerSlot::One, 101),
                (PlayerSlot::Two, 26),
            ],
        );
        assert_eq!(game.player(PlayerSlot::One).remaining(), 40);
        game
    }

    #[test]
    fn fresh_match_starts_at_501_with_player_one_active() {
        let game = CountdownMatch::new();
        assert_eq!(
            game.phase(),
            MatchPhase::InProgress {
                active: PlayerSlot::One
            }
        );
        for slot in [PlayerSlot::One, PlayerSlot::Two] {
            let tally = game.player(slot);
            assert_eq!(tally.remaining(), STARTING_SCORE);
            assert_eq!(tally.darts_thrown(), 0);
            assert!(tally.visits().is_empty());
            assert_eq!(tally.average(), 0.0);
        }
    }

    #[test]
    fn exact_forty_checks_out() {
        let mut game = match_at_forty();
        let outcome = game.submit_turn(PlayerSlot::One, 40).unwrap();
        assert_eq!(outcome, TurnOutcome::Checkout);
        assert_eq!(
            game.phase(),
            MatchPhase::Won {
                winner: PlayerSlot::One
            }
        );
        assert_eq!(game.player(PlayerSlot::One).remaining(), 0);
        assert_eq!(game.player(PlayerSlot::One).visits(), [180, 180, 101, 40]);
    }

    #[test]
    fn forty_one_on_forty_busts() {
        let mut game = match_at_forty();
        let outcome = game.submit_turn(PlayerSlot::One, 41).unwrap();
        assert_eq!(outcome, TurnOutcome::Bust);
        let tally = game.player(PlayerSlot::One);
        assert_eq!(tally.remaining(), 40);
        assert_eq!(tally.visits().last(), Some(&0));
        assert_eq!(
            game.phase(),
            MatchPhase::InProgress {
                active: PlayerSlot::Two
            }
        );
    }

    #[test]
    fn landing_on_one_busts() {
        let mut game = match_at_forty();
        let outcome = game.submit_turn(PlayerSlot::One, 39).unwrap();
        assert_eq!(outcome, TurnOutcome::Bust);
        assert_eq!(game.player(PlayerSlot::One).remaining(), 40);
    }

    #[test]
    fn out_of_range_total_is_rejected_without_mutation() {
        let mut game = CountdownMatch::new();
        let err = game.submit_turn(PlayerSlot::One, 181).unwrap_err();
        assert_eq!(err, TurnError::PointsOutOfRange { points: 181 });
        assert_eq!(game.player(PlayerSlot::One).remaining(), STARTING_SCORE);
        assert_eq!(game.player(PlayerSlot::One).darts_thrown(), 0);
        assert_eq!(
            game.phase(),
            MatchPhase::InProgress {
                active: PlayerSlot::One
            }
        );
    }

    #[test]
    fn inactive_slot_cannot_submit() {
        let mut game = CountdownMatch::new();
        let err = game.submit_turn(PlayerSlot::Two, 60).unwrap_err();
        assert_eq!(
            err,
            TurnError::NotYourTurn {
                player: PlayerSlot::Two
            }
        );
        assert!(game.player(PlayerSlot::Two).visits().is_empty());
    }

    #[test]
    fn no_turns_accepted_after_a_win() {
        let mut game = match_at_forty();
        game.submit_turn(PlayerSlot::One, 40).unwrap();
        let err = game.submit_turn(PlayerSlot::Two, 26).unwrap_err();
        assert_eq!(err, TurnError::MatchOver);
    }

    #[test]
    fn darts_count_three_per_turn_regardless_of_outcome() {
        let mut game = match_at_forty();
        // Bust, then a scoring turn from the other slot.
        game.submit_turn(PlayerSlot::One, 41).unwrap();
        game.submit_turn(PlayerSlot::Two, 100).unwrap();
        let one = game.player(PlayerSlot::One);
        let two = game.player(PlayerSlot::Two);
        assert_eq!(one.darts_thrown(), 3 * one.visits().len() as u32);
        assert_eq!(two.darts_thrown(), 3 * two.visits().len() as u32);
        assert_eq!(one.darts_thrown(), 12);
        assert_eq!(two.darts_thrown(), 12);
    }

    #[test]
    fn average_counts_busted_visits_as_zero() {
        let mut game = CountdownMatch::new();
        drive(
            &mut game,
            &[
                (PlayerSlot::One, 100),
                (PlayerSlot::Two, 60),
                (PlayerSlot::One, 40),
            ],
        );
        assert_eq!(game.player(PlayerSlot::One).average(), 70.0);
        // Drive player one to 181 remaining, then bust by landing on 1.
        drive(
            &mut game,
            &[(PlayerSlot::Two, 60), (PlayerSlot::One, 180), (PlayerSlot::Two, 60)],
        );
        assert_eq!(game.player(PlayerSlot::One).remaining(), 181);
        let outcome = game.submit_turn(PlayerSlot::One, 180).unwrap();
        assert_eq!(outcome, TurnOutcome::Bust);
        // (100 + 40 + 180 + 0) / 4
        assert_eq!(game.player(PlayerSlot::One).average(), 80.0);
    }

    #[test]
    fn five_tons_end_in_a_bust_on_one() {
        let mut game = CountdownMatch::new();
        // Player one scores 100 per visit; player two throws nothing.
        for _ in 0..4 {
            game.submit_turn(PlayerSlot::One, 100).unwrap();
            game.submit_turn(PlayerSlot::Two, 0).unwrap();
        }
        assert_eq!(game.player(PlayerSlot::One).remaining(), 101);

        // Fifth ton would land on exactly 1: bust, score unchanged.
        let outcome = game.submit_turn(PlayerSlot::One, 100).unwrap();
        assert_eq!(outcome, TurnOutcome::Bust);
        let tally = game.player(PlayerSlot::One);
        assert_eq!(tally.remaining(), 101);
        assert_eq!(tally.visits(), [100, 100, 100, 100, 0]);
        assert_eq!(tally.darts_thrown(), 15);
        assert_eq!(
            game.phase(),
            MatchPhase::InProgress {
                active: PlayerSlot::Two
            }
        );
    }

    #[test]
    fn restart_from_terminal_state_restores_initial_values() {
        let mut game = match_at_forty();
        game.submit_turn(PlayerSlot::One, 40).unwrap();
        game.restart();
        assert_eq!(
            game.phase(),
            MatchPhase::InProgress {
                active: PlayerSlot::One
            }
        );
        for slot in [PlayerSlot::One, PlayerSlot::Two] {
            assert_eq!(game.player(slot).remaining(), STARTING_SCORE);
            assert_eq!(game.player(slot).darts_thrown(), 0);
            assert!(game.player(slot).visits().is_empty());
        }
    }
}
