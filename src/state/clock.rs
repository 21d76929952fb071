use thiserror::Error;

/// Sequence position of the closing bull target (after segments 1-20).
pub const BULL_POSITION: u8 = 21;
/// Darts burned by an attempt that hits nothing.
const DARTS_PER_ATTEMPT: u32 = 3;

/// Progress of an around-the-clock round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockPhase {
    /// Targets remain on the course.
    InProgress,
    /// The bull was cleared; the course is complete.
    Finished,
}

/// Error raised when a clock throw cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThrowError {
    /// The reported dart number is not one of the three in an attempt.
    #[error("dart number {dart} is outside the valid 1-3 range")]
    DartOutOfRange {
        /// The rejected dart number.
        dart: u8,
    },
    /// The course was already completed.
    #[error("the round is over; restart to go around again")]
    RoundOver,
}

/// Around the clock: hit segments 1 through 20 and then the bull, in order.
///
/// Unlike the countdown match this variant tracks partial attempts: a hit
/// reports which dart of the attempt landed (1, 2 or 3) and only that many
/// darts are charged, while a full miss always burns three.
#[derive(Debug, Clone)]
pub struct ClockRound {
    current_target: u8,
    darts_thrown: u32,
    targets_cleared: u8,
    phase: ClockPhase,
}

impl Default for ClockRound {
    fn default() -> Self {
        Self {
            current_target: 1,
            darts_thrown: 0,
            targets_cleared: 0,
            phase: ClockPhase::InProgress,
        }
    }
}

impl ClockRound {
    /// Create a fresh round aiming at segment 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect the current phase.
    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    /// Target currently aimed at, `1..=21` where 21 is the bull.
    pub fn current_target(&self) -> u8 {
        self.current_target
    }

    /// Total darts thrown across all attempts.
    pub fn darts_thrown(&self) -> u32 {
        self.darts_thrown
    }

    /// Number of targets cleared so far.
    pub fn targets_cleared(&self) -> u8 {
        self.targets_cleared
    }

    /// Display label for the current target (`1`..`20`, or `BULL`).
    pub fn target_label(&self) -> String {
        if self.current_target == BULL_POSITION {
            "BULL".into()
        } else {
            self.current_target.to_string()
        }
    }

    /// Targets cleared per dart thrown, as a percentage. Reports `0.0`
    /// before the first dart.
    pub fn accuracy(&self) -> f64 {
        if self.darts_thrown == 0 {
            return 0.0;
        }
        f64::from(self.targets_cleared) / f64::from(self.darts_thrown) * 100.0
    }

    /// Record that dart number `dart` of the current attempt hit the target.
    ///
    /// Charges `dart` darts, clears the target, and either finishes the
    /// course (bull) or advances to the next segment. The target sequence
    /// only ever moves forward.
    pub fn record_hit(&mut self, dart: u8) -> Result<ClockPhase, ThrowError> {
        if self.phase != ClockPhase::InProgress {
            return Err(ThrowError::RoundOver);
        }
        if !(1..=3).contains(&dart) {
            return Err(ThrowError::DartOutOfRange { dart });
        }

        self.darts_thrown += u32::from(dart);
        self.targets_cleared += 1;
        if self.current_target == BULL_POSITION {
            self.phase = ClockPhase::Finished;
        } else {
            self.current_target += 1;
        }

        Ok(self.phase)
    }

    /// Record an attempt in which all three darts missed. The target does
    /// not advance.
    pub fn record_miss(&mut self) -> Result<(), ThrowError> {
        if self.phase != ClockPhase::InProgress {
            return Err(ThrowError::RoundOver);
        }
        self.darts_thrown += DARTS_PER_ATTEMPT;
        Ok(())
    }

    /// Reset to segment 1 with zero darts thrown. Valid from any phase.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_round_aims_at_one() {
        let round = ClockRound::new();
        assert_eq!(round.phase(), ClockPhase::InProgress);
        assert_eq!(round.current_target(), 1);
        assert_eq!(round.darts_thrown(), 0);
        assert_eq!(round.accuracy(), 0.0);
        assert_eq!(round.target_label(), "1");
    }

    #[test]
    fn second_dart_hit_advances_and_charges_two() {
        let mut round = ClockRound::new();
        let phase = round.record_hit(2).unwrap();
        assert_eq!(phase, ClockPhase::InProgress);
        assert_eq!(round.current_target(), 2);
        assert_eq!(round.darts_thrown(), 2);
        assert_eq!(round.accuracy(), 50.0);
    }

    #[test]
    fn three_full_misses_charge_nine_darts_without_advancing() {
        let mut round = ClockRound::new();
        round.record_hit(2).unwrap();
        for _ in 0..3 {
            round.record_miss().unwrap();
        }
        assert_eq!(round.current_target(), 2);
        assert_eq!(round.darts_thrown(), 11);
    }

    #[test]
    fn misses_alone_never_advance_the_target() {
        let mut round = ClockRound::new();
        for _ in 0..3 {
            round.record_miss().unwrap();
        }
        assert_eq!(round.current_target(), 1);
        assert_eq!(round.darts_thrown(), 9);
        assert_eq!(round.targets_cleared(), 0);
        assert_eq!(round.accuracy(), 0.0);
    }

    #[test]
    fn clearing_the_bull_finishes_the_course() {
        let mut round = ClockRound::new();
        for target in 1..=21u8 {
            assert_eq!(round.current_target(), target);
            let phase = round.record_hit(1).unwrap();
            if target == 21 {
                assert_eq!(phase, ClockPhase::Finished);
            } else {
                assert_eq!(phase, ClockPhase::InProgress);
            }
        }
        assert_eq!(round.darts_thrown(), 21);
        assert_eq!(round.targets_cleared(), 21);
        assert_eq!(round.accuracy(), 100.0);
        // Terminal: both operations are rejected.
        assert_eq!(round.record_hit(1).unwrap_err(), ThrowError::RoundOver);
        assert_eq!(round.record_miss().unwrap_err(), ThrowError::RoundOver);
    }

    #[test]
    fn bull_label_shows_once_the_twenty_falls() {
        let mut round = ClockRound::new();
        for _ in 0..20 {
            round.record_hit(1).unwrap();
        }
        assert_eq!(round.current_target(), BULL_POSITION);
        assert_eq!(round.target_label(), "BULL");
    }

    #[test]
    fn dart_number_outside_attempt_is_rejected() {
        let mut round = ClockRound::new();
        for dart in [0u8, 4] {
            let err = round.record_hit(dart).unwrap_err();
            assert_eq!(err, ThrowError::DartOutOfRange { dart });
        }
        assert_eq!(round.darts_thrown(), 0);
        assert_eq!(round.current_target(), 1);
    }

    #[test]
    fn restart_clears_progress_and_counters() {
        let mut round = ClockRound::new();
        round.record_hit(3).unwrap();
        round.record_miss().unwrap();
        round.restart();
        assert_eq!(round.current_target(), 1);
        assert_eq!(round.darts_thrown(), 0);
        assert_eq!(round.targets_cleared(), 0);
        assert_eq!(round.phase(), ClockPhase::InProgress);
    }
}
