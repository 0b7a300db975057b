use rand::Rng;

use super::config::GameConfig;
use super::error::GameError;
use super::judge::verify_bytes;
use super::melody::Melody;
use super::sequence::Sequence;
use super::speed::SpeedReading;

/// Where the round controller is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Reading speed, generating and showing the sequence.
    Presenting,
    /// Sequence shown; waiting (indefinitely) for a submitted line.
    AwaitingInput,
    /// A line arrived and is being judged and reported.
    Judging,
}

/// Result of judging one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundOutcome {
    /// Correct; `streak` is the win streak after incrementing.
    Win { streak: u32 },
    /// Incorrect; `ended_streak` is the streak that was reset to zero.
    Loss { ended_streak: u32 },
}

impl RoundOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, RoundOutcome::Win { .. })
    }

    /// Machine-readable outcome code written to the console: `1` or `0`.
    pub fn code(&self) -> u8 {
        match self {
            RoundOutcome::Win { .. } => b'1',
            RoundOutcome::Loss { .. } => b'0',
        }
    }

    pub fn melody(&self) -> Melody {
        match self {
            RoundOutcome::Win { .. } => Melody::Win,
            RoundOutcome::Loss { .. } => Melody::Lose,
        }
    }
}

/// All mutable game state, owned by the round controller.
///
/// Only the win streak carries over from one judged round to the next; the
/// sequence and speed reading are replaced every round.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    sequence: Option<Sequence>,
    speed: SpeedReading,
    win_streak: u32,
    phase: Phase,
    rounds_started: u32,
}

impl GameState {
    /// Returns [`GameError::InvalidSequenceLength`] if `config` is invalid.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            sequence: None,
            speed: SpeedReading::default(),
            win_streak: 0,
            phase: Phase::Presenting,
            rounds_started: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current round's sequence, `None` before the first round.
    pub fn sequence(&self) -> Option<&Sequence> {
        self.sequence.as_ref()
    }

    pub fn speed(&self) -> SpeedReading {
        self.speed
    }

    pub fn win_streak(&self) -> u32 {
        self.win_streak
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    // ── Round setup ──────────────────────────────────────────────────

    /// Start setting up a round from a fresh potentiometer reading.
    pub fn update_speed(&mut self, raw: u16) -> SpeedReading {
        self.phase = Phase::Presenting;
        self.speed = SpeedReading::from_raw(raw);
        self.speed
    }

    /// Replace the sequence with a new one of the configured length.
    pub fn generate_sequence<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&Sequence, GameError> {
        self.phase = Phase::Presenting;
        let sequence = Sequence::generate(self.config.sequence_length, rng)?;
        self.rounds_started = self.rounds_started.saturating_add(1);
        Ok(self.sequence.insert(sequence))
    }

    /// Presentation finished; the next line read is this round's answer.
    pub fn await_input(&mut self) {
        self.phase = Phase::AwaitingInput;
    }

    // ── Judging ──────────────────────────────────────────────────────

    /// Judge a trimmed submission and update the win streak.
    ///
    /// A submission arriving before any sequence exists is judged wrong.
    pub fn judge(&mut self, submission: &[u8]) -> RoundOutcome {
        self.phase = Phase::Judging;
        let correct = self
            .sequence
            .as_ref()
            .is_some_and(|expected| verify_bytes(submission, expected));
        self.record(correct)
    }

    /// End the round as a loss without comparing anything, for input that
    /// could not be received whole.
    pub fn forfeit(&mut self) -> RoundOutcome {
        self.phase = Phase::Judging;
        self.record(false)
    }

    fn record(&mut self, correct: bool) -> RoundOutcome {
        if correct {
            self.win_streak = self.win_streak.saturating_add(1);
            RoundOutcome::Win { streak: self.win_streak }
        } else {
            let ended_streak = self.win_streak;
            self.win_streak = 0;
            RoundOutcome::Loss { ended_streak }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::seeded_rng;
    use crate::game::speed::SpeedTier;

    fn state_with(sequence: &str) -> GameState {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        state.sequence = Some(sequence.parse().unwrap());
        state.await_input();
        state
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_state_is_empty() {
        let state = GameState::new(GameConfig::default()).unwrap();
        assert!(state.sequence().is_none());
        assert_eq!(state.win_streak(), 0);
        assert_eq!(state.phase(), Phase::Presenting);
        assert_eq!(state.rounds_started(), 0);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = GameConfig {
            sequence_length: 0,
            ..GameConfig::default()
        };
        assert_eq!(GameState::new(config).unwrap_err(), GameError::InvalidSequenceLength);
    }

    // ── Round setup ──────────────────────────────────────────────────

    #[test]
    fn round_setup_moves_through_phases() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        let mut rng = seeded_rng(3);

        let reading = state.update_speed(0);
        assert_eq!(reading.tier, SpeedTier::Fast);
        assert_eq!(state.speed().duration_ms, 200);
        assert_eq!(state.phase(), Phase::Presenting);

        let len = state.generate_sequence(&mut rng).unwrap().len();
        assert_eq!(len, 4);
        assert_eq!(state.rounds_started(), 1);

        state.await_input();
        assert_eq!(state.phase(), Phase::AwaitingInput);
    }

    #[test]
    fn generate_overwrites_previous_sequence() {
        let mut state = GameState::new(GameConfig::with_sequence_length(10).unwrap()).unwrap();
        let mut rng = seeded_rng(11);
        let first = state.generate_sequence(&mut rng).unwrap().clone();
        let mut replaced = false;
        for _ in 0..10 {
            if state.generate_sequence(&mut rng).unwrap() != &first {
                replaced = true;
            }
        }
        assert!(replaced);
        assert_eq!(state.sequence().unwrap().len(), 10);
    }

    // ── Judging ──────────────────────────────────────────────────────

    #[test]
    fn lowercase_submission_wins() {
        let mut state = state_with("BRYG");
        assert_eq!(state.judge(b"bryg"), RoundOutcome::Win { streak: 1 });
        assert_eq!(state.win_streak(), 1);
        assert_eq!(state.phase(), Phase::Judging);
    }

    #[test]
    fn short_submission_loses() {
        let mut state = state_with("BRYG");
        let outcome = state.judge(b"BRY");
        assert_eq!(outcome, RoundOutcome::Loss { ended_streak: 0 });
        assert_eq!(state.win_streak(), 0);
    }

    #[test]
    fn invalid_symbol_loses() {
        let mut state = state_with("BRYG");
        assert!(!state.judge(b"BRYX").is_win());
    }

    #[test]
    fn streak_counts_wins_and_resets_on_loss() {
        let mut state = state_with("BRYG");
        assert_eq!(state.judge(b"BRYG"), RoundOutcome::Win { streak: 1 });
        assert_eq!(state.judge(b"BRYG"), RoundOutcome::Win { streak: 2 });
        assert_eq!(state.judge(b"GGGG"), RoundOutcome::Loss { ended_streak: 2 });
        assert_eq!(state.win_streak(), 0);
        assert_eq!(state.judge(b"GGGG"), RoundOutcome::Loss { ended_streak: 0 });
    }

    #[test]
    fn submission_before_first_round_loses() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        assert_eq!(state.judge(b""), RoundOutcome::Loss { ended_streak: 0 });
    }

    #[test]
    fn forfeit_loses_and_ends_streak() {
        let mut state = state_with("BRYG");
        state.judge(b"BRYG");
        assert_eq!(state.forfeit(), RoundOutcome::Loss { ended_streak: 1 });
        assert_eq!(state.win_streak(), 0);
        assert_eq!(state.phase(), Phase::Judging);
    }

    #[test]
    fn counters_saturate() {
        let mut state = state_with("BRYG");
        state.win_streak = u32::MAX;
        state.rounds_started = u32::MAX;
        assert_eq!(state.judge(b"BRYG"), RoundOutcome::Win { streak: u32::MAX });
        state.generate_sequence(&mut seeded_rng(5)).unwrap();
        assert_eq!(state.rounds_started(), u32::MAX);
    }

    #[test]
    fn outcome_codes_and_melodies() {
        let win = RoundOutcome::Win { streak: 3 };
        let loss = RoundOutcome::Loss { ended_streak: 3 };
        assert_eq!(win.code(), b'1');
        assert_eq!(loss.code(), b'0');
        assert_eq!(win.melody(), Melody::Win);
        assert_eq!(loss.melody(), Melody::Lose);
    }
}
