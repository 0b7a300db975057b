use super::error::GameError;
use super::{DEFAULT_SEQUENCE_LENGTH, MAX_SEQUENCE_LENGTH};

/// Timing and length settings for a game.
///
/// [`GameConfig::default()`] reproduces the original board behaviour:
/// four-symbol rounds, a 200 ms gap between symbols and a one second pause
/// after each judged round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    /// Symbols per round. Must be in `1..=MAX_SEQUENCE_LENGTH`. Default: 4.
    pub sequence_length: usize,
    /// Dark gap after each symbol during presentation. Default: 200 ms.
    pub symbol_gap_ms: u32,
    /// Pause between the feedback melody and the next round. Default: 1000 ms.
    pub round_pause_ms: u32,
    /// Settle time after driving all outputs low at startup. Default: 50 ms.
    pub startup_settle_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            symbol_gap_ms: 200,
            round_pause_ms: 1000,
            startup_settle_ms: 50,
        }
    }
}

impl GameConfig {
    /// Default timings with a different round length.
    ///
    /// Returns [`GameError::InvalidSequenceLength`] if `length` is zero or
    /// above [`MAX_SEQUENCE_LENGTH`].
    pub fn with_sequence_length(length: usize) -> Result<Self, GameError> {
        let config = Self {
            sequence_length: length,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.sequence_length == 0 || self.sequence_length > MAX_SEQUENCE_LENGTH {
            return Err(GameError::InvalidSequenceLength);
        }
        Ok(())
    }
}
