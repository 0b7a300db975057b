use core::fmt;

/// Errors produced by the game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameError {
    /// Sequence length is zero or exceeds [`MAX_SEQUENCE_LENGTH`](super::MAX_SEQUENCE_LENGTH).
    InvalidSequenceLength,
    /// A character is not one of the symbol codes `B`, `R`, `Y`, `G`.
    UnknownSymbol,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::InvalidSequenceLength => write!(f, "Invalid sequence length (must be 1-10)"),
            GameError::UnknownSymbol => write!(f, "Unknown symbol code (must be B, R, Y or G)"),
        }
    }
}
