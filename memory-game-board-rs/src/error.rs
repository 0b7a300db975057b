//! Error types for the board layer.

use core::fmt;

use embedded_hal::digital;
use memory_game::game::GameError;

/// Errors that can occur while driving the game's peripherals.
///
/// Peripheral errors are reduced to their portable `ErrorKind` (or to a
/// bare variant for the crate's own traits), so this enum is non-generic
/// and one type covers every peripheral the round controller touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// An indicator LED output failed.
    Indicator(digital::ErrorKind),
    /// The tone output failed to start or stop a note.
    Tone,
    /// The potentiometer could not be read.
    SpeedInput,
    /// UART read or write failure.
    Serial(embedded_io_async::ErrorKind),
    /// The serial port reported end of input.
    InputClosed,
    /// A status line did not fit the output buffer.
    Format,
    /// Game rule violation (invalid configuration).
    Game(GameError),
}

impl BoardError {
    pub(crate) fn indicator<E: digital::Error>(error: E) -> Self {
        BoardError::Indicator(error.kind())
    }

    pub(crate) fn serial<E: embedded_io_async::Error>(error: E) -> Self {
        BoardError::Serial(error.kind())
    }
}

// Allow ergonomic `?` propagation from game rule errors.
impl From<GameError> for BoardError {
    fn from(error: GameError) -> Self {
        BoardError::Game(error)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::Indicator(kind) => write!(f, "Indicator output error: {:?}", kind),
            BoardError::Tone => write!(f, "Tone output error"),
            BoardError::SpeedInput => write!(f, "Speed input read error"),
            BoardError::Serial(kind) => write!(f, "Serial error: {:?}", kind),
            BoardError::InputClosed => write!(f, "Serial input closed"),
            BoardError::Format => write!(f, "Status line too long"),
            BoardError::Game(e) => write!(f, "Game error: {}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BoardError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            BoardError::Indicator(_kind) => defmt::write!(f, "Indicator output error"),
            BoardError::Tone => defmt::write!(f, "Tone output error"),
            BoardError::SpeedInput => defmt::write!(f, "Speed input read error"),
            BoardError::Serial(_kind) => defmt::write!(f, "Serial error"),
            BoardError::InputClosed => defmt::write!(f, "Serial input closed"),
            BoardError::Format => defmt::write!(f, "Status line too long"),
            BoardError::Game(e) => defmt::write!(f, "Game error: {}", e),
        }
    }
}
