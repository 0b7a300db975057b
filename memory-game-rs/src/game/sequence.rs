//! Random symbol sequences.
//!
//! A [`Sequence`] is what the player has to reproduce each round. It is
//! generated fresh every round from the process-wide [`GameRng`], which is
//! seeded exactly once at startup from an entropy reading.

use core::fmt;
use core::str::FromStr;

use heapless::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::error::GameError;
use super::symbol::{Symbol, ALPHABET};
use super::{MAX_SEQUENCE_LENGTH, SYMBOL_COUNT};

/// Random source used for sequence generation.
pub type GameRng = ChaCha8Rng;

/// Build the process-wide random source from a single entropy reading.
///
/// On the board the reading is ADC noise from an unconnected pin, so two
/// power cycles rarely produce the same stream of sequences.
pub fn seeded_rng(entropy: u16) -> GameRng {
    GameRng::seed_from_u64(u64::from(entropy))
}

/// Ordered list of symbols for one round.
///
/// Always holds between 1 and [`MAX_SEQUENCE_LENGTH`] symbols; both
/// constructors reject anything else with
/// [`GameError::InvalidSequenceLength`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    symbols: Vec<Symbol, MAX_SEQUENCE_LENGTH>,
}

impl Sequence {
    /// Draw `length` symbols uniformly and independently from [`ALPHABET`].
    ///
    /// Sampling is with replacement, so repeats are expected.
    pub fn generate<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Self, GameError> {
        check_length(length)?;

        let mut symbols = Vec::new();
        for _ in 0..length {
            let symbol = ALPHABET[rng.gen_range(0..SYMBOL_COUNT)];
            // Capacity was checked above.
            let _ = symbols.push(symbol);
        }

        Ok(Self { symbols })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    /// Symbol codes as ASCII bytes, e.g. `b"BRYG"`.
    pub fn codes(&self) -> Vec<u8, MAX_SEQUENCE_LENGTH> {
        self.symbols.iter().map(|s| s.code()).collect()
    }
}

fn check_length(length: usize) -> Result<(), GameError> {
    if length == 0 || length > MAX_SEQUENCE_LENGTH {
        return Err(GameError::InvalidSequenceLength);
    }
    Ok(())
}

/// Parse a sequence from its uppercase code string, e.g. `"BRYG"`.
impl FromStr for Sequence {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_length(s.len())?;

        let mut symbols = Vec::new();
        for &byte in s.as_bytes() {
            let symbol = Symbol::from_code(byte).ok_or(GameError::UnknownSymbol)?;
            let _ = symbols.push(symbol);
        }

        Ok(Self { symbols })
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for symbol in self.iter() {
            write!(f, "{}", symbol.code() as char)?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Sequence {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=[u8]:a}", self.codes().as_slice());
    }
}
