use super::SYMBOL_COUNT;

/// One element of a memory sequence, bound to one colored indicator.
///
/// The discriminant is the symbol's index into [`ALPHABET`] and into the
/// code table below, so the mapping from symbol to indicator slot is a
/// table read rather than a branch.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    Blue = 0,
    Red = 1,
    Yellow = 2,
    Green = 3,
}

/// The sampling alphabet, in index order.
pub const ALPHABET: [Symbol; SYMBOL_COUNT] =
    [Symbol::Blue, Symbol::Red, Symbol::Yellow, Symbol::Green];

/// Wire code sent and accepted over the serial console, indexed by symbol.
const SYMBOL_CODES: [u8; SYMBOL_COUNT] = *b"BRYG";

impl Symbol {
    /// Index of this symbol in [`ALPHABET`]; also the indicator slot it drives.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Uppercase ASCII code for this symbol (`B`, `R`, `Y` or `G`).
    pub const fn code(self) -> u8 {
        SYMBOL_CODES[self.index()]
    }

    /// Look up a symbol by its exact uppercase code.
    ///
    /// Lowercase codes are **not** accepted here; callers that want
    /// case-insensitive matching normalise first.
    pub fn from_code(code: u8) -> Option<Self> {
        SYMBOL_CODES
            .iter()
            .position(|&c| c == code)
            .map(|idx| ALPHABET[idx])
    }
}
