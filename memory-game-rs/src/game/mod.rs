//! Memory game rules and round state.
//!
//! This module provides the [`GameState`] owned by the round controller,
//! plus the pure building blocks each round is made from.
//!
//! # Round lifecycle
//!
//! ```text
//! read speed ─► show tier ─► generate ─► present ─► await line ─► judge
//!      ▲                                                              │
//!      └──────────────────── pause ◄── melody ◄── report ◄────────────┘
//! ```
//!
//! - [`speed`] maps the raw potentiometer reading to a hold duration and a
//!   [`SpeedTier`].
//! - [`sequence`] draws a fresh [`Sequence`] from the four-symbol alphabet.
//! - [`judge`] compares the typed-back line against the sequence.
//! - [`melody`] holds the win and lose tunes.
//! - [`state`] ties them together and tracks the win streak.
//!
//! # `no_std` Compatibility
//!
//! No heap allocation. Sequences live in a fixed-capacity
//! [`heapless::Vec`] sized by [`MAX_SEQUENCE_LENGTH`].

mod config;
mod error;
pub mod judge;
pub mod melody;
pub mod sequence;
pub mod speed;
mod state;
mod symbol;

pub use config::GameConfig;
pub use error::GameError;
pub use judge::{verify, verify_bytes};
pub use melody::{Melody, Note};
pub use sequence::{seeded_rng, GameRng, Sequence};
pub use speed::{SpeedReading, SpeedTier};
pub use state::{GameState, Phase, RoundOutcome};
pub use symbol::{Symbol, ALPHABET};

/// Number of symbols in the alphabet (one per colored indicator).
pub const SYMBOL_COUNT: usize = 4;

/// Storage bound for a sequence. The round length never grows past the
/// configured value; this only caps what a configuration may ask for.
pub const MAX_SEQUENCE_LENGTH: usize = 10;

/// Round length used by [`GameConfig::default()`].
pub const DEFAULT_SEQUENCE_LENGTH: usize = 4;
