//! Board layer for the memory game.
//!
//! This crate drives the game's peripherals through `embedded-hal`,
//! `embedded-hal-async` and `embedded-io-async` traits, so the same round
//! logic runs against real RP2350 pins or against test doubles.
//!
//! - [`IndicatorPanel`] — four symbol LEDs and three speed-tier LEDs.
//! - [`FeedbackPlayer`] — win/lose melodies on any [`ToneOutput`].
//! - [`SerialConsole`] — line input and status output over a UART.
//! - [`SpeedInput`] — the potentiometer seam.
//! - [`RoundController`] — owns the [`GameState`] and runs rounds.
//!
//! # Quick Start
//!
//! ```ignore
//! use memory_game::game::{seeded_rng, GameConfig};
//! use memory_game_board::{Board, IndicatorPanel, RoundController};
//!
//! let board = Board {
//!     indicators: IndicatorPanel::new(symbol_leds, speed_leds),
//!     buzzer,
//!     speed_input,
//!     serial: uart,
//! };
//! let controller = RoundController::new(board, Delay, seeded_rng(noise), GameConfig::default())?;
//! controller.run().await;
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`].
//!
//! [`GameState`]: memory_game::game::GameState

#![cfg_attr(not(test), no_std)]

pub mod buzzer;
pub mod console;
pub mod error;
pub mod indicators;
pub mod round;
pub mod speed_input;

#[cfg(test)]
mod mock;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use buzzer::{FeedbackPlayer, ToneOutput};
pub use console::{Line, SerialConsole, LINE_CAPACITY};
pub use error::BoardError;
pub use indicators::IndicatorPanel;
pub use round::{Board, RoundController};
pub use speed_input::SpeedInput;
