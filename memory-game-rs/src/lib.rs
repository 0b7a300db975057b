//! Game logic for a four-color memory sequence game.
//!
//! Everything in this crate is hardware-independent: it knows about
//! symbols, sequences, speed tiers and melodies, but nothing about pins,
//! timers or serial ports. The `memory-game-board` crate drives real
//! peripherals from the types defined here.
//!
//! # Crate Features
//!
//! - **`defmt`** — derives [`defmt::Format`] for the public types.

#![cfg_attr(not(test), no_std)]

pub mod game;
