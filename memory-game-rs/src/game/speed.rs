//! Potentiometer speed mapping.
//!
//! The raw reading in `[0, RAW_MAX]` is mapped linearly onto the symbol
//! hold duration in `[DURATION_MIN_MS, DURATION_MAX_MS]`: turning the knob
//! down makes the sequence play faster.
//!
//! ```text
//! raw       0 ─────────────────────────────── 1023
//! duration  200 ──── 400 ──────── 700 ─────── 1000 ms
//! tier      │  Fast  │   Medium   │   Slow    │
//! ```

/// Largest raw reading (10-bit scale).
pub const RAW_MAX: u16 = 1023;

/// Hold duration at raw = 0.
pub const DURATION_MIN_MS: u32 = 200;

/// Hold duration at raw = [`RAW_MAX`].
pub const DURATION_MAX_MS: u32 = 1000;

/// Upper bound (inclusive) of the [`SpeedTier::Fast`] tier.
pub const FAST_MAX_MS: u32 = 400;

/// Upper bound (inclusive) of the [`SpeedTier::Medium`] tier.
pub const MEDIUM_MAX_MS: u32 = 700;

/// Coarse speed classification shown on the three speed indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedTier {
    Fast = 0,
    Medium = 1,
    Slow = 2,
}

/// Number of speed tiers (and speed indicators).
pub const SPEED_TIER_COUNT: usize = 3;

const TIER_NAMES: [&str; SPEED_TIER_COUNT] = ["FAST", "MEDIUM", "SLOW"];

impl SpeedTier {
    /// Indicator slot for this tier.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Uppercase label used in console reports.
    pub const fn name(self) -> &'static str {
        TIER_NAMES[self.index()]
    }
}

/// Map a raw reading onto the hold duration in milliseconds.
///
/// Integer arithmetic with truncating division, so `512` maps to `600`.
/// Readings above [`RAW_MAX`] are clamped.
pub fn compute_duration(raw: u16) -> u32 {
    let raw = u32::from(raw.min(RAW_MAX));
    DURATION_MIN_MS + raw * (DURATION_MAX_MS - DURATION_MIN_MS) / u32::from(RAW_MAX)
}

/// Classify a hold duration. Boundaries are inclusive on the lower tier.
pub fn classify(duration_ms: u32) -> SpeedTier {
    if duration_ms <= FAST_MAX_MS {
        SpeedTier::Fast
    } else if duration_ms <= MEDIUM_MAX_MS {
        SpeedTier::Medium
    } else {
        SpeedTier::Slow
    }
}

/// Rescale an ADC sample of `resolution_bits` bits onto `[0, RAW_MAX]`.
///
/// The RP2350 ADC returns 12-bit samples; the speed mapping is defined on a
/// 10-bit scale.
pub fn scale_sample(sample: u16, resolution_bits: u8) -> u16 {
    match resolution_bits.min(16) {
        10 => sample.min(RAW_MAX),
        bits if bits > 10 => (sample >> (bits - 10)).min(RAW_MAX),
        bits => (sample << (10 - bits)).min(RAW_MAX),
    }
}

/// One speed measurement: the raw reading and everything derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedReading {
    /// Raw reading, clamped to `[0, RAW_MAX]`.
    pub raw: u16,
    /// Symbol hold duration in milliseconds.
    pub duration_ms: u32,
    pub tier: SpeedTier,
}

impl SpeedReading {
    pub fn from_raw(raw: u16) -> Self {
        let raw = raw.min(RAW_MAX);
        let duration_ms = compute_duration(raw);
        Self {
            raw,
            duration_ms,
            tier: classify(duration_ms),
        }
    }
}

impl Default for SpeedReading {
    /// The slowest setting, used before the first reading is taken.
    fn default() -> Self {
        Self::from_raw(RAW_MAX)
    }
}
