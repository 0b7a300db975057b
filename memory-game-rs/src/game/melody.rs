//! Win and lose melodies.
//!
//! Each note starts [`Note::spacing_ms`] after the previous one started:
//! the tone sounds for `duration_ms`, then the output is silent for the
//! remaining [`Note::rest_ms`].

/// A single tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

impl Note {
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self { frequency_hz, duration_ms }
    }

    /// Time from the start of this note to the start of the next one:
    /// `duration * 1.3`, truncated.
    pub const fn spacing_ms(&self) -> u32 {
        self.duration_ms * 13 / 10
    }

    /// Silence after the tone stops, before the next note.
    pub const fn rest_ms(&self) -> u32 {
        self.spacing_ms() - self.duration_ms
    }
}

/// C5 E5 G5 C6, rising.
pub const WIN_MELODY: [Note; 4] = [
    Note::new(523, 150),
    Note::new(659, 150),
    Note::new(784, 300),
    Note::new(1047, 600),
];

/// G3 D3 C3 G2, falling.
pub const LOSE_MELODY: [Note; 4] = [
    Note::new(196, 400),
    Note::new(147, 400),
    Note::new(131, 400),
    Note::new(98, 800),
];

/// Which feedback tune to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Melody {
    Win,
    Lose,
}

impl Melody {
    pub fn notes(self) -> &'static [Note] {
        match self {
            Melody::Win => &WIN_MELODY,
            Melody::Lose => &LOSE_MELODY,
        }
    }

    /// Total blocking time of the melody in milliseconds.
    pub fn total_ms(self) -> u32 {
        self.notes().iter().map(Note::spacing_ms).sum()
    }
}
