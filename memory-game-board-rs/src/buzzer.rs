//! Feedback melodies on a tone-capable output.
//!
//! [`FeedbackPlayer`] plays the fixed win and lose tunes from
//! [`memory_game::game::melody`] to completion. Playback is blocking from
//! the round's point of view: every note is an awaited delay and nothing
//! else in the game runs until the last note's spacing has elapsed.

use embedded_hal_async::delay::DelayNs;
use memory_game::game::Melody;

use crate::error::BoardError;

/// A square-wave output that can sound one frequency at a time.
///
/// On the board this is a PWM slice driving a passive buzzer at 50 % duty.
pub trait ToneOutput {
    type Error: core::fmt::Debug;

    /// Start sounding `frequency_hz` until [`stop_tone`](Self::stop_tone).
    fn start_tone(&mut self, frequency_hz: u32) -> Result<(), Self::Error>;

    fn stop_tone(&mut self) -> Result<(), Self::Error>;
}

/// Plays win/lose melodies through a [`ToneOutput`].
pub struct FeedbackPlayer<T> {
    output: T,
}

impl<T> FeedbackPlayer<T>
where
    T: ToneOutput,
{
    pub fn new(output: T) -> Self {
        Self { output }
    }

    /// Make sure the output is silent (used at startup).
    pub fn silence(&mut self) -> Result<(), BoardError> {
        self.output.stop_tone().map_err(|_| BoardError::Tone)
    }

    /// Play every note of `melody`.
    ///
    /// Each note sounds for its duration, then the output is silent for the
    /// rest of the note spacing before the next one starts.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Tone`] on the first output failure; the rest
    /// of the melody is skipped.
    pub async fn play<D: DelayNs>(
        &mut self,
        melody: Melody,
        delay: &mut D,
    ) -> Result<(), BoardError> {
        for note in melody.notes() {
            self.output
                .start_tone(note.frequency_hz)
                .map_err(|_| BoardError::Tone)?;
            delay.delay_ms(note.duration_ms).await;
            self.silence()?;
            delay.delay_ms(note.rest_ms()).await;
        }
        Ok(())
    }

    pub async fn play_win<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), BoardError> {
        self.play(Melody::Win, delay).await
    }

    pub async fn play_lose<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), BoardError> {
        self.play(Melody::Lose, delay).await
    }
}
