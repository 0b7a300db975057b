//! Symbol and speed-tier indicator LEDs.
//!
//! [`IndicatorPanel`] owns the seven LED outputs. Symbol LEDs are stored
//! in [`Symbol::index()`] order and speed LEDs in [`SpeedTier::index()`]
//! order, so both mappings are plain array lookups.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use memory_game::game::speed::SPEED_TIER_COUNT;
use memory_game::game::{Sequence, SpeedTier, Symbol, SYMBOL_COUNT};

use crate::error::BoardError;

/// The game's LED outputs.
///
/// # Example
///
/// ```ignore
/// // Blue, Red, Yellow, Green — then Fast, Medium, Slow.
/// let mut panel = IndicatorPanel::new([blue, red, yellow, green], [fast, medium, slow]);
/// panel.show_speed_tier(SpeedTier::Medium)?;
/// panel.show_sequence(&sequence, 600, 200, &mut delay).await?;
/// ```
pub struct IndicatorPanel<P> {
    /// Indexed by [`Symbol::index()`].
    symbol_leds: [P; SYMBOL_COUNT],
    /// Indexed by [`SpeedTier::index()`].
    speed_leds: [P; SPEED_TIER_COUNT],
}

impl<P> IndicatorPanel<P>
where
    P: OutputPin,
{
    pub fn new(symbol_leds: [P; SYMBOL_COUNT], speed_leds: [P; SPEED_TIER_COUNT]) -> Self {
        Self {
            symbol_leds,
            speed_leds,
        }
    }

    /// Drive every LED low.
    pub fn all_off(&mut self) -> Result<(), BoardError> {
        for led in self.symbol_leds.iter_mut().chain(self.speed_leds.iter_mut()) {
            led.set_low().map_err(BoardError::indicator)?;
        }
        Ok(())
    }

    /// Light exactly one speed LED: all three go low first, then the one
    /// for `tier` goes high.
    pub fn show_speed_tier(&mut self, tier: SpeedTier) -> Result<(), BoardError> {
        for led in self.speed_leds.iter_mut() {
            led.set_low().map_err(BoardError::indicator)?;
        }
        self.speed_leds[tier.index()]
            .set_high()
            .map_err(BoardError::indicator)
    }

    /// Light one symbol's LED for `duration_ms`, then turn it off.
    pub async fn flash_symbol<D: DelayNs>(
        &mut self,
        symbol: Symbol,
        duration_ms: u32,
        delay: &mut D,
    ) -> Result<(), BoardError> {
        let led = &mut self.symbol_leds[symbol.index()];
        led.set_high().map_err(BoardError::indicator)?;
        delay.delay_ms(duration_ms).await;
        led.set_low().map_err(BoardError::indicator)
    }

    /// Play a sequence on the symbol LEDs.
    ///
    /// Every symbol is held for `duration_ms` and followed by `gap_ms` of
    /// darkness, so the call takes `len * (duration_ms + gap_ms)` and
    /// cannot be interrupted.
    pub async fn show_sequence<D: DelayNs>(
        &mut self,
        sequence: &Sequence,
        duration_ms: u32,
        gap_ms: u32,
        delay: &mut D,
    ) -> Result<(), BoardError> {
        for symbol in sequence.iter() {
            self.flash_symbol(symbol, duration_ms, delay).await?;
            delay.delay_ms(gap_ms).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{event_log, mock_panel, take_events, Event, MockDelay, SPEED_PINS};
    use pollster::block_on;

    #[test]
    fn all_off_drives_every_led_low() {
        let log = event_log();
        let mut panel = mock_panel(&log);
        panel.all_off().unwrap();
        assert_eq!(
            take_events(&log),
            vec![
                Event::Low(0),
                Event::Low(1),
                Event::Low(2),
                Event::Low(3),
                Event::Low(10),
                Event::Low(11),
                Event::Low(12),
            ]
        );
    }

    #[test]
    fn speed_tier_lights_exactly_one_led() {
        let log = event_log();
        let mut panel = mock_panel(&log);

        for (tier, pin) in [SpeedTier::Fast, SpeedTier::Medium, SpeedTier::Slow]
            .into_iter()
            .zip(SPEED_PINS)
        {
            panel.show_speed_tier(tier).unwrap();
            assert_eq!(
                take_events(&log),
                vec![Event::Low(10), Event::Low(11), Event::Low(12), Event::High(pin)]
            );
        }
    }

    #[test]
    fn sequence_holds_each_symbol_then_gaps() {
        let log = event_log();
        let mut panel = mock_panel(&log);
        let mut delay = MockDelay::new(&log);
        let sequence: Sequence = "GBBY".parse().unwrap();

        block_on(panel.show_sequence(&sequence, 350, 200, &mut delay)).unwrap();

        let mut expected = Vec::new();
        for pin in [3, 0, 0, 2] {
            expected.extend([
                Event::High(pin),
                Event::Delay(350),
                Event::Low(pin),
                Event::Delay(200),
            ]);
        }
        assert_eq!(take_events(&log), expected);
    }
}
