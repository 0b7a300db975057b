//! Potentiometer input seam.

/// Source of the raw speed reading, sampled once at the start of each round.
///
/// Implementations return a value on the 10-bit scale `[0, 1023]`; use
/// [`memory_game::game::speed::scale_sample`] to convert wider ADC samples.
/// Larger values are clamped by the speed mapper.
#[allow(async_fn_in_trait)]
pub trait SpeedInput {
    type Error: core::fmt::Debug;

    async fn read_raw(&mut self) -> Result<u16, Self::Error>;
}
