//! memory-game-hw-interface
//!
//! Memory game firmware for the Raspberry Pi Pico 2. Wires the two library
//! crates to the board:
//!
//! 1. The potentiometer sets how long each symbol LED stays lit; the
//!    matching speed LED (fast / medium / slow) is lit each round.
//! 2. A random four-symbol sequence is printed on UART0 and played on the
//!    blue, red, yellow and green LEDs.
//! 3. The player types the sequence back over the serial link.
//! 4. The buzzer plays a rising tune for a correct answer and a falling
//!    one otherwise, and the next round begins.
//!
//! The whole game runs on the main task; every wait is an awaited delay.

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{self, Pwm};
use embassy_rp::uart::{self, BufferedUart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use memory_game::game::speed::scale_sample;
use memory_game::game::{seeded_rng, GameConfig};
use memory_game_board::{Board, IndicatorPanel, RoundController, SpeedInput, ToneOutput};

// ---------------------------------------------------------------------------
// Boot block and interrupt binding
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
    UART0_IRQ => uart::BufferedInterruptHandler<UART0>;
});

// ---------------------------------------------------------------------------
// Static storage and board constants
// ---------------------------------------------------------------------------

/// UART ring buffers. Status reports are bursty; input is one short line.
static UART_TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static UART_RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

const BAUD_RATE: u32 = 9600;

/// RP2350 ADC sample width.
const ADC_RESOLUTION_BITS: u8 = 12;

/// PWM clock divider: 150 MHz / 64 keeps `top` inside u16 down to ~36 Hz.
const PWM_DIVIDER: u8 = 64;
const PWM_TICK_HZ: u32 = 150_000_000 / PWM_DIVIDER as u32;

// ---------------------------------------------------------------------------
// Peripheral adapters
// ---------------------------------------------------------------------------

/// Passive buzzer on a PWM channel A output, driven at 50 % duty.
struct PwmBuzzer {
    pwm: Pwm<'static>,
    config: pwm::Config,
}

impl PwmBuzzer {
    fn new(pwm: Pwm<'static>, config: pwm::Config) -> Self {
        Self { pwm, config }
    }
}

impl ToneOutput for PwmBuzzer {
    type Error = Infallible;

    fn start_tone(&mut self, frequency_hz: u32) -> Result<(), Self::Error> {
        let top = (PWM_TICK_HZ / frequency_hz.max(1))
            .saturating_sub(1)
            .min(u32::from(u16::MAX)) as u16;
        self.config.top = top;
        self.config.compare_a = top / 2;
        self.pwm.set_config(&self.config);
        Ok(())
    }

    fn stop_tone(&mut self) -> Result<(), Self::Error> {
        self.config.compare_a = 0;
        self.pwm.set_config(&self.config);
        Ok(())
    }
}

/// Speed potentiometer on an ADC pin, rescaled to the 10-bit game range.
struct Potentiometer {
    adc: Adc<'static, adc::Async>,
    channel: Channel<'static>,
}

impl SpeedInput for Potentiometer {
    type Error = adc::Error;

    async fn read_raw(&mut self) -> Result<u16, Self::Error> {
        let sample = self.adc.read(&mut self.channel).await?;
        Ok(scale_sample(sample, ADC_RESOLUTION_BITS))
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("memory-game-hw-interface starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // UART0 TX → GP0, RX → GP1 (9600 baud)
    // LED green → GP4, red → GP5, yellow → GP6, blue → GP7
    // Buzzer   → GP8  (PWM slice 4, channel A)
    // LED fast → GP10, medium → GP11, slow → GP12
    // Noise    → GP27 (ADC1, left unconnected)
    // Pot      → GP28 (ADC2)
    // ———————————————————————————————————————————————————————————————————————

    // Symbol LEDs in Blue, Red, Yellow, Green order.
    let symbol_leds = [
        Output::new(p.PIN_7, Level::Low),
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_4, Level::Low),
    ];
    // Speed LEDs in Fast, Medium, Slow order.
    let speed_leds = [
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
    ];

    // Buzzer starts silent: compare 0 keeps the output low.
    let mut pwm_config = pwm::Config::default();
    pwm_config.divider = PWM_DIVIDER.into();
    pwm_config.compare_a = 0;
    let buzzer = PwmBuzzer::new(
        Pwm::new_output_a(p.PWM_SLICE4, p.PIN_8, pwm_config.clone()),
        pwm_config,
    );

    let mut adc = Adc::new(p.ADC, Irqs, adc::Config::default());

    // Seed the sequence generator once from ADC noise on a floating pin.
    let mut noise = Channel::new_pin(p.PIN_27, Pull::None);
    let entropy = match adc.read(&mut noise).await {
        Ok(sample) => sample,
        Err(e) => {
            warn!("Entropy read failed ({}); using fixed seed", e);
            0
        }
    };
    info!("RNG seeded from ADC noise: {}", entropy);

    let potentiometer = Potentiometer {
        adc,
        channel: Channel::new_pin(p.PIN_28, Pull::None),
    };

    let mut uart_config = uart::Config::default();
    uart_config.baudrate = BAUD_RATE;
    let serial = BufferedUart::new(
        p.UART0,
        p.PIN_0, // TX
        p.PIN_1, // RX
        Irqs,
        UART_TX_BUF.init([0; 256]),
        UART_RX_BUF.init([0; 64]),
        uart_config,
    );

    let board = Board {
        indicators: IndicatorPanel::new(symbol_leds, speed_leds),
        buzzer,
        speed_input: potentiometer,
        serial,
    };

    let rng = seeded_rng(entropy);
    let controller = match RoundController::new(board, Delay, rng, GameConfig::default()) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Invalid game configuration: {}", e);
            return;
        }
    };

    info!("Starting game loop");
    controller.run().await
}
