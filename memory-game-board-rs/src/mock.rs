//! Recording test doubles for the board peripherals.
//!
//! Pins, delay and tone output all append to one shared [`EventLog`], so
//! tests can assert the exact interleaving of LED changes, waits and notes.

use core::convert::Infallible;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::buzzer::ToneOutput;
use crate::indicators::IndicatorPanel;
use crate::speed_input::SpeedInput;

/// Pin ids of the symbol LEDs, in symbol index order.
pub const SYMBOL_PINS: [usize; 4] = [0, 1, 2, 3];

/// Pin ids of the speed LEDs, in tier index order.
pub const SPEED_PINS: [usize; 3] = [10, 11, 12];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    High(usize),
    Low(usize),
    Delay(u32),
    Tone(u32),
    Silence,
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn take_events(log: &EventLog) -> Vec<Event> {
    core::mem::take(&mut *log.borrow_mut())
}

// ── Pins ─────────────────────────────────────────────────────────────────

pub struct MockPin {
    id: usize,
    log: EventLog,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Low(self.id));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::High(self.id));
        Ok(())
    }
}

pub fn mock_panel(log: &EventLog) -> IndicatorPanel<MockPin> {
    let pin = |id| MockPin { id, log: log.clone() };
    IndicatorPanel::new(SYMBOL_PINS.map(pin), SPEED_PINS.map(pin))
}

// ── Delay ────────────────────────────────────────────────────────────────

pub struct MockDelay {
    log: EventLog,
}

impl MockDelay {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::Delay(ns / 1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Delay(ms));
    }
}

// ── Tone output ──────────────────────────────────────────────────────────

pub struct MockTone {
    log: EventLog,
}

impl MockTone {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl ToneOutput for MockTone {
    type Error = Infallible;

    fn start_tone(&mut self, frequency_hz: u32) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Tone(frequency_hz));
        Ok(())
    }

    fn stop_tone(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Silence);
        Ok(())
    }
}

/// Tone output whose every call fails.
pub struct BrokenTone;

impl ToneOutput for BrokenTone {
    type Error = ();

    fn start_tone(&mut self, _frequency_hz: u32) -> Result<(), Self::Error> {
        Err(())
    }

    fn stop_tone(&mut self) -> Result<(), Self::Error> {
        Err(())
    }
}

// ── Speed input ──────────────────────────────────────────────────────────

/// Replays queued readings; repeats the last one once the queue runs dry.
pub struct MockSpeed {
    readings: VecDeque<u16>,
    last: u16,
}

impl MockSpeed {
    pub fn new(readings: &[u16]) -> Self {
        Self {
            readings: readings.iter().copied().collect(),
            last: 0,
        }
    }
}

impl SpeedInput for MockSpeed {
    type Error = Infallible;

    async fn read_raw(&mut self) -> Result<u16, Self::Error> {
        if let Some(reading) = self.readings.pop_front() {
            self.last = reading;
        }
        Ok(self.last)
    }
}

// ── Serial ───────────────────────────────────────────────────────────────

/// In-memory UART. Reads drain `input`; writes append to `output`.
/// A read with no pending input reports end of stream.
#[derive(Clone, Default)]
pub struct MockSerial {
    pub input: Rc<RefCell<VecDeque<u8>>>,
    pub output: Rc<RefCell<Vec<u8>>>,
}

impl MockSerial {
    pub fn push_input(&self, bytes: &[u8]) {
        self.input.borrow_mut().extend(bytes.iter().copied());
    }

    /// Everything written so far, split into `\r\n`-terminated lines.
    pub fn lines(&self) -> Vec<String> {
        let text = String::from_utf8(self.output.borrow().clone()).unwrap();
        let mut lines: Vec<String> = text.split("\r\n").map(String::from).collect();
        // Trailing terminator leaves one empty tail element.
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }

    pub fn clear_output(&self) {
        self.output.borrow_mut().clear();
    }
}

impl embedded_io_async::ErrorType for MockSerial {
    type Error = Infallible;
}

impl embedded_io_async::Read for MockSerial {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut input = self.input.borrow_mut();
        let mut count = 0;
        while count < buf.len() {
            match input.pop_front() {
                Some(byte) => {
                    buf[count] = byte;
                    count += 1;
                }
                None => break,
            }
        }
        Ok(count)
    }
}

impl embedded_io_async::Write for MockSerial {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.output.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
