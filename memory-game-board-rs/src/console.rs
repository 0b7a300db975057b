//! Line-oriented serial console.
//!
//! The console is both the observation channel (status reports, the
//! generated sequence, `1`/`0` outcome codes) and the control channel (one
//! typed-back line per round). Output lines end in `\r\n`; input lines end
//! at `\n` and are trimmed of surrounding whitespace, which also removes a
//! trailing `\r`.

use core::fmt::{self, Write as _};

use embedded_io_async::{Read, Write};
use heapless::{String, Vec};
use memory_game::game::MAX_SEQUENCE_LENGTH;

use crate::error::BoardError;

/// Bytes kept from one trimmed input line.
pub const LINE_CAPACITY: usize = 32;

/// Largest formatted status line.
const STATUS_CAPACITY: usize = 96;

// Any sequence fits in a line without overflowing.
const _: () = assert!(LINE_CAPACITY >= MAX_SEQUENCE_LENGTH);

/// Whitespace as C `isspace` sees it: ASCII whitespace plus vertical tab.
pub fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0B
}

/// Strip leading and trailing [`is_space`] bytes.
pub fn trim_line(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| !is_space(b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|&b| !is_space(b)).map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// One received line, already trimmed.
///
/// If the trimmed content did not fit in [`LINE_CAPACITY`] bytes only the
/// first part is kept and [`overflowed()`](Self::overflowed) is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8, LINE_CAPACITY>,
    overflowed: bool,
}

impl Line {
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `true` if non-whitespace input was dropped past the capacity.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

/// Serial console over any `embedded-io-async` port.
pub struct SerialConsole<U> {
    port: U,
}

impl<U> SerialConsole<U>
where
    U: Read + Write,
{
    pub fn new(port: U) -> Self {
        Self { port }
    }

    /// Wait for the next `\n`-terminated line.
    ///
    /// Reads one byte at a time, so bytes after the newline stay in the
    /// port's buffer for the next call. Leading whitespace is skipped before
    /// anything is buffered and trailing whitespace is dropped, so only the
    /// trimmed content counts against [`LINE_CAPACITY`]. There is no
    /// timeout.
    ///
    /// # Errors
    ///
    /// * [`BoardError::InputClosed`] if the port reports end of input.
    /// * [`BoardError::Serial`] on a UART failure.
    pub async fn read_line(&mut self) -> Result<Line, BoardError> {
        let mut line = Line::default();
        let mut byte = [0u8; 1];

        loop {
            let n = self.port.read(&mut byte).await.map_err(BoardError::serial)?;
            if n == 0 {
                return Err(BoardError::InputClosed);
            }
            let b = byte[0];
            if b == b'\n' {
                break;
            }
            if line.bytes.is_empty() && is_space(b) {
                continue;
            }
            // Once full, only trailing whitespace may follow without loss.
            if line.bytes.push(b).is_err() && !is_space(b) {
                line.overflowed = true;
            }
        }

        while line.bytes.last().copied().is_some_and(is_space) {
            line.bytes.pop();
        }
        Ok(line)
    }

    /// Format and write one status line.
    ///
    /// # Errors
    ///
    /// [`BoardError::Format`] if the formatted text exceeds the status
    /// buffer; [`BoardError::Serial`] on a UART failure.
    pub async fn write_line(&mut self, args: fmt::Arguments<'_>) -> Result<(), BoardError> {
        let mut text: String<STATUS_CAPACITY> = String::new();
        text.write_fmt(args).map_err(|_| BoardError::Format)?;
        self.write_bytes_line(text.as_bytes()).await
    }

    /// Write raw bytes followed by the line terminator.
    pub async fn write_bytes_line(&mut self, bytes: &[u8]) -> Result<(), BoardError> {
        self.port.write_all(bytes).await.map_err(BoardError::serial)?;
        self.port.write_all(b"\r\n").await.map_err(BoardError::serial)
    }

    pub async fn blank_line(&mut self) -> Result<(), BoardError> {
        self.write_bytes_line(b"").await
    }

    pub async fn flush(&mut self) -> Result<(), BoardError> {
        self.port.flush().await.map_err(BoardError::serial)
    }
}
