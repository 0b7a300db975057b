//! Round controller.
//!
//! [`RoundController`] owns the [`GameState`] and every peripheral, and
//! runs the round lifecycle on a single task:
//!
//! 1. Read the potentiometer, report the speed, light the tier LED.
//! 2. Generate a sequence, print it, play it on the symbol LEDs.
//! 3. Prompt, then wait (indefinitely) for one line on the console.
//! 4. Echo the line, judge it, report the outcome with its `1`/`0` code
//!    and play the win or lose melody.
//! 5. Pause, then go back to step 1.
//!
//! Every wait is an awaited [`DelayNs`] call, so each phase runs to
//! completion before the next one starts. Nothing else touches the state.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_io_async::{Read, Write};
use memory_game::game::{GameConfig, GameState, Phase, RoundOutcome};
use rand::RngCore;

use crate::buzzer::{FeedbackPlayer, ToneOutput};
use crate::console::{trim_line, SerialConsole};
use crate::error::BoardError;
use crate::indicators::IndicatorPanel;
use crate::speed_input::SpeedInput;

/// Pause after a failed iteration of [`RoundController::run`], so a
/// persistent peripheral fault does not spin the task.
const ERROR_BACKOFF_MS: u32 = 100;

const BANNER: &[u8] = b"MEMORY GAME STARTED";
const RULE: &[u8] = b"===============================";

/// Which prompt closes a round's setup.
#[derive(Clone, Copy)]
enum Prompt {
    First,
    Next,
}

impl Prompt {
    fn text(self) -> &'static [u8] {
        match self {
            Prompt::First => b"Send your sequence:",
            Prompt::Next => b"Type your next sequence:",
        }
    }
}

/// The peripherals a [`RoundController`] drives.
pub struct Board<P, T, S, U> {
    pub indicators: IndicatorPanel<P>,
    pub buzzer: T,
    pub speed_input: S,
    pub serial: U,
}

/// Runs memory-game rounds against a set of board peripherals.
pub struct RoundController<P, T, S, U, D, R> {
    indicators: IndicatorPanel<P>,
    player: FeedbackPlayer<T>,
    speed_input: S,
    console: SerialConsole<U>,
    delay: D,
    rng: R,
    state: GameState,
}

impl<P, T, S, U, D, R> RoundController<P, T, S, U, D, R>
where
    P: OutputPin,
    T: ToneOutput,
    S: SpeedInput,
    U: Read + Write,
    D: DelayNs,
    R: RngCore,
{
    /// Build a controller. No peripheral is touched until [`start()`](Self::start).
    ///
    /// # Errors
    ///
    /// [`BoardError::Game`] if `config` has an invalid sequence length.
    pub fn new(
        board: Board<P, T, S, U>,
        delay: D,
        rng: R,
        config: GameConfig,
    ) -> Result<Self, BoardError> {
        Ok(Self {
            indicators: board.indicators,
            player: FeedbackPlayer::new(board.buzzer),
            speed_input: board.speed_input,
            console: SerialConsole::new(board.serial),
            delay,
            rng,
            state: GameState::new(config)?,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Power-on: quiet every output, announce the game and set up the
    /// first round.
    pub async fn start(&mut self) -> Result<(), BoardError> {
        self.player.silence()?;
        self.indicators.all_off()?;
        self.delay.delay_ms(self.state.config().startup_settle_ms).await;

        self.console.write_bytes_line(BANNER).await?;
        #[cfg(feature = "defmt")]
        defmt::info!("memory game started: {}", self.state.config());

        self.setup_round(Prompt::First).await
    }

    /// Wait for the next console line and play it as this round's answer.
    ///
    /// A line too long to receive whole is a loss; the kept part is echoed.
    pub async fn poll_round(&mut self) -> Result<RoundOutcome, BoardError> {
        let line = self.console.read_line().await?;
        if line.overflowed() {
            self.finish_round(line.as_slice(), false).await
        } else {
            self.submit(line.as_slice()).await
        }
    }

    /// Judge `line` against the current sequence, report and play the
    /// result, then set up the next round.
    ///
    /// Surrounding whitespace is trimmed first. Anything that does not
    /// match exactly (wrong length, unknown characters, non-ASCII bytes)
    /// is a loss; there is no separate rejection path.
    pub async fn submit(&mut self, line: &[u8]) -> Result<RoundOutcome, BoardError> {
        self.finish_round(trim_line(line), true).await
    }

    /// Run the game forever.
    ///
    /// Peripheral errors are logged and the loop carries on; if an error
    /// interrupted a round before its next sequence was shown, the round
    /// is set up again so the player is never judged against a stale
    /// sequence.
    pub async fn run(mut self) -> ! {
        if let Err(_e) = self.start().await {
            #[cfg(feature = "defmt")]
            defmt::error!("startup failed: {}", _e);
        }

        loop {
            if self.state.phase() == Phase::AwaitingInput {
                match self.poll_round().await {
                    Ok(_outcome) => continue,
                    Err(_e) => {
                        #[cfg(feature = "defmt")]
                        defmt::error!("round failed: {}", _e);
                    }
                }
            } else if let Err(_e) = self.setup_round(Prompt::Next).await {
                #[cfg(feature = "defmt")]
                defmt::error!("round setup failed: {}", _e);
            }

            self.delay.delay_ms(ERROR_BACKOFF_MS).await;
        }
    }

    // ── Round phases ─────────────────────────────────────────────────

    async fn setup_round(&mut self, prompt: Prompt) -> Result<(), BoardError> {
        let raw = self
            .speed_input
            .read_raw()
            .await
            .map_err(|_| BoardError::SpeedInput)?;
        let speed = self.state.update_speed(raw);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "speed: raw={} duration={}ms tier={}",
            speed.raw,
            speed.duration_ms,
            speed.tier
        );

        self.console.blank_line().await?;
        self.console.write_bytes_line(b">>> SPEED SETTINGS:").await?;
        self.console
            .write_line(format_args!(
                "Potentiometer: {}/1023 | Speed: {}ms",
                speed.raw, speed.duration_ms
            ))
            .await?;
        self.console
            .write_line(format_args!("Speed: {}", speed.tier.name()))
            .await?;

        self.indicators.show_speed_tier(speed.tier)?;
        self.console
            .write_line(format_args!("SPEED LED {}: ON", speed.tier.name()))
            .await?;

        let gap_ms = self.state.config().symbol_gap_ms;
        let sequence = self.state.generate_sequence(&mut self.rng)?;

        #[cfg(feature = "defmt")]
        defmt::info!("new sequence: {}", sequence);

        self.console.blank_line().await?;
        self.console.write_bytes_line(b">>> NEW SEQUENCE GENERATED:").await?;
        self.console.write_bytes_line(&sequence.codes()).await?;

        self.indicators
            .show_sequence(sequence, speed.duration_ms, gap_ms, &mut self.delay)
            .await?;

        self.console.blank_line().await?;
        self.console.write_bytes_line(prompt.text()).await?;
        self.console.flush().await?;

        self.state.await_input();
        Ok(())
    }

    async fn finish_round(
        &mut self,
        submission: &[u8],
        complete: bool,
    ) -> Result<RoundOutcome, BoardError> {
        self.console.blank_line().await?;
        self.console.write_bytes_line(RULE).await?;
        self.console.write_bytes_line(b"SEQUENCE RECEIVED:").await?;
        self.console.write_bytes_line(submission).await?;
        self.console.write_bytes_line(RULE).await?;

        let outcome = if complete {
            self.state.judge(submission)
        } else {
            self.state.forfeit()
        };
        self.report_outcome(outcome).await?;
        self.player.play(outcome.melody(), &mut self.delay).await?;

        self.delay.delay_ms(self.state.config().round_pause_ms).await;
        self.setup_round(Prompt::Next).await?;
        Ok(outcome)
    }

    async fn report_outcome(&mut self, outcome: RoundOutcome) -> Result<(), BoardError> {
        match outcome {
            RoundOutcome::Win { streak } => {
                #[cfg(feature = "defmt")]
                defmt::info!("correct, streak {}", streak);

                self.console.write_bytes_line(b"CORRECT SEQUENCE! WIN!").await?;
                self.console.write_line(format_args!("WINS:{}", streak)).await?;
                self.console.write_bytes_line(&[outcome.code()]).await?;
            }
            RoundOutcome::Loss { ended_streak } => {
                #[cfg(feature = "defmt")]
                defmt::info!("wrong, streak of {} ended", ended_streak);

                self.console.write_bytes_line(b"WRONG SEQUENCE! LOSS!").await?;
                self.console.write_bytes_line(&[outcome.code()]).await?;
                self.console
                    .write_line(format_args!("Win streak ended: {}", ended_streak))
                    .await?;
            }
        }
        self.console.flush().await
    }
}
