#![cfg(feature = "std")]

//! Turn controller: the timed prompt/parse/resolve/render loop.

use std::io::{self, Write};

use tokio::time::Duration;

use crate::command::{self, Command};
use crate::config::TURN_TIMEOUT_SECS;
use crate::console::{InputSource, ReadOutcome};
use crate::game::{GameEngine, GameStatus};
use crate::ui::{self, Locale, Message};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every ship cell was hit.
    Won,
    /// The player did not answer a prompt in time.
    TimedOut,
    /// The player typed `EXIT`.
    Exited,
    /// Input reached end of file.
    InputClosed,
}

/// Runtime settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub turn_timeout: Duration,
    pub locale: Locale,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            turn_timeout: Duration::from_secs(TURN_TIMEOUT_SECS),
            locale: Locale::default(),
        }
    }
}

pub struct Session<I, W> {
    engine: GameEngine,
    input: I,
    out: W,
    config: SessionConfig,
}

impl<I: InputSource, W: Write> Session<I, W> {
    pub fn new(engine: GameEngine, input: I, out: W, config: SessionConfig) -> Self {
        Self {
            engine,
            input,
            out,
            config,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Consume the session, handing back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Play until the fleet is destroyed, the player times out, exits, or
    /// input closes.
    pub async fn run(&mut self) -> anyhow::Result<GameOutcome> {
        self.render_board()?;
        loop {
            self.say_inline(Message::Prompt)?;
            let line = match self.input.read_line(self.config.turn_timeout).await {
                Ok(ReadOutcome::Line(line)) => line,
                Ok(ReadOutcome::TimedOut) => {
                    writeln!(self.out)?;
                    self.say(Message::TimeoutLoss)?;
                    log::info!("no input within {:?}, game lost", self.config.turn_timeout);
                    return Ok(GameOutcome::TimedOut);
                }
                Ok(ReadOutcome::Closed) => {
                    writeln!(self.out)?;
                    log::info!("input closed after {} shots", self.engine.shots());
                    return Ok(GameOutcome::InputClosed);
                }
                Err(e) if is_transient(&e) => {
                    log::warn!("failed to read input: {:#}", e);
                    writeln!(self.out)?;
                    continue;
                }
                Err(e) => {
                    writeln!(self.out)?;
                    return Err(e.context("reading player input"));
                }
            };

            if let Some(outcome) = self.handle_line(&line)? {
                return Ok(outcome);
            }
            self.render_board()?;
        }
    }

    /// Resolve one line of input. Returns the outcome when it ends the game.
    pub fn handle_line(&mut self, line: &str) -> anyhow::Result<Option<GameOutcome>> {
        match command::parse(line) {
            Command::Exit => {
                self.say(Message::Farewell)?;
                log::info!("player left after {} shots", self.engine.shots());
                Ok(Some(GameOutcome::Exited))
            }
            Command::ShowResults => {
                let summary = ui::render_results(self.engine.shots(), self.config.locale);
                write!(self.out, "{}", summary)?;
                Ok(None)
            }
            Command::Invalid(reason) => {
                log::debug!("rejected input {:?}: {:?}", line.trim(), reason);
                self.say(reason.into())?;
                Ok(None)
            }
            Command::Shot(coord) => {
                let outcome = self.engine.fire(coord)?;
                log::debug!("shot {} at {}: {:?}", self.engine.shots(), coord, outcome);
                self.say(outcome.into())?;
                if self.engine.status() == GameStatus::Won {
                    self.say(Message::Victory)?;
                    log::info!("fleet destroyed in {} shots", self.engine.shots());
                    return Ok(Some(GameOutcome::Won));
                }
                Ok(None)
            }
        }
    }

    fn render_board(&mut self) -> anyhow::Result<()> {
        write!(self.out, "{}", ui::render_board(self.engine.board()))?;
        Ok(())
    }

    fn say(&mut self, msg: Message) -> anyhow::Result<()> {
        writeln!(self.out, "{}", msg.text(self.config.locale))?;
        Ok(())
    }

    fn say_inline(&mut self, msg: Message) -> anyhow::Result<()> {
        write!(self.out, "{}", msg.text(self.config.locale))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Read errors that only spoil the current line: undecodable bytes and
/// interrupted reads. Anything else will repeat on every read.
fn is_transient(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<io::Error>().map(io::Error::kind),
        Some(io::ErrorKind::InvalidData | io::ErrorKind::Interrupted)
    )
}
