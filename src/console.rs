#![cfg(feature = "std")]

//! Timed line input.
//!
//! Console reads block and cannot be cancelled, so every read runs on its
//! own detached thread and hands the line back over a oneshot channel. The
//! caller waits on the channel with a deadline. A read still pending when the
//! deadline passes is abandoned; its thread dies with the process.

use std::io::{self, BufRead};
use std::string::String;
use std::thread;

use tokio::sync::oneshot;
use tokio::time::{timeout, Duration};

/// What came back from a timed read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A full line, line terminator included if one was read.
    Line(String),
    /// The deadline passed before a line arrived.
    TimedOut,
    /// The input reached end of file.
    Closed,
}

/// Source of player input lines.
#[async_trait::async_trait]
pub trait InputSource: Send {
    /// Wait at most `deadline` for the next line.
    async fn read_line(&mut self, deadline: Duration) -> anyhow::Result<ReadOutcome>;
}

/// Run the blocking `read` on a detached thread and wait up to `deadline`
/// for its result.
///
/// An `Ok(0)` from `read` means end of input. If the reader thread goes away
/// without answering, the read is reported as an interrupted I/O error.
pub async fn timed_read<F>(deadline: Duration, read: F) -> anyhow::Result<ReadOutcome>
where
    F: FnOnce(&mut String) -> io::Result<usize> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    thread::Builder::new()
        .name("input-reader".into())
        .spawn(move || {
            let mut line = String::new();
            let res = read(&mut line).map(|n| (n, line));
            if tx.send(res).is_err() {
                log::trace!("reader finished after the turn was abandoned");
            }
        })?;

    match timeout(deadline, rx).await {
        Err(_) => Ok(ReadOutcome::TimedOut),
        Ok(Err(_)) => {
            Err(io::Error::new(io::ErrorKind::Interrupted, "input reader stopped").into())
        }
        Ok(Ok(Err(e))) => Err(e.into()),
        Ok(Ok(Ok((0, _)))) => Ok(ReadOutcome::Closed),
        Ok(Ok(Ok((_, line)))) => Ok(ReadOutcome::Line(line)),
    }
}

/// Reads lines from the process's standard input.
#[derive(Debug, Default)]
pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl InputSource for StdinSource {
    async fn read_line(&mut self, deadline: Duration) -> anyhow::Result<ReadOutcome> {
        timed_read(deadline, |line| io::stdin().lock().read_line(line)).await
    }
}
