#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod board;
pub mod command;
mod common;
mod config;
mod fleet;
mod game;
mod ship;
#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use command::{parse, Command, InvalidInput};
pub use common::*;
pub use config::*;
pub use fleet::Fleet;
pub use game::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use console::{InputSource, ReadOutcome, StdinSource};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
#[cfg(feature = "std")]
pub use session::{GameOutcome, Session, SessionConfig};
#[cfg(feature = "std")]
pub use ui::{Locale, Message};
