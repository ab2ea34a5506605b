//! Common types for the game: coordinates, cell states, shot outcomes and
//! board errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;

/// Zero-based grid coordinate. Displayed in the player's notation, column
/// letter then one-based row (`B1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies on the game board.
    pub const fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.col) {
            Ok(c) if c < 26 => write!(f, "{}{}", (b'A' + c) as char, self.row + 1),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Open water, never shot.
    Empty,
    /// Ship segment not yet hit.
    Ship,
    Hit,
    /// Shot into open water, or revealed by a splash.
    Miss,
}

impl Cell {
    /// Symbol used when rendering the board.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Ship => 'U',
            Cell::Hit => 'X',
            Cell::Miss => 'o',
        }
    }
}

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The cell was already resolved; nothing changed.
    AlreadyShot,
    Hit,
    Miss,
}

/// Errors returned by board and fleet operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the board.
    OutOfBounds(Coord),
    /// Ship placement overlaps another ship.
    ShipOverlaps(Coord),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => {
                BoardError::OutOfBounds(Coord::new(row, col))
            }
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => write!(f, "Cell {} is outside the board", c),
            BoardError::ShipOverlaps(c) => {
                write!(f, "Ship placement overlaps another ship at {}", c)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
