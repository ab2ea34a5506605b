//! Game board state, layered on `BitBoard`.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, Coord, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::ship::ShipDef;

/// One 8×8 layer of cell flags.
pub type BB = BitBoard<u64, BOARD_SIZE>;

/// Board cells: ship placements, hits and misses.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new() -> Self {
        Board {
            ship_map: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
        }
    }

    /// Occupancy mask of all placed ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    /// Misses, including cells revealed by a splash.
    pub fn misses(&self) -> BB {
        self.misses
    }

    /// State of the cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        let Coord { row, col } = coord;
        Ok(if self.hits.get(row, col)? {
            Cell::Hit
        } else if self.misses.get(row, col)? {
            Cell::Miss
        } else if self.ship_map.get(row, col)? {
            Cell::Ship
        } else {
            Cell::Empty
        })
    }

    /// Mark every cell of `ship` as occupied. The board is left untouched on
    /// error.
    pub fn place_ship(&mut self, ship: &ShipDef) -> Result<(), BoardError> {
        let mut mask = BB::new();
        for &coord in ship.cells() {
            if !coord.in_bounds() {
                return Err(BoardError::OutOfBounds(coord));
            }
            if self.ship_map.get(coord.row, coord.col)? || mask.get(coord.row, coord.col)? {
                return Err(BoardError::ShipOverlaps(coord));
            }
            mask.set(coord.row, coord.col)?;
        }
        self.ship_map = self.ship_map | mask;
        Ok(())
    }

    /// Fire at `coord`. A hit also splashes the surrounding empty cells.
    pub fn apply_shot(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        let Coord { row, col } = coord;
        match self.cell(coord)? {
            Cell::Hit | Cell::Miss => Ok(ShotOutcome::AlreadyShot),
            Cell::Ship => {
                self.hits.set(row, col)?;
                self.splash(coord)?;
                Ok(ShotOutcome::Hit)
            }
            Cell::Empty => {
                self.misses.set(row, col)?;
                Ok(ShotOutcome::Miss)
            }
        }
    }

    /// Mark still-empty cells of the 3×3 block around `center` as misses,
    /// clipped to the board edges.
    fn splash(&mut self, center: Coord) -> Result<(), BoardError> {
        let rows = center.row.saturating_sub(1)..=(center.row + 1).min(BOARD_SIZE - 1);
        for r in rows {
            let cols = center.col.saturating_sub(1)..=(center.col + 1).min(BOARD_SIZE - 1);
            for c in cols {
                if self.cell(Coord::new(r, c))? == Cell::Empty {
                    self.misses.set(r, c)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Column header, then one line per row prefixed with its number. Ships are
/// shown, there is no fog of war.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{}", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE {
            write!(f, "{} ", r + 1)?;
            for c in 0..BOARD_SIZE {
                let cell = self.cell(Coord::new(r, c)).map_err(|_| fmt::Error)?;
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?}\n}}",
            self.ship_map, self.hits, self.misses
        )
    }
}
