//! Fleet registry: the fixed ship list and the set of ship cells still afloat.

use crate::board::BB;
use crate::common::{BoardError, Coord};
use crate::ship::ShipDef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fleet {
    ships: &'static [ShipDef],
    remaining: BB,
}

impl Fleet {
    /// Register `ships`, with every one of their cells still afloat.
    pub fn new(ships: &'static [ShipDef]) -> Result<Self, BoardError> {
        let mut remaining = BB::new();
        for ship in ships {
            for &coord in ship.cells() {
                if remaining.get(coord.row, coord.col)? {
                    return Err(BoardError::ShipOverlaps(coord));
                }
                remaining.set(coord.row, coord.col)?;
            }
        }
        Ok(Self { ships, remaining })
    }

    pub fn ships(&self) -> &'static [ShipDef] {
        self.ships
    }

    /// Number of ship cells not yet hit.
    pub fn remaining(&self) -> usize {
        self.remaining.count_ones()
    }

    pub fn is_afloat(&self, coord: Coord) -> bool {
        self.remaining.get(coord.row, coord.col).unwrap_or(false)
    }

    /// Remove `coord` from the cells still afloat. Unknown or already sunk
    /// cells are ignored.
    pub fn mark_sunk(&mut self, coord: Coord) {
        let _ = self.remaining.clear(coord.row, coord.col);
    }

    /// The ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<&'static ShipDef> {
        self.ships.iter().find(|ship| ship.contains(coord))
    }

    /// True once every cell of `ship` has been hit.
    pub fn is_ship_sunk(&self, ship: &ShipDef) -> bool {
        ship.cells().iter().all(|&c| !self.is_afloat(c))
    }

    pub fn is_fleet_destroyed(&self) -> bool {
        self.remaining.is_empty()
    }
}
