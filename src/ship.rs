//! Ship definitions.

use crate::common::Coord;

/// Immutable ship definition: a name and the ordered cells it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    cells: &'static [Coord],
}

impl ShipDef {
    pub const fn new(name: &'static str, cells: &'static [Coord]) -> Self {
        Self { name, cells }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells the ship occupies.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &'static [Coord] {
        self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}
