use crate::common::Coord;
use crate::ship::ShipDef;

/// Side length of the square board (columns `A`..`H`, rows `1`..`8`).
pub const BOARD_SIZE: usize = 8;

/// Seconds the player has to answer each prompt.
pub const TURN_TIMEOUT_SECS: u64 = 15;

pub const NUM_SHIPS: usize = 3;

pub const FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Submarine", &[Coord { row: 0, col: 1 }]),
    ShipDef::new("Destroyer", &[Coord { row: 1, col: 4 }, Coord { row: 2, col: 4 }]),
    ShipDef::new("Patrol Boat", &[Coord { row: 4, col: 7 }, Coord { row: 5, col: 7 }]),
];
