use crate::{
    board::Board,
    common::{BoardError, Coord, ShotOutcome},
    config::FLEET,
    fleet::Fleet,
    ship::ShipDef,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Core game logic: the board, the fleet afloat on it and the shot counter.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    fleet: Fleet,
    shots: u32,
}

impl GameEngine {
    /// Start a game with the standard fleet.
    pub fn new() -> Result<Self, BoardError> {
        Self::with_fleet(&FLEET)
    }

    /// Start a game with `ships` placed on an empty board.
    pub fn with_fleet(ships: &'static [ShipDef]) -> Result<Self, BoardError> {
        let mut board = Board::new();
        for ship in ships {
            board.place_ship(ship)?;
        }
        Ok(Self {
            board,
            fleet: Fleet::new(ships)?,
            shots: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Shots fired so far, repeats included.
    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Fire at `coord`. Every in-bounds shot is counted, including one at a
    /// cell that was already resolved.
    pub fn fire(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::OutOfBounds(coord));
        }
        self.shots += 1;
        let outcome = self.board.apply_shot(coord)?;
        if outcome == ShotOutcome::Hit {
            self.fleet.mark_sunk(coord);
            if let Some(ship) = self.fleet.ship_at(coord) {
                if self.fleet.is_ship_sunk(ship) {
                    log::debug!("{} sunk at {}", ship.name(), coord);
                } else {
                    log::debug!("{} hit at {}", ship.name(), coord);
                }
            }
        }
        Ok(outcome)
    }

    pub fn status(&self) -> GameStatus {
        if self.fleet.is_fleet_destroyed() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}
