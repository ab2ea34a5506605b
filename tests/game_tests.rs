use solo_battleship::{BoardError, Cell, Coord, GameEngine, GameStatus, ShipDef, ShotOutcome, FLEET};

static CORNER: [ShipDef; 1] = [ShipDef::new("Buoy", &[Coord { row: 0, col: 0 }])];

#[test]
fn test_new_game() {
    let engine = GameEngine::new().unwrap();
    assert_eq!(engine.shots(), 0);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.fleet().remaining(), 5);
}

#[test]
fn test_sinking_every_ship_wins_on_last_hit() {
    let mut engine = GameEngine::new().unwrap();
    let cells: Vec<Coord> = FLEET.iter().flat_map(|s| s.cells().iter().copied()).collect();
    assert_eq!(cells.len(), 5);
    let (last, rest) = cells.split_last().unwrap();
    for &cell in rest {
        assert_eq!(engine.fire(cell).unwrap(), ShotOutcome::Hit);
        assert_eq!(engine.status(), GameStatus::InProgress);
    }
    assert_eq!(engine.fire(*last).unwrap(), ShotOutcome::Hit);
    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.shots(), 5);
}

#[test]
fn test_repeat_shot_still_counts() {
    let mut engine = GameEngine::new().unwrap();
    assert_eq!(engine.fire(Coord::new(1, 1)).unwrap(), ShotOutcome::Miss);
    let board_after_first = *engine.board();
    assert_eq!(engine.fire(Coord::new(1, 1)).unwrap(), ShotOutcome::AlreadyShot);
    assert_eq!(engine.shots(), 2);
    assert_eq!(*engine.board(), board_after_first);
}

#[test]
fn test_repeat_hit_does_not_touch_fleet() {
    let mut engine = GameEngine::new().unwrap();
    engine.fire(Coord::new(4, 7)).unwrap();
    assert_eq!(engine.fleet().remaining(), 4);
    assert_eq!(engine.fire(Coord::new(4, 7)).unwrap(), ShotOutcome::AlreadyShot);
    assert_eq!(engine.fleet().remaining(), 4);
    assert_eq!(engine.shots(), 2);
}

#[test]
fn test_out_of_bounds_not_counted() {
    let mut engine = GameEngine::new().unwrap();
    assert_eq!(
        engine.fire(Coord::new(8, 8)).unwrap_err(),
        BoardError::OutOfBounds(Coord::new(8, 8))
    );
    assert_eq!(engine.shots(), 0);
}

#[test]
fn test_corner_fleet() {
    let mut engine = GameEngine::with_fleet(&CORNER).unwrap();
    assert_eq!(engine.fire(Coord::new(0, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.board().misses().count_ones(), 3);
    assert_eq!(engine.board().cell(Coord::new(2, 2)).unwrap(), Cell::Empty);
}
