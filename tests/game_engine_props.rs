use proptest::prelude::*;
use solo_battleship::{Cell, Coord, GameEngine, GameStatus, BOARD_SIZE, FLEET};

fn coord() -> impl Strategy<Value = Coord> {
    (0..BOARD_SIZE, 0..BOARD_SIZE).prop_map(|(r, c)| Coord::new(r, c))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// A ship cell reads as hit exactly when the fleet no longer lists it.
    #[test]
    fn board_and_fleet_agree(shots in prop::collection::vec(coord(), 0..64)) {
        let mut engine = GameEngine::new().unwrap();
        for &shot in &shots {
            engine.fire(shot).unwrap();
        }
        prop_assert_eq!(engine.shots() as usize, shots.len());
        for ship in FLEET.iter() {
            for &cell in ship.cells() {
                let hit = engine.board().cell(cell).unwrap() == Cell::Hit;
                prop_assert_eq!(hit, !engine.fleet().is_afloat(cell));
            }
        }
        let all_hit = engine.board().hits() == engine.board().ship_map();
        prop_assert_eq!(all_hit, engine.status() == GameStatus::Won);
    }

    /// Resolved cells never change state again.
    #[test]
    fn resolved_cells_are_final(shots in prop::collection::vec(coord(), 1..40)) {
        let mut engine = GameEngine::new().unwrap();
        for &shot in &shots {
            let before = engine.board().cell(shot).unwrap();
            engine.fire(shot).unwrap();
            let after = engine.board().cell(shot).unwrap();
            match before {
                Cell::Hit | Cell::Miss => prop_assert_eq!(before, after),
                Cell::Ship => prop_assert_eq!(after, Cell::Hit),
                Cell::Empty => prop_assert_eq!(after, Cell::Miss),
            }
        }
    }
}
