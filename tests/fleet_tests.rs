use solo_battleship::{BoardError, Coord, Fleet, ShipDef, FLEET};

static CLASHING: [ShipDef; 2] = [
    ShipDef::new("First", &[Coord { row: 3, col: 3 }]),
    ShipDef::new("Second", &[Coord { row: 3, col: 2 }, Coord { row: 3, col: 3 }]),
];

#[test]
fn test_standard_fleet_registry() {
    let fleet = Fleet::new(&FLEET).unwrap();
    assert_eq!(fleet.ships().len(), 3);
    assert_eq!(fleet.remaining(), 5);
    let sizes: Vec<_> = fleet.ships().iter().map(|s| s.size()).collect();
    assert_eq!(sizes, vec![1, 2, 2]);
    assert!(!fleet.is_fleet_destroyed());
}

#[test]
fn test_overlapping_fleet_rejected() {
    assert_eq!(
        Fleet::new(&CLASHING).unwrap_err(),
        BoardError::ShipOverlaps(Coord::new(3, 3))
    );
}

#[test]
fn test_mark_sunk_and_destroyed() {
    let mut fleet = Fleet::new(&FLEET).unwrap();
    let destroyer = fleet.ship_at(Coord::new(2, 4)).unwrap();
    assert_eq!(destroyer.name(), "Destroyer");

    fleet.mark_sunk(Coord::new(1, 4));
    assert!(!fleet.is_afloat(Coord::new(1, 4)));
    assert!(!fleet.is_ship_sunk(destroyer));
    fleet.mark_sunk(Coord::new(2, 4));
    assert!(fleet.is_ship_sunk(destroyer));
    assert_eq!(fleet.remaining(), 3);

    for ship in FLEET.iter() {
        for &cell in ship.cells() {
            fleet.mark_sunk(cell);
        }
    }
    assert!(fleet.is_fleet_destroyed());
}

#[test]
fn test_mark_sunk_ignores_water_and_repeats() {
    let mut fleet = Fleet::new(&FLEET).unwrap();
    let afloat = fleet.remaining();
    fleet.mark_sunk(Coord::new(7, 0));
    fleet.mark_sunk(Coord::new(0, 1));
    fleet.mark_sunk(Coord::new(0, 1));
    fleet.mark_sunk(Coord::new(9, 9));
    assert_eq!(fleet.remaining(), afloat - 1);
    assert!(fleet.ship_at(Coord::new(7, 0)).is_none());
}
