use seabattle::{Coordinate, Orientation, Ship};

#[test]
fn test_horizontal_cells() {
    let ship = Ship::new(Coordinate::new(0, 0), 3, Orientation::Horizontal);
    assert_eq!(
        ship.occupied_cells(),
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(0, 2)
        ]
    );
    assert_eq!(ship.remaining_hits(), 3);
    assert!(!ship.is_destroyed());
}

#[test]
fn test_cells_may_leave_the_board() {
    // the ship itself does not know the board; placement rejects this later
    let ship = Ship::new(Coordinate::new(5, 5), 2, Orientation::Vertical);
    let cells = ship.occupied_cells();
    assert_eq!(cells[1], Coordinate::new(6, 5));
    assert!(!cells[1].in_bounds());
}

#[test]
fn test_apply_hit_counts_down() {
    let mut ship = Ship::new(Coordinate::new(1, 1), 3, Orientation::Vertical);
    assert!(!ship.apply_hit());
    assert!(!ship.apply_hit());
    assert_eq!(ship.remaining_hits(), 1);
    assert!(ship.apply_hit());
    assert!(ship.is_destroyed());

    // no state change once sunk
    assert!(!ship.apply_hit());
    assert_eq!(ship.remaining_hits(), 0);
}

#[test]
fn test_accessors() {
    let ship = Ship::new(Coordinate::new(3, 2), 2, Orientation::Horizontal);
    assert_eq!(ship.origin(), Coordinate::new(3, 2));
    assert_eq!(ship.length(), 2);
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert!(ship.contains(Coordinate::new(3, 3)));
    assert!(!ship.contains(Coordinate::new(4, 2)));
}
