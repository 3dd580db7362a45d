use sea_battle::{CellState, Coordinate, Grid, GridError, Orientation, ShotResult, Vessel};

fn at(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

fn single(row: i32, col: i32) -> Vessel {
    Vessel::new(1, at(row, col), Orientation::Horizontal)
}

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new();
    for row in 1..=6 {
        for col in 1..=6 {
            assert_eq!(grid.cell(at(row, col)), Some(CellState::Empty));
            assert!(grid.can_place(at(row, col)));
        }
    }
    assert_eq!(grid.clearance_len(), 0);
    assert_eq!(grid.count_hits(), 0);
    assert_eq!(grid.ship_cells(), 0);
    assert!(!grid.is_defeated());
    assert_eq!(grid.untargeted().len(), 36);
}

#[test]
fn test_out_of_bounds() {
    for coord in [at(0, 1), at(7, 1), at(1, 0), at(1, 7), at(-1, -1)] {
        assert!(Grid::is_out_of_bounds(coord), "{} should be outside", coord);
        assert_eq!(Grid::new().cell(coord), None);
    }
    for coord in [at(1, 1), at(6, 6), at(3, 4)] {
        assert!(!Grid::is_out_of_bounds(coord));
    }
}

#[test]
fn test_shoot_empty_then_repeat() {
    let mut grid = Grid::new();
    assert_eq!(grid.shoot(at(2, 2)), Ok(ShotResult::Miss));
    assert_eq!(grid.cell(at(2, 2)), Some(CellState::Miss));
    assert_eq!(
        grid.shoot(at(2, 2)),
        Err(GridError::AlreadyTargeted { row: 2, col: 2 })
    );
    assert_eq!(grid.cell(at(2, 2)), Some(CellState::Miss));
}

#[test]
fn test_shoot_outside_leaves_grid_untouched() {
    let mut grid = Grid::new();
    assert_eq!(
        grid.shoot(at(0, 3)),
        Err(GridError::OutOfBounds { row: 0, col: 3 })
    );
    assert_eq!(grid, Grid::new());
}

#[test]
fn test_adjacent_placement_rejected() {
    let mut grid = Grid::new();
    assert!(grid.place_vessel(&single(1, 1)));
    assert!(!grid.can_place(at(1, 2)));
    assert!(!grid.can_place(at(2, 2)));
    assert!(grid.can_place(at(1, 3)));

    let before = grid.clone();
    assert!(!grid.place_vessel(&Vessel::new(2, at(1, 2), Orientation::Horizontal)));
    assert_eq!(grid, before);

    assert_eq!(grid.clearance_len(), 4);
    for coord in [at(1, 1), at(1, 2), at(2, 1), at(2, 2)] {
        assert!(grid.is_in_clearance(coord));
    }
}

#[test]
fn test_placement_off_the_edge_is_atomic() {
    let mut grid = Grid::new();
    assert!(!grid.place_vessel(&Vessel::new(3, at(1, 5), Orientation::Horizontal)));
    assert_eq!(grid, Grid::new());
}

#[test]
fn test_partially_blocked_placement_is_atomic() {
    let mut grid = Grid::new();
    assert!(grid.place_vessel(&single(3, 3)));
    assert!(!grid.place_vessel(&Vessel::new(3, at(2, 1), Orientation::Horizontal)));
    assert_eq!(grid.cell(at(2, 1)), Some(CellState::Empty));
    assert!(!grid.is_in_clearance(at(1, 1)));
    assert_eq!(grid.vessels().len(), 1);
    assert_eq!(grid.ship_cells(), 1);
}

#[test]
fn test_sinking_the_fleet() {
    let mut grid = Grid::new();
    assert!(grid.place_vessel(&Vessel::new(2, at(4, 4), Orientation::Vertical)));
    assert_eq!(grid.cell(at(5, 4)), Some(CellState::ShipPresent));

    assert_eq!(grid.shoot(at(4, 4)), Ok(ShotResult::Hit));
    assert_eq!(grid.cell(at(4, 4)), Some(CellState::Hit));
    assert_eq!(grid.count_hits(), 1);
    assert_eq!(grid.intact_cells(), 1);
    assert!(!grid.is_defeated());

    assert_eq!(grid.shoot(at(4, 5)), Ok(ShotResult::Miss));
    assert_eq!(grid.shoot(at(5, 4)), Ok(ShotResult::Hit));
    assert_eq!(grid.count_hits(), 2);
    assert_eq!(grid.intact_cells(), 0);
    assert!(grid.is_defeated());

    assert_eq!(
        grid.shoot(at(5, 4)),
        Err(GridError::AlreadyTargeted { row: 5, col: 4 })
    );
    assert_eq!(grid.count_hits(), 2);
}

#[test]
fn test_view_hides_ships_unless_revealed() {
    let mut grid = Grid::new();
    assert!(grid.place_vessel(&single(6, 6)));
    assert!(grid.place_vessel(&single(1, 1)));
    assert_eq!(grid.view(false).cell(at(6, 6)), Some(CellState::Empty));
    assert_eq!(grid.view(true).cell(at(6, 6)), Some(CellState::ShipPresent));

    grid.shoot(at(6, 6)).unwrap();
    grid.shoot(at(3, 3)).unwrap();
    let hidden = grid.view(false);
    assert_eq!(hidden.cell(at(6, 6)), Some(CellState::Hit));
    assert_eq!(hidden.cell(at(3, 3)), Some(CellState::Miss));
    assert_eq!(hidden.cell(at(1, 1)), Some(CellState::Empty));
    assert_eq!(hidden.cell(at(7, 1)), None);
}

#[test]
fn test_clearance_can_cover_the_whole_grid() {
    let mut grid = Grid::new();
    for (r, c) in [(2, 2), (2, 5), (5, 2), (5, 5)] {
        assert!(grid.place_vessel(&single(r, c)));
    }
    assert!(grid.is_clearance_full());
    assert_eq!(grid.clearance_len(), 36);
    for row in 1..=6 {
        for col in 1..=6 {
            assert!(!grid.can_place(at(row, col)));
        }
    }
}

#[test]
fn test_untargeted_shrinks_with_shots() {
    let mut grid = Grid::new();
    grid.shoot(at(1, 1)).unwrap();
    grid.shoot(at(6, 6)).unwrap();
    let open = grid.untargeted();
    assert_eq!(open.len(), 34);
    assert!(!open.contains(&at(1, 1)));
    assert!(!open.contains(&at(6, 6)));
    assert_eq!(open[0], at(1, 2));
}

#[test]
fn test_zero_length_vessel_is_rejected() {
    let mut grid = Grid::new();
    assert!(!grid.place_vessel(&Vessel::new(0, at(3, 3), Orientation::Vertical)));
    assert!(grid.vessels().is_empty());
    assert_eq!(grid.clearance_len(), 0);
}

#[test]
fn test_oversized_vessel_is_rejected() {
    let mut grid = Grid::new();
    assert!(!grid.place_vessel(&Vessel::new(usize::MAX, at(1, 1), Orientation::Horizontal)));
    assert!(!grid.place_vessel(&Vessel::new(7, at(1, 1), Orientation::Vertical)));
    assert!(grid.vessels().is_empty());
    assert_eq!(grid.ship_cells(), 0);
}
