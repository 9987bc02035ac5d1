//! Validates the bounded cell container and its probe semantics

use wangtiles::GenerationError;
use wangtiles::spatial::{Cell, Grid, Point, Size};

#[test]
fn test_empty_grid_has_all_cells_unfilled() {
    let grid = Grid::empty(Size::new(2, 2));

    assert_eq!(grid.capacity(), 4);
    assert_eq!(grid.filled_count(), 0);
    assert!(!grid.is_full());

    let mut cells = 0;
    for point in grid.points() {
        assert_eq!(grid.get(point), Cell::Unfilled);
        cells += 1;
    }
    assert_eq!(cells, 4);
}

#[test]
fn test_out_of_bounds_probe_is_outside() {
    let grid = Grid::empty(Size::new(2, 2));

    assert_eq!(grid.get(Point::new(5, 5)), Cell::Outside);
    assert_eq!(grid.get(Point::new(2, 0)), Cell::Outside);
    assert_eq!(grid.get(Point::new(0, 2)), Cell::Outside);
    assert_eq!(grid.get(Point::new(-1, 0)), Cell::Outside);
    assert_eq!(grid.get(Point::new(0, -1)), Cell::Outside);
}

#[test]
fn test_set_then_get_roundtrip() {
    let mut grid = Grid::empty(Size::new(3, 3));

    assert!(grid.set(Point::new(1, 2), 9).is_ok());
    assert_eq!(grid.get(Point::new(1, 2)), Cell::Filled(9));
    assert_eq!(grid.filled_count(), 1);
    assert!(grid.get(Point::new(1, 2)).is_filled());
}

#[test]
fn test_set_out_of_bounds_fails_fast() {
    let mut grid = Grid::empty(Size::new(2, 2));

    let result = grid.set(Point::new(2, 0), 0);
    assert!(matches!(
        result,
        Err(GenerationError::InvalidParameter {
            parameter: "point",
            ..
        })
    ));
    assert_eq!(grid.filled_count(), 0);
}

#[test]
fn test_resetting_a_cell_does_not_inflate_the_count() {
    let mut grid = Grid::empty(Size::new(2, 1));

    assert!(grid.set(Point::new(0, 0), 3).is_ok());
    assert!(grid.set(Point::new(0, 0), 3).is_ok());
    assert_eq!(grid.filled_count(), 1);
    assert!(!grid.is_full());
}

#[test]
fn test_grid_becomes_full_at_capacity() {
    let mut grid = Grid::empty(Size::new(2, 2));

    for (count, point) in grid.points().collect::<Vec<_>>().into_iter().enumerate() {
        assert!(!grid.is_full());
        assert!(grid.set(point, 0).is_ok());
        assert_eq!(grid.filled_count(), count + 1);
    }

    assert!(grid.is_full());
}

#[test]
fn test_points_use_structural_equality() {
    // Two separately constructed points with equal coordinates must act as
    // the same container key
    let mut filled = std::collections::HashSet::new();
    filled.insert(Point::new(3, 4));
    assert!(filled.contains(&Point::new(3, 4)));
    assert_eq!(Point::new(3, 4), Point::new(3, 4));
    assert_ne!(Point::new(3, 4), Point::new(4, 3));
}
