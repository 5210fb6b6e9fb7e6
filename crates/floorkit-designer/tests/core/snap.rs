use floorkit_designer::model::Point;
use floorkit_designer::snap::{snap_to_grid, GridSnapper};
use proptest::prelude::*;

#[test]
fn test_snap_to_half_meter_grid() {
    assert_eq!(snap_to_grid(Point::new(1.26, 2.74), 0.5), Point::new(1.5, 2.5));
    assert_eq!(snap_to_grid(Point::new(-1.26, -0.1), 0.5), Point::new(-1.5, 0.0));
}

#[test]
fn test_snapper_toggle() {
    let mut snapper = GridSnapper::new(1.0, true);
    assert_eq!(snapper.snap(Point::new(0.6, 0.4)), Point::new(1.0, 0.0));
    snapper.set_enabled(false);
    assert_eq!(snapper.snap(Point::new(0.6, 0.4)), Point::new(0.6, 0.4));
}

proptest! {
    #[test]
    fn prop_snap_is_idempotent(
        x in -1.0e4f64..1.0e4,
        y in -1.0e4f64..1.0e4,
        grid in prop::sample::select(vec![0.1, 0.25, 0.5, 1.0, 2.0, 0.3]),
    ) {
        let once = snap_to_grid(Point::new(x, y), grid);
        let twice = snap_to_grid(once, grid);
        prop_assert_eq!(once, twice);
    }
}
