use floorkit_designer::model::{Point, ScreenPoint};
use floorkit_designer::viewport::Viewport;
use proptest::prelude::*;

#[test]
fn test_viewport_creation() {
    let vp = Viewport::default();
    assert_eq!(vp.scale(), 100.0);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
    assert_eq!(vp.width(), 1200.0);
    assert_eq!(vp.height(), 700.0);
}

#[test]
fn test_world_to_screen_scales_then_pans() {
    let vp = Viewport::new(50.0).with_pan(ScreenPoint::new(10.0, -20.0));
    let s = vp.world_to_screen(Point::new(2.0, 3.0));
    assert_eq!(s, ScreenPoint::new(110.0, 130.0));
}

#[test]
fn test_world_length_ignores_pan() {
    let vp = Viewport::new(40.0).with_pan(ScreenPoint::new(300.0, 300.0));
    assert_eq!(vp.world_length_to_screen(0.9), 36.0);
    let a = vp.world_to_screen(Point::new(1.0, 0.0));
    let b = vp.world_to_screen(Point::new(3.5, 0.0));
    assert_eq!(b.x - a.x, vp.world_length_to_screen(2.5));
}

#[test]
fn test_positive_y_goes_down_the_screen() {
    let vp = Viewport::default();
    let top = vp.world_to_screen(Point::new(0.0, 0.0));
    let below = vp.world_to_screen(Point::new(0.0, 1.0));
    assert!(below.y > top.y);
}

#[test]
fn test_invalid_scale_is_ignored() {
    let mut vp = Viewport::new(80.0);
    vp.set_scale(0.0);
    vp.set_scale(-3.0);
    vp.set_scale(f64::INFINITY);
    assert_eq!(vp.scale(), 80.0);
    assert_eq!(Viewport::new(-1.0).scale(), 100.0);
}

#[test]
fn test_pan_by_accumulates() {
    let mut vp = Viewport::default();
    vp.pan_by(10.0, 5.0);
    vp.pan_by(-4.0, 5.0);
    assert_eq!(vp.pan(), ScreenPoint::new(6.0, 10.0));
    vp.reset_pan();
    assert_eq!(vp.pan(), ScreenPoint::new(0.0, 0.0));
}

#[test]
fn test_visible_world_bounds() {
    let vp = Viewport::new(100.0)
        .with_pan(ScreenPoint::new(100.0, 50.0))
        .with_size(400.0, 300.0);
    let (min, max) = vp.visible_world_bounds();
    assert_eq!(min, Point::new(-1.0, -0.5));
    assert_eq!(max, Point::new(3.0, 2.5));
}

proptest! {
    #[test]
    fn prop_transform_round_trip(
        x in -1.0e4f64..1.0e4,
        y in -1.0e4f64..1.0e4,
        scale in 0.01f64..1.0e4,
        pan_x in -1.0e5f64..1.0e5,
        pan_y in -1.0e5f64..1.0e5,
    ) {
        let vp = Viewport::new(scale).with_pan(ScreenPoint::new(pan_x, pan_y));
        let p = Point::new(x, y);
        let back = vp.screen_to_world(vp.world_to_screen(p));
        let tol = 1e-9 * (1.0 + x.abs().max(y.abs()) + (pan_x.abs().max(pan_y.abs()) / scale));
        prop_assert!((back.x - x).abs() <= tol, "x: {} vs {}", back.x, x);
        prop_assert!((back.y - y).abs() <= tol, "y: {} vs {}", back.y, y);
    }
}
