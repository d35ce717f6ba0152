mod common;

use camview_core::anchored::{AnchoredPoint, AnchoredRect};
use camview_core::orientation::{DisplayGeometry, Orientation, SensorSize};
use kurbo::Point;

use common::{geometry, xywh};

// ---------------------------------------------------------------------------
// AnchoredPoint
// ---------------------------------------------------------------------------

#[test]
fn test_point_display_under_rotation() {
    let p = AnchoredPoint::from_absolute(100.0, 200.0);
    let g = geometry(Orientation::Rot90);
    assert_eq!(p.display(&g), Point::new(200.0, 539.0));
    assert_eq!(p.absolute(), Point::new(100.0, 200.0));
}

#[test]
fn test_point_from_display_seeds_cache() {
    let g = geometry(Orientation::Rot180);
    let p = AnchoredPoint::from_display(&g, 10.0, 20.0);
    assert!(p.is_cached_for(&g));
    assert_eq!(p.absolute(), Point::new(629.0, 459.0));
    assert_eq!(p.display(&g), Point::new(10.0, 20.0));
}

#[test]
fn test_point_cache_follows_orientation() {
    let p = AnchoredPoint::from_absolute(100.0, 200.0);
    let g1 = geometry(Orientation::MirrorH);
    let g2 = geometry(Orientation::Rot270);

    assert_eq!(p.display(&g1), Point::new(539.0, 200.0));
    assert!(p.is_cached_for(&g1));
    assert!(!p.is_cached_for(&g2));

    // The second read must reflect the new orientation.
    assert_eq!(p.display(&g2), Point::new(279.0, 100.0));
    assert!(p.is_cached_for(&g2));
}

#[test]
fn test_point_cache_follows_sensor_size() {
    let p = AnchoredPoint::from_absolute(10.0, 10.0);
    let small = DisplayGeometry::new(Orientation::MirrorH, SensorSize::new(100, 100).unwrap());
    let large = DisplayGeometry::new(Orientation::MirrorH, SensorSize::new(200, 100).unwrap());
    assert_eq!(p.display(&small), Point::new(89.0, 10.0));
    assert_eq!(p.display(&large), Point::new(189.0, 10.0));
}

#[test]
fn test_point_set_absolute_invalidates() {
    let g = geometry(Orientation::Rot90);
    let mut p = AnchoredPoint::from_display(&g, 5.0, 5.0);
    p.set_absolute(0.0, 0.0);
    assert!(!p.is_cached_for(&g));
    assert_eq!(p.display(&g), Point::new(0.0, 639.0));
}

#[test]
fn test_point_set_display() {
    let g = geometry(Orientation::Rot90MirrorH);
    let mut p = AnchoredPoint::from_absolute(0.0, 0.0);
    p.set_display(&g, 3.0, 7.0);
    assert_eq!(p.absolute(), Point::new(7.0, 3.0));
}

#[test]
fn test_point_equality_ignores_cache() {
    let g = geometry(Orientation::Identity);
    let a = AnchoredPoint::from_display(&g, 4.0, 5.0);
    let b = AnchoredPoint::from_absolute(4.0, 5.0);
    assert!(a.is_cached_for(&g));
    assert!(!b.is_cached_for(&g));
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// AnchoredRect
// ---------------------------------------------------------------------------

#[test]
fn test_rect_display_round_trip() {
    for o in Orientation::ALL {
        let g = geometry(*o);
        let r = AnchoredRect::from_display(&g, 12.0, 34.0, 56.0, 78.0);
        let fresh = AnchoredRect::from(r.absolute());
        assert_eq!(fresh.display(&g), xywh(12.0, 34.0, 56.0, 78.0), "{o}");
    }
}

#[test]
fn test_rect_negative_extent_normalized() {
    let g = geometry(Orientation::Identity);
    let r = AnchoredRect::from_display(&g, 10.0, 10.0, -5.0, -3.0);
    assert_eq!(r.absolute(), xywh(6.0, 8.0, 5.0, 3.0));
    assert_eq!(r.display(&g), xywh(6.0, 8.0, 5.0, 3.0));
}

#[test]
fn test_rect_negative_extent_under_rotation() {
    for o in Orientation::ALL {
        let g = geometry(*o);
        let r = AnchoredRect::from_display(&g, 50.0, 60.0, -20.0, -10.0);
        let fresh = AnchoredRect::from(r.absolute());
        assert_eq!(fresh.display(&g), xywh(31.0, 51.0, 20.0, 10.0), "{o}");
    }
}

#[test]
fn test_rect_absolute_swaps_extent_when_rotated() {
    let g = geometry(Orientation::Rot270);
    let r = AnchoredRect::from_display(&g, 0.0, 0.0, 100.0, 50.0);
    let abs = r.absolute();
    assert_eq!((abs.width(), abs.height()), (50.0, 100.0));
}

#[test]
fn test_rect_inclusive_edges() {
    let g = geometry(Orientation::Identity);
    let r = AnchoredRect::from_absolute(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.left(&g), 10.0);
    assert_eq!(r.top(&g), 20.0);
    assert_eq!(r.right(&g), 39.0);
    assert_eq!(r.bottom(&g), 59.0);
}

#[test]
fn test_rect_edge_setters_preserve_other_fields() {
    let g = geometry(Orientation::Identity);
    let mut r = AnchoredRect::from_absolute(10.0, 20.0, 30.0, 40.0);

    r.set_right(&g, 49.0);
    assert_eq!(r.absolute(), xywh(10.0, 20.0, 40.0, 40.0));

    r.set_bottom(&g, 29.0);
    assert_eq!(r.absolute(), xywh(10.0, 20.0, 40.0, 10.0));

    r.set_left(&g, 0.0);
    assert_eq!(r.absolute(), xywh(0.0, 20.0, 40.0, 10.0));

    r.set_top(&g, 5.0);
    assert_eq!(r.absolute(), xywh(0.0, 5.0, 40.0, 10.0));

    r.set_width(&g, 7.0);
    r.set_height(&g, 9.0);
    assert_eq!(r.absolute(), xywh(0.0, 5.0, 7.0, 9.0));
}

#[test]
fn test_rect_far_edge_past_near_edge() {
    let g = geometry(Orientation::Identity);
    let mut r = AnchoredRect::from_display(&g, 10.0, 10.0, 5.0, 5.0);

    r.set_right(&g, 5.0);
    assert_eq!(r.left(&g), 5.0);
    assert_eq!(r.right(&g), 10.0);

    r.set_bottom(&g, 2.0);
    assert_eq!(r.top(&g), 2.0);
    assert_eq!(r.bottom(&g), 10.0);
    assert_eq!(r.absolute(), xywh(5.0, 2.0, 6.0, 9.0));

    // Onto the near edge itself: a single pixel column.
    r.set_right(&g, 5.0);
    assert_eq!(r.absolute(), xywh(5.0, 2.0, 1.0, 9.0));
}

#[test]
fn test_rect_set_right_under_rotation() {
    // Display width is absolute height under a 90° rotation.
    let g = geometry(Orientation::Rot90);
    let mut r = AnchoredRect::from_absolute(100.0, 50.0, 20.0, 10.0);
    assert_eq!(r.display(&g), xywh(50.0, 520.0, 10.0, 20.0));

    r.set_right(&g, 69.0);
    assert_eq!(r.display(&g), xywh(50.0, 520.0, 20.0, 20.0));
    assert_eq!(r.absolute(), xywh(100.0, 50.0, 20.0, 20.0));
}

#[test]
fn test_rect_cache_follows_orientation() {
    let r = AnchoredRect::from_absolute(0.0, 0.0, 10.0, 20.0);
    let g1 = geometry(Orientation::Identity);
    let g2 = geometry(Orientation::Rot180);
    assert_eq!(r.display(&g1), xywh(0.0, 0.0, 10.0, 20.0));
    assert_eq!(r.display(&g2), xywh(630.0, 460.0, 10.0, 20.0));
    assert!(r.is_cached_for(&g2));
    assert!(!r.is_cached_for(&g1));
}

#[test]
fn test_rect_set_absolute_invalidates() {
    let g = geometry(Orientation::MirrorH);
    let mut r = AnchoredRect::from_display(&g, 0.0, 0.0, 10.0, 10.0);
    assert!(r.is_cached_for(&g));
    r.set_absolute(0.0, 0.0, 10.0, 10.0);
    assert!(!r.is_cached_for(&g));
    assert_eq!(r.display(&g), xywh(630.0, 0.0, 10.0, 10.0));
}
