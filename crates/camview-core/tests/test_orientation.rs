mod common;

use camview_core::error::CamviewError;
use camview_core::orientation::{Orientation, SensorSize};
use kurbo::{Point, Size};

use common::{geometry, sensor, xywh, SENSOR_H, SENSOR_W};

// ---------------------------------------------------------------------------
// Codes and classification
// ---------------------------------------------------------------------------

#[test]
fn test_codes_follow_declaration_order() {
    for (i, o) in Orientation::ALL.iter().enumerate() {
        assert_eq!(o.code() as usize, i);
        assert_eq!(Orientation::from_code(o.code()).unwrap(), *o);
    }
}

#[test]
fn test_from_code_out_of_range() {
    assert_eq!(
        Orientation::from_code(8),
        Err(CamviewError::InvalidOrientation(8))
    );
}

#[test]
fn test_rotated_orientations() {
    let rotated: Vec<u8> = Orientation::ALL
        .iter()
        .filter(|o| o.is_rotated())
        .map(|o| o.code())
        .collect();
    assert_eq!(rotated, vec![2, 3, 6, 7]);
}

#[test]
fn test_display_size_swaps_for_rotations() {
    for o in Orientation::ALL {
        let size = o.display_size(sensor());
        if o.is_rotated() {
            assert_eq!(size, Size::new(480.0, 640.0), "{o}");
        } else {
            assert_eq!(size, Size::new(640.0, 480.0), "{o}");
        }
    }
}

#[test]
fn test_display_names() {
    assert_eq!(format!("{}", Orientation::Identity), "0°");
    assert_eq!(format!("{}", Orientation::Rot90MirrorH), "90° mirrored");
    assert_eq!(format!("{}", Orientation::Rot270), "270°");
}

#[test]
fn test_default_is_identity() {
    assert_eq!(Orientation::default(), Orientation::Identity);
}

// ---------------------------------------------------------------------------
// Point transforms
// ---------------------------------------------------------------------------

#[test]
fn test_point_round_trip_every_pixel_sample() {
    for o in Orientation::ALL {
        let g = geometry(*o);
        for x in (0..SENSOR_W).step_by(7) {
            for y in (0..SENSOR_H).step_by(11) {
                let p = Point::new(x as f64, y as f64);
                assert_eq!(g.to_absolute(g.to_display(p)), p, "{o} at {p:?}");
            }
        }
        let corner = Point::new((SENSOR_W - 1) as f64, (SENSOR_H - 1) as f64);
        assert_eq!(g.to_absolute(g.to_display(corner)), corner, "{o}");
    }
}

#[test]
fn test_point_round_trip_outside_sensor() {
    // Parked markers live outside the sensor and must survive rotation.
    for o in Orientation::ALL {
        let g = geometry(*o);
        for p in [Point::new(-100.0, -100.0), Point::new(740.0, 580.0)] {
            assert_eq!(g.to_absolute(g.to_display(p)), p, "{o}");
        }
    }
}

#[test]
fn test_pixels_stay_inside_display_bounds() {
    for o in Orientation::ALL {
        let g = geometry(*o);
        let size = g.display_size();
        for p in [
            Point::new(0.0, 0.0),
            Point::new(639.0, 0.0),
            Point::new(0.0, 479.0),
            Point::new(639.0, 479.0),
        ] {
            let d = g.to_display(p);
            assert!(d.x >= 0.0 && d.x <= size.width - 1.0, "{o}: {d:?}");
            assert!(d.y >= 0.0 && d.y <= size.height - 1.0, "{o}: {d:?}");
        }
    }
}

#[test]
fn test_rot90_corners() {
    let g = geometry(Orientation::Rot90);
    assert_eq!(g.to_display(Point::new(0.0, 0.0)), Point::new(0.0, 639.0));
    assert_eq!(g.to_display(Point::new(639.0, 0.0)), Point::new(0.0, 0.0));
    assert_eq!(g.to_display(Point::new(639.0, 479.0)), Point::new(479.0, 0.0));
}

#[test]
fn test_mirror_is_self_inverse() {
    let g = geometry(Orientation::MirrorH);
    let p = Point::new(12.0, 34.0);
    assert_eq!(g.to_display(p), Point::new(627.0, 34.0));
    assert_eq!(g.to_display(g.to_display(p)), p);
}

// ---------------------------------------------------------------------------
// Rectangle transforms
// ---------------------------------------------------------------------------

#[test]
fn test_rect_round_trip() {
    let r = xywh(10.0, 20.0, 30.0, 40.0);
    for o in Orientation::ALL {
        let g = geometry(*o);
        assert_eq!(g.rect_to_absolute(g.rect_to_display(r)), r, "{o}");
    }
}

#[test]
fn test_rect_covers_mapped_pixels() {
    // The display rectangle is the bounding box of the first and last pixel.
    let r = xywh(10.0, 20.0, 30.0, 40.0);
    for o in Orientation::ALL {
        let g = geometry(*o);
        let d = g.rect_to_display(r);
        let a = g.to_display(Point::new(10.0, 20.0));
        let b = g.to_display(Point::new(39.0, 59.0));
        assert_eq!(d.x0, a.x.min(b.x), "{o}");
        assert_eq!(d.y0, a.y.min(b.y), "{o}");
        assert_eq!(d.x1 - 1.0, a.x.max(b.x), "{o}");
        assert_eq!(d.y1 - 1.0, a.y.max(b.y), "{o}");
    }
}

#[test]
fn test_full_sensor_maps_to_full_display() {
    for o in Orientation::ALL {
        let g = geometry(*o);
        let d = g.rect_to_display(sensor().full_rect());
        assert_eq!(d.origin(), Point::ZERO, "{o}");
        assert_eq!(d.size(), g.display_size(), "{o}");
    }
}

// ---------------------------------------------------------------------------
// SensorSize
// ---------------------------------------------------------------------------

#[test]
fn test_sensor_rejects_zero() {
    assert_eq!(
        SensorSize::new(0, 480),
        Err(CamviewError::InvalidDimensions {
            width: 0,
            height: 480
        })
    );
    assert!(SensorSize::new(640, 0).is_err());
}

#[test]
fn test_sensor_default_and_display() {
    let s = SensorSize::default();
    assert_eq!((s.width, s.height), (640, 480));
    assert_eq!(s.to_string(), "640x480");
}

#[test]
fn test_clamp_rect() {
    let s = sensor();
    assert_eq!(
        s.clamp_rect(xywh(-10.0, -20.0, 100.0, 100.0)),
        xywh(0.0, 0.0, 90.0, 80.0)
    );
    assert_eq!(
        s.clamp_rect(xywh(600.0, 400.0, 100.0, 100.0)),
        xywh(600.0, 400.0, 40.0, 80.0)
    );
    let outside = s.clamp_rect(xywh(700.0, 10.0, 5.0, 5.0));
    assert_eq!(outside.width(), 0.0);
}
