#![allow(dead_code)]

use camview_core::orientation::{DisplayGeometry, Orientation, SensorSize};
use camview_core::session::DisplaySession;
use kurbo::Rect;

pub const SENSOR_W: u32 = 640;
pub const SENSOR_H: u32 = 480;

pub fn sensor() -> SensorSize {
    SensorSize::new(SENSOR_W, SENSOR_H).unwrap()
}

pub fn geometry(orientation: Orientation) -> DisplayGeometry {
    DisplayGeometry::new(orientation, sensor())
}

/// A 640x480 session with the given orientation and panel size.
pub fn session_with_panel(orientation: Orientation, width: f64, height: f64) -> DisplaySession {
    let mut session = DisplaySession::new(sensor());
    session.set_orientation(orientation);
    session.resize_panel(width, height);
    session
}

/// A session where one panel pixel is one sensor pixel (identity, 640x480 panel).
pub fn unit_session() -> DisplaySession {
    session_with_panel(Orientation::Identity, SENSOR_W as f64, SENSOR_H as f64)
}

pub fn xywh(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::from_origin_size((x, y), (w, h))
}

/// Assert two rectangles agree on every edge within `eps`.
pub fn assert_rect_near(actual: Rect, expected: Rect, eps: f64) {
    let pairs = [
        (actual.x0, expected.x0, "x0"),
        (actual.y0, expected.y0, "y0"),
        (actual.x1, expected.x1, "x1"),
        (actual.y1, expected.y1, "y1"),
    ];
    for (a, e, name) in pairs {
        assert!(
            (a - e).abs() < eps,
            "{name}: got {a}, expected {e} (actual {actual:?}, expected {expected:?})"
        );
    }
}
