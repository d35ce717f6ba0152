mod common;

use std::io::Write;

use camview_core::config::{PointConfig, RectConfig, ViewConfig};
use camview_core::interaction::{PointerButton, SpecialMouseMode};
use camview_core::orientation::Orientation;
use camview_core::session::DisplaySession;
use kurbo::Point;
use tempfile::NamedTempFile;

use common::{sensor, session_with_panel, xywh};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_view_config() {
    let cfg = ViewConfig::default();
    assert_eq!(cfg.orientation, Orientation::Identity);
    assert_eq!(cfg.zoom.to_rect(), xywh(0.0, 0.0, 640.0, 480.0));
    assert_eq!(cfg.roi, cfg.zoom);
    assert_eq!(cfg.markers[0], PointConfig { x: -100.0, y: -100.0 });
    assert_eq!(cfg.markers[2], PointConfig { x: 740.0, y: 580.0 });
    assert_eq!(cfg.proj_markers[0], PointConfig { x: 0.0, y: 0.0 });
    assert_eq!(cfg.proj_markers[3], PointConfig { x: -30.0, y: -30.0 });
}

#[test]
fn test_default_matches_fresh_session() {
    let session = DisplaySession::new(sensor());
    assert_eq!(ViewConfig::capture(&session), ViewConfig::default());
}

#[test]
fn test_partial_toml_uses_defaults() {
    let cfg: ViewConfig = toml::from_str(r#"orientation = "rot90_mirror_h""#).unwrap();
    assert_eq!(cfg.orientation, Orientation::Rot90MirrorH);
    assert_eq!(cfg.zoom, RectConfig::default());
    assert_eq!(cfg.markers, ViewConfig::default().markers);
}

#[test]
fn test_empty_json_is_default() {
    let cfg: ViewConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, ViewConfig::default());
}

#[test]
fn test_unknown_orientation_rejected() {
    let result: Result<ViewConfig, _> = toml::from_str(r#"orientation = "rot45""#);
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Capture / apply
// ---------------------------------------------------------------------------

#[test]
fn test_capture_is_absolute() {
    let mut session = session_with_panel(Orientation::Rot90, 450.0, 600.0);
    session.set_mode(SpecialMouseMode::Marker3);
    session
        .pointer_press(Point::new(0.0, 0.0), PointerButton::Primary)
        .unwrap();

    let cfg = ViewConfig::capture(&session);
    assert_eq!(cfg.orientation, Orientation::Rot90);
    // Panel origin is display (0, 0), the sensor's top-right pixel under Rot90.
    assert_eq!(cfg.markers[2], PointConfig { x: 639.0, y: 0.0 });
    assert_eq!(cfg.zoom.to_rect(), xywh(0.0, 0.0, 640.0, 480.0));
}

#[test]
fn test_apply_restores_capture() {
    let mut source = session_with_panel(Orientation::Rot180MirrorH, 800.0, 600.0);
    source.set_roi_absolute(12.0, 34.0, 56.0, 78.0);
    source.set_zoom_rect_absolute(100.0, 100.0, 200.0, 150.0);
    source.set_marker_absolute(1, 5.0, 6.0).unwrap();
    source.set_proj_marker_x(2, 7.0).unwrap();
    let cfg = ViewConfig::capture(&source);

    let mut target = session_with_panel(Orientation::Identity, 800.0, 600.0);
    cfg.apply(&mut target);
    assert_eq!(target.orientation(), Orientation::Rot180MirrorH);
    assert_eq!(target.roi().absolute(), xywh(12.0, 34.0, 56.0, 78.0));
    assert_eq!(target.marker(1).unwrap().absolute(), Point::new(5.0, 6.0));
    assert_eq!(
        target.proj_marker(2).unwrap().absolute(),
        source.proj_marker(2).unwrap().absolute()
    );
    // Rot180MirrorH keeps display x as absolute x.
    assert_eq!(target.proj_marker(2).unwrap().absolute().x, 7.0);
    assert_eq!(ViewConfig::capture(&target), cfg);
    assert_eq!(target.zoom_factor(), source.zoom_factor());
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn test_toml_round_trip_preserves_snapshot() {
    let mut session = session_with_panel(Orientation::Rot270, 640.0, 480.0);
    session.set_roi_absolute(1.0, 2.0, 3.0, 4.0);
    let cfg = ViewConfig::capture(&session);

    let text = toml::to_string(&cfg).unwrap();
    assert!(text.contains("orientation = \"rot270\""), "got: {text}");
    let back: ViewConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn test_config_file_on_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
orientation = "mirror_h"

[roi]
x = 10.0
y = 20.0
width = 30.0
height = 40.0
"#
    )
    .unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let cfg: ViewConfig = toml::from_str(&text).unwrap();
    assert_eq!(cfg.orientation, Orientation::MirrorH);
    assert_eq!(cfg.roi.to_rect(), xywh(10.0, 20.0, 30.0, 40.0));

    let mut session = DisplaySession::new(sensor());
    cfg.apply(&mut session);
    let g = *session.geometry();
    assert_eq!(session.roi().display(&g), xywh(600.0, 20.0, 30.0, 40.0));
}
