use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_SENSOR_HEIGHT, DEFAULT_SENSOR_WIDTH, MARKER_COUNT, MARKER_PARK_OFFSET, PROJ_MARKER_STEP,
};
use crate::orientation::Orientation;
use crate::session::DisplaySession;

/// An absolute-space rectangle as persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectConfig {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectConfig {
    pub fn to_rect(self) -> Rect {
        Rect::from_origin_size((self.x, self.y), (self.width, self.height))
    }
}

impl From<Rect> for RectConfig {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x0,
            y: r.y0,
            width: r.width(),
            height: r.height(),
        }
    }
}

impl Default for RectConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: DEFAULT_SENSOR_WIDTH as f64,
            height: DEFAULT_SENSOR_HEIGHT as f64,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointConfig {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for PointConfig {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Persisted view state: orientation plus every anchored entity, all in
/// absolute sensor coordinates so a snapshot survives orientation changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub zoom: RectConfig,
    #[serde(default)]
    pub roi: RectConfig,
    #[serde(default = "default_markers")]
    pub markers: [PointConfig; MARKER_COUNT],
    #[serde(default = "default_proj_markers")]
    pub proj_markers: [PointConfig; MARKER_COUNT],
}

fn default_markers() -> [PointConfig; MARKER_COUNT] {
    let (w, h) = (DEFAULT_SENSOR_WIDTH as f64, DEFAULT_SENSOR_HEIGHT as f64);
    let d = MARKER_PARK_OFFSET;
    [
        PointConfig { x: -d, y: -d },
        PointConfig { x: w + d, y: -d },
        PointConfig { x: w + d, y: h + d },
        PointConfig { x: -d, y: h + d },
    ]
}

fn default_proj_markers() -> [PointConfig; MARKER_COUNT] {
    let step = PROJ_MARKER_STEP;
    [0.0, -step, -2.0 * step, -3.0 * step].map(|d| PointConfig { x: d, y: d })
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            zoom: RectConfig::default(),
            roi: RectConfig::default(),
            markers: default_markers(),
            proj_markers: default_proj_markers(),
        }
    }
}

impl ViewConfig {
    pub fn capture(session: &DisplaySession) -> Self {
        Self {
            orientation: session.orientation(),
            zoom: session.zoom_rect().absolute().into(),
            roi: session.roi().absolute().into(),
            markers: std::array::from_fn(|i| session.markers()[i].absolute().into()),
            proj_markers: std::array::from_fn(|i| session.proj_markers()[i].absolute().into()),
        }
    }

    /// Restore this snapshot into `session`. The sensor size is left alone.
    pub fn apply(&self, session: &mut DisplaySession) {
        session.set_orientation(self.orientation);
        let z = self.zoom;
        session.set_zoom_rect_absolute(z.x, z.y, z.width, z.height);
        let r = self.roi;
        session.set_roi_absolute(r.x, r.y, r.width, r.height);
        session.set_markers_absolute(self.markers.map(|m| Point::new(m.x, m.y)));
        session.set_proj_markers_absolute(self.proj_markers.map(|m| Point::new(m.x, m.y)));
    }
}
