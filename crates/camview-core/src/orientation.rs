use std::fmt;

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SENSOR_HEIGHT, DEFAULT_SENSOR_WIDTH};
use crate::error::{CamviewError, Result};

/// How the sensor's pixel grid is rotated/mirrored for display.
///
/// The eight values are the symmetries of a rectangle: a rotation by a
/// multiple of 90° optionally followed by a horizontal mirror. Numeric codes
/// follow declaration order (0..=7).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Identity,
    MirrorH,
    Rot90,
    Rot90MirrorH,
    Rot180,
    Rot180MirrorH,
    Rot270,
    Rot270MirrorH,
}

impl Orientation {
    pub const ALL: &[Self] = &[
        Self::Identity,
        Self::MirrorH,
        Self::Rot90,
        Self::Rot90MirrorH,
        Self::Rot180,
        Self::Rot180MirrorH,
        Self::Rot270,
        Self::Rot270MirrorH,
    ];

    /// Stable numeric code, as stored by older configuration files.
    pub fn code(self) -> u8 {
        match self {
            Self::Identity => 0,
            Self::MirrorH => 1,
            Self::Rot90 => 2,
            Self::Rot90MirrorH => 3,
            Self::Rot180 => 4,
            Self::Rot180MirrorH => 5,
            Self::Rot270 => 6,
            Self::Rot270MirrorH => 7,
        }
    }

    pub fn from_code(code: u8) -> Result<Self> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(CamviewError::InvalidOrientation(code))
    }

    /// True for the 90° and 270° variants, which swap display width and height.
    pub fn is_rotated(self) -> bool {
        self.code() & 2 == 2
    }

    pub fn is_mirrored(self) -> bool {
        self.code() & 1 == 1
    }

    /// Size of the sensor as seen in display space.
    pub fn display_size(self, sensor: SensorSize) -> Size {
        let (w, h) = sensor.as_f64();
        if self.is_rotated() {
            Size::new(h, w)
        } else {
            Size::new(w, h)
        }
    }

    /// Map an absolute (sensor) pixel position into display space.
    pub fn to_display(self, sensor: SensorSize, p: Point) -> Point {
        let (w, h) = sensor.as_f64();
        let (x, y) = (p.x, p.y);
        match self {
            Self::Identity => Point::new(x, y),
            Self::MirrorH => Point::new(w - 1.0 - x, y),
            Self::Rot90 => Point::new(y, w - 1.0 - x),
            Self::Rot90MirrorH => Point::new(y, x),
            Self::Rot180 => Point::new(w - 1.0 - x, h - 1.0 - y),
            Self::Rot180MirrorH => Point::new(x, h - 1.0 - y),
            Self::Rot270 => Point::new(h - 1.0 - y, x),
            Self::Rot270MirrorH => Point::new(h - 1.0 - y, w - 1.0 - x),
        }
    }

    /// Inverse of [`Orientation::to_display`].
    pub fn to_absolute(self, sensor: SensorSize, p: Point) -> Point {
        let (w, h) = sensor.as_f64();
        let (x, y) = (p.x, p.y);
        match self {
            Self::Identity => Point::new(x, y),
            Self::MirrorH => Point::new(w - 1.0 - x, y),
            Self::Rot90 => Point::new(w - 1.0 - y, x),
            Self::Rot90MirrorH => Point::new(y, x),
            Self::Rot180 => Point::new(w - 1.0 - x, h - 1.0 - y),
            Self::Rot180MirrorH => Point::new(x, h - 1.0 - y),
            Self::Rot270 => Point::new(y, h - 1.0 - x),
            Self::Rot270MirrorH => Point::new(w - 1.0 - y, h - 1.0 - x),
        }
    }

    /// Map an absolute pixel rectangle to the display rectangle covering its image.
    ///
    /// Width and height are swapped for rotated orientations. The input must
    /// have non-negative size.
    pub fn rect_to_display(self, sensor: SensorSize, r: Rect) -> Rect {
        let (sw, sh) = sensor.as_f64();
        let (x, y, w, h) = (r.x0, r.y0, r.width(), r.height());
        let (dx, dy, dw, dh) = match self {
            Self::Identity => (x, y, w, h),
            Self::MirrorH => (sw - x - w, y, w, h),
            Self::Rot90 => (y, sw - x - w, h, w),
            Self::Rot90MirrorH => (y, x, h, w),
            Self::Rot180 => (sw - x - w, sh - y - h, w, h),
            Self::Rot180MirrorH => (x, sh - y - h, w, h),
            Self::Rot270 => (sh - y - h, x, h, w),
            Self::Rot270MirrorH => (sh - y - h, sw - x - w, h, w),
        };
        Rect::from_origin_size((dx, dy), (dw, dh))
    }

    /// Inverse of [`Orientation::rect_to_display`].
    pub fn rect_to_absolute(self, sensor: SensorSize, r: Rect) -> Rect {
        let (sw, sh) = sensor.as_f64();
        let (x, y, w, h) = (r.x0, r.y0, r.width(), r.height());
        let (ax, ay, aw, ah) = match self {
            Self::Identity => (x, y, w, h),
            Self::MirrorH => (sw - x - w, y, w, h),
            Self::Rot90 => (sw - y - h, x, h, w),
            Self::Rot90MirrorH => (y, x, h, w),
            Self::Rot180 => (sw - x - w, sh - y - h, w, h),
            Self::Rot180MirrorH => (x, sh - y - h, w, h),
            Self::Rot270 => (y, sh - x - w, h, w),
            Self::Rot270MirrorH => (sw - y - h, sh - x - w, h, w),
        };
        Rect::from_origin_size((ax, ay), (aw, ah))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "0°"),
            Self::MirrorH => write!(f, "0° mirrored"),
            Self::Rot90 => write!(f, "90°"),
            Self::Rot90MirrorH => write!(f, "90° mirrored"),
            Self::Rot180 => write!(f, "180°"),
            Self::Rot180MirrorH => write!(f, "180° mirrored"),
            Self::Rot270 => write!(f, "270°"),
            Self::Rot270MirrorH => write!(f, "270° mirrored"),
        }
    }
}

/// Sensor pixel grid dimensions, always in absolute (un-rotated) space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensorSize {
    pub width: u32,
    pub height: u32,
}

impl SensorSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CamviewError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn as_f64(self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    /// The whole sensor as an absolute rectangle.
    pub fn full_rect(self) -> Rect {
        let (w, h) = self.as_f64();
        Rect::new(0.0, 0.0, w, h)
    }

    /// Intersect an absolute rectangle with the sensor.
    ///
    /// Returns a zero-sized rectangle at the nearest edge when there is no overlap.
    pub fn clamp_rect(self, r: Rect) -> Rect {
        let (w, h) = self.as_f64();
        let x0 = r.x0.clamp(0.0, w);
        let y0 = r.y0.clamp(0.0, h);
        let x1 = r.x1.clamp(x0, w);
        let y1 = r.y1.clamp(y0, h);
        Rect::new(x0, y0, x1, y1)
    }
}

impl Default for SensorSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_SENSOR_WIDTH,
            height: DEFAULT_SENSOR_HEIGHT,
        }
    }
}

impl fmt::Display for SensorSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Everything a display-space transform depends on.
///
/// Anchored entities tag their display caches with this value; a cache is
/// stale as soon as either the orientation or the sensor size changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DisplayGeometry {
    pub orientation: Orientation,
    pub sensor: SensorSize,
}

impl DisplayGeometry {
    pub fn new(orientation: Orientation, sensor: SensorSize) -> Self {
        Self {
            orientation,
            sensor,
        }
    }

    pub fn to_display(&self, p: Point) -> Point {
        self.orientation.to_display(self.sensor, p)
    }

    pub fn to_absolute(&self, p: Point) -> Point {
        self.orientation.to_absolute(self.sensor, p)
    }

    pub fn rect_to_display(&self, r: Rect) -> Rect {
        self.orientation.rect_to_display(self.sensor, r)
    }

    pub fn rect_to_absolute(&self, r: Rect) -> Rect {
        self.orientation.rect_to_absolute(self.sensor, r)
    }

    pub fn display_size(&self) -> Size {
        self.orientation.display_size(self.sensor)
    }
}
