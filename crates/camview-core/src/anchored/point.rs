use std::cell::Cell;

use kurbo::Point;

use crate::orientation::DisplayGeometry;

/// A point anchored to the sensor pixel grid.
#[derive(Clone, Debug)]
pub struct AnchoredPoint {
    absolute: Point,
    cache: Cell<Option<(DisplayGeometry, Point)>>,
}

impl AnchoredPoint {
    pub fn from_absolute(x: f64, y: f64) -> Self {
        Self {
            absolute: Point::new(x, y),
            cache: Cell::new(None),
        }
    }

    /// Build from display-space coordinates under `geometry`.
    ///
    /// The cache is seeded with the given position, tagged with `geometry`.
    pub fn from_display(geometry: &DisplayGeometry, x: f64, y: f64) -> Self {
        let display = Point::new(x, y);
        Self {
            absolute: geometry.to_absolute(display),
            cache: Cell::new(Some((*geometry, display))),
        }
    }

    pub fn absolute(&self) -> Point {
        self.absolute
    }

    /// Position in display space under `geometry`.
    pub fn display(&self, geometry: &DisplayGeometry) -> Point {
        if let Some((tag, cached)) = self.cache.get() {
            if tag == *geometry {
                return cached;
            }
        }
        let display = geometry.to_display(self.absolute);
        self.cache.set(Some((*geometry, display)));
        display
    }

    pub fn set_absolute(&mut self, x: f64, y: f64) {
        self.absolute = Point::new(x, y);
        self.cache.set(None);
    }

    pub fn set_display(&mut self, geometry: &DisplayGeometry, x: f64, y: f64) {
        *self = Self::from_display(geometry, x, y);
    }

    /// True when a display value is cached for `geometry`.
    pub fn is_cached_for(&self, geometry: &DisplayGeometry) -> bool {
        matches!(self.cache.get(), Some((tag, _)) if tag == *geometry)
    }
}

// Equality ignores the cache.
impl PartialEq for AnchoredPoint {
    fn eq(&self, other: &Self) -> bool {
        self.absolute == other.absolute
    }
}

impl From<Point> for AnchoredPoint {
    fn from(p: Point) -> Self {
        Self::from_absolute(p.x, p.y)
    }
}
