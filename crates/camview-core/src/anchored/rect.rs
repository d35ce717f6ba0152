use std::cell::Cell;

use kurbo::Rect;

use crate::orientation::DisplayGeometry;

/// A rectangle anchored to the sensor pixel grid.
///
/// Stored as origin + size in absolute space with non-negative size. Edges
/// are pixel-inclusive: a rectangle at `x` with width `w` covers columns
/// `x..=x + w - 1`, so `right() == x + w - 1`.
#[derive(Clone, Debug)]
pub struct AnchoredRect {
    absolute: Rect,
    cache: Cell<Option<(DisplayGeometry, Rect)>>,
}

/// Fold a negative extent back into a forward one covering the same pixels.
fn normalize(x: f64, y: f64, w: f64, h: f64) -> Rect {
    let (x, w) = if w < 0.0 { (x + w + 1.0, -w) } else { (x, w) };
    let (y, h) = if h < 0.0 { (y + h + 1.0, -h) } else { (y, h) };
    Rect::new(x, y, x + w, y + h)
}

impl AnchoredRect {
    pub fn from_absolute(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            absolute: normalize(x, y, w, h),
            cache: Cell::new(None),
        }
    }

    /// Build from display-space origin and size under `geometry`.
    ///
    /// A negative width or height describes a rectangle dragged "backwards"
    /// and is stored as the equivalent forward rectangle.
    pub fn from_display(geometry: &DisplayGeometry, x: f64, y: f64, w: f64, h: f64) -> Self {
        let display = normalize(x, y, w, h);
        Self {
            absolute: geometry.rect_to_absolute(display),
            cache: Cell::new(Some((*geometry, display))),
        }
    }

    pub fn from_display_rect(geometry: &DisplayGeometry, r: Rect) -> Self {
        Self::from_display(geometry, r.x0, r.y0, r.width(), r.height())
    }

    pub fn absolute(&self) -> Rect {
        self.absolute
    }

    /// Rectangle in display space under `geometry`.
    pub fn display(&self, geometry: &DisplayGeometry) -> Rect {
        if let Some((tag, cached)) = self.cache.get() {
            if tag == *geometry {
                return cached;
            }
        }
        let display = geometry.rect_to_display(self.absolute);
        self.cache.set(Some((*geometry, display)));
        display
    }

    pub fn set_absolute(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.absolute = normalize(x, y, w, h);
        self.cache.set(None);
    }

    pub fn set_display(&mut self, geometry: &DisplayGeometry, x: f64, y: f64, w: f64, h: f64) {
        *self = Self::from_display(geometry, x, y, w, h);
    }

    pub fn set_display_rect(&mut self, geometry: &DisplayGeometry, r: Rect) {
        *self = Self::from_display_rect(geometry, r);
    }

    pub fn is_cached_for(&self, geometry: &DisplayGeometry) -> bool {
        matches!(self.cache.get(), Some((tag, _)) if tag == *geometry)
    }

    // Display-space edges.

    pub fn left(&self, geometry: &DisplayGeometry) -> f64 {
        self.display(geometry).x0
    }

    pub fn top(&self, geometry: &DisplayGeometry) -> f64 {
        self.display(geometry).y0
    }

    pub fn right(&self, geometry: &DisplayGeometry) -> f64 {
        let r = self.display(geometry);
        r.x0 + r.width() - 1.0
    }

    pub fn bottom(&self, geometry: &DisplayGeometry) -> f64 {
        let r = self.display(geometry);
        r.y0 + r.height() - 1.0
    }

    // Display-space setters. Each changes exactly one of x, y, width, height.

    pub fn set_left(&mut self, geometry: &DisplayGeometry, x: f64) {
        let r = self.display(geometry);
        self.set_display(geometry, x, r.y0, r.width(), r.height());
    }

    /// Move the right edge to column `x`. Past the left edge, the rectangle
    /// becomes the span `x..=left`.
    pub fn set_right(&mut self, geometry: &DisplayGeometry, x: f64) {
        let r = self.display(geometry);
        let (lo, hi) = (x.min(r.x0), x.max(r.x0));
        self.set_display(geometry, lo, r.y0, hi - lo + 1.0, r.height());
    }

    pub fn set_top(&mut self, geometry: &DisplayGeometry, y: f64) {
        let r = self.display(geometry);
        self.set_display(geometry, r.x0, y, r.width(), r.height());
    }

    pub fn set_bottom(&mut self, geometry: &DisplayGeometry, y: f64) {
        let r = self.display(geometry);
        let (lo, hi) = (y.min(r.y0), y.max(r.y0));
        self.set_display(geometry, r.x0, lo, r.width(), hi - lo + 1.0);
    }

    pub fn set_width(&mut self, geometry: &DisplayGeometry, w: f64) {
        let r = self.display(geometry);
        self.set_display(geometry, r.x0, r.y0, w, r.height());
    }

    pub fn set_height(&mut self, geometry: &DisplayGeometry, h: f64) {
        let r = self.display(geometry);
        self.set_display(geometry, r.x0, r.y0, r.width(), h);
    }
}

impl PartialEq for AnchoredRect {
    fn eq(&self, other: &Self) -> bool {
        self.absolute == other.absolute
    }
}

impl From<Rect> for AnchoredRect {
    fn from(r: Rect) -> Self {
        Self::from_absolute(r.x0, r.y0, r.width(), r.height())
    }
}
