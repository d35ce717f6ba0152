use kurbo::{Point, Rect};

use crate::anchored::AnchoredRect;
use crate::orientation::DisplayGeometry;

/// Corner-drag state for resizing the ROI with a single gesture.
///
/// Each axis remembers which edge is the fixed anchor. When the pointer
/// crosses the anchor, the anchor moves to the other edge at the same
/// position, so the rectangle flips through its anchor instead of inverting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoiDrag {
    pub anchor_right: bool,
    pub anchor_bottom: bool,
}

/// Resolve one axis: returns the new (low, high) inclusive edges and anchor flag.
fn track_axis(low: f64, high: f64, anchor_high: bool, p: f64) -> (f64, f64, bool) {
    let (mut low, mut high, mut anchor_high) = (low, high, anchor_high);
    if !anchor_high && p < low {
        anchor_high = true;
        high = low;
    } else if anchor_high && p > high {
        anchor_high = false;
        low = high;
    }
    if anchor_high {
        low = p;
    } else {
        high = p;
    }
    (low, high, anchor_high)
}

impl RoiDrag {
    /// Start a new drag with the top-left corner anchored.
    pub fn begin(&mut self) {
        *self = Self::default();
    }

    /// Move the free corner of `roi` to the display-space sensor position `p`.
    pub fn drag_to(&mut self, roi: &mut AnchoredRect, geometry: &DisplayGeometry, p: Point) {
        let (left, right, anchor_right) = track_axis(
            roi.left(geometry),
            roi.right(geometry),
            self.anchor_right,
            p.x,
        );
        let (top, bottom, anchor_bottom) = track_axis(
            roi.top(geometry),
            roi.bottom(geometry),
            self.anchor_bottom,
            p.y,
        );
        self.anchor_right = anchor_right;
        self.anchor_bottom = anchor_bottom;

        let rect = Rect::from_origin_size((left, top), (right - left + 1.0, bottom - top + 1.0));
        roi.set_display_rect(geometry, rect);
    }
}
