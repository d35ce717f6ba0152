pub mod mode;
pub mod roi_drag;

pub use mode::{ProjectionAxis, SpecialMouseMode};
pub use roi_drag::RoiDrag;

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Pointer button that started a press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
}

/// What a pointer event changed, so the caller knows what to repaint or persist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Only the transient cursor moved.
    CursorMoved,
    Panned,
    Zoomed,
    MarkerMoved(usize),
    ProjMarkerMoved(usize),
    RoiChanged,
    /// No projection mode is active for the strip.
    Unchanged,
}

/// Tracks the last panel position of an in-progress pan drag.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanDrag {
    last: Option<Point>,
}

impl PanDrag {
    pub fn start(&mut self, pos: Point) {
        self.last = Some(pos);
    }

    /// Return the panel movement since the previous position, if dragging.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(pos);
        Some(pos - last)
    }

    pub fn end(&mut self) {
        self.last = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }
}
