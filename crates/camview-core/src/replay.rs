//! Scripted replay of pointer and command sequences against a session.
//!
//! Scripts are plain serde data, so they can be kept as TOML or JSON next to
//! the test that produced them:
//!
//! ```toml
//! panel = { width = 450.0, height = 600.0 }
//!
//! [[events]]
//! kind = "mode"
//! mode = "marker2"
//!
//! [[events]]
//! kind = "press"
//! x = 100.0
//! y = 200.0
//! ```

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ViewConfig;
use crate::error::Result;
use crate::interaction::{PointerButton, PointerOutcome, ProjectionAxis, SpecialMouseMode};
use crate::orientation::{Orientation, SensorSize};
use crate::session::DisplaySession;

/// One step of a script. Pointer positions are panel pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEvent {
    Press {
        x: f64,
        y: f64,
        #[serde(default)]
        button: PointerButton,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default = "default_held")]
        held: bool,
    },
    Release {
        x: f64,
        y: f64,
    },
    Wheel {
        x: f64,
        y: f64,
        delta: f64,
    },
    Mode {
        mode: SpecialMouseMode,
        #[serde(default = "default_held")]
        checked: bool,
    },
    /// Select (or with `checked = false`, clear) the marker a projection
    /// strip moves. `index` is 0-based.
    ProjectionMode {
        axis: ProjectionAxis,
        index: usize,
        #[serde(default = "default_held")]
        checked: bool,
    },
    ProjectionPress {
        axis: ProjectionAxis,
        x: f64,
        y: f64,
    },
    ProjectionMove {
        axis: ProjectionAxis,
        x: f64,
        y: f64,
        #[serde(default = "default_held")]
        held: bool,
    },
    Orientation {
        orientation: Orientation,
    },
    Resize {
        width: f64,
        height: f64,
    },
    ZoomIn,
    ZoomOut,
    ZoomReset,
    ZoomToRoi,
    RoiReset,
    MarkerReset,
    ProjMarkerReset,
}

fn default_held() -> bool {
    true
}

/// What a replayed step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Pointer(PointerOutcome),
    Command,
}

impl ScriptEvent {
    pub fn apply(&self, session: &mut DisplaySession) -> Result<StepOutcome> {
        let outcome = match *self {
            Self::Press { x, y, button } => {
                StepOutcome::Pointer(session.pointer_press(Point::new(x, y), button)?)
            }
            Self::Move { x, y, held } => {
                StepOutcome::Pointer(session.pointer_move(Point::new(x, y), held)?)
            }
            Self::Release { x, y } => {
                StepOutcome::Pointer(session.pointer_release(Point::new(x, y))?)
            }
            Self::Wheel { x, y, delta } => {
                StepOutcome::Pointer(session.wheel(Point::new(x, y), delta)?)
            }
            Self::Mode { mode, checked } => {
                session.toggle_mode(mode, checked);
                StepOutcome::Command
            }
            Self::ProjectionMode {
                axis,
                index,
                checked,
            } => {
                session.toggle_projection_mode(axis, index, checked)?;
                StepOutcome::Command
            }
            Self::ProjectionPress { axis, x, y } => {
                StepOutcome::Pointer(session.projection_press(axis, Point::new(x, y))?)
            }
            Self::ProjectionMove { axis, x, y, held } => {
                StepOutcome::Pointer(session.projection_move(axis, Point::new(x, y), held)?)
            }
            Self::Orientation { orientation } => {
                session.set_orientation(orientation);
                StepOutcome::Command
            }
            Self::Resize { width, height } => {
                session.resize_panel(width, height);
                StepOutcome::Command
            }
            Self::ZoomIn => {
                session.zoom_in()?;
                StepOutcome::Command
            }
            Self::ZoomOut => {
                session.zoom_out()?;
                StepOutcome::Command
            }
            Self::ZoomReset => {
                session.zoom_reset()?;
                StepOutcome::Command
            }
            Self::ZoomToRoi => {
                session.zoom_to_roi();
                StepOutcome::Command
            }
            Self::RoiReset => {
                session.roi_reset();
                StepOutcome::Command
            }
            Self::MarkerReset => {
                session.marker_reset();
                StepOutcome::Command
            }
            Self::ProjMarkerReset => {
                session.proj_marker_reset();
                StepOutcome::Command
            }
        };
        Ok(outcome)
    }
}

/// A complete replay: starting state plus the events to apply in order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub sensor: SensorSize,
    /// Initial panel size. Without one, pointer events fail until a
    /// `resize` event arrives.
    #[serde(default)]
    pub panel: Option<Size>,
    /// Snapshot applied before the first event.
    #[serde(default)]
    pub view: Option<ViewConfig>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl ReplayScript {
    /// Session in the script's starting state.
    pub fn session(&self) -> DisplaySession {
        let mut session = DisplaySession::new(self.sensor);
        if let Some(view) = &self.view {
            view.apply(&mut session);
        }
        if let Some(panel) = self.panel {
            session.resize_panel(panel.width, panel.height);
        }
        session
    }

    /// Apply every event to `session`, stopping at the first failure.
    pub fn run(&self, session: &mut DisplaySession) -> Result<Vec<StepOutcome>> {
        let mut outcomes = Vec::with_capacity(self.events.len());
        for (step, event) in self.events.iter().enumerate() {
            debug!(step, ?event, "Replaying event");
            outcomes.push(event.apply(session)?);
        }
        Ok(outcomes)
    }

    /// Build the starting session and run the script against it.
    pub fn play(&self) -> Result<(DisplaySession, Vec<StepOutcome>)> {
        let mut session = self.session();
        let outcomes = self.run(&mut session)?;
        Ok((session, outcomes))
    }
}
