//! The single owner of display state for one camera view.
//!
//! A [`DisplaySession`] holds the orientation and sensor size every anchored
//! entity is read under, the requested zoom rectangle and its fitted viewport,
//! the ROI, the four markers and four projection markers, the transient
//! cursor and the pointer interaction state. It is driven from the UI thread only.

use kurbo::{Point, Rect, Size, Vec2};
use tracing::{debug, info};

use crate::anchored::{AnchoredPoint, AnchoredRect};
use crate::consts::{
    MARKER_COUNT, MARKER_PARK_OFFSET, PROJ_MARKER_STEP, WHEEL_ZOOM_STEP, ZOOM_IN_FACTOR,
    ZOOM_OUT_FACTOR,
};
use crate::error::{CamviewError, Result};
use crate::interaction::{
    PanDrag, PointerButton, PointerOutcome, ProjectionAxis, RoiDrag, SpecialMouseMode,
};
use crate::orientation::{DisplayGeometry, Orientation, SensorSize};
use crate::viewport::{fit, ScreenMapper, ViewportFit};

/// Everything the renderer needs for one paint, in panel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderView {
    /// Display-space sensor rectangle to sample from the frame buffer.
    pub source: Rect,
    /// Panel rectangle to draw it into.
    pub target: Rect,
    pub zoom_factor: f64,
    pub markers: [Point; MARKER_COUNT],
    pub proj_markers: [Point; MARKER_COUNT],
    pub roi: Rect,
    pub cursor: Point,
}

/// Default marker positions, parked just outside each sensor corner.
fn parked_markers(sensor: SensorSize) -> [AnchoredPoint; MARKER_COUNT] {
    let (w, h) = sensor.as_f64();
    let d = MARKER_PARK_OFFSET;
    [
        AnchoredPoint::from_absolute(-d, -d),
        AnchoredPoint::from_absolute(w + d, -d),
        AnchoredPoint::from_absolute(w + d, h + d),
        AnchoredPoint::from_absolute(-d, h + d),
    ]
}

/// Default projection markers, stepping diagonally out from the sensor origin.
fn default_proj_markers() -> [AnchoredPoint; MARKER_COUNT] {
    let step = PROJ_MARKER_STEP;
    [0.0, -step, -2.0 * step, -3.0 * step].map(|d| AnchoredPoint::from_absolute(d, d))
}

fn out_of_range(index: usize) -> CamviewError {
    CamviewError::MarkerIndexOutOfRange {
        index,
        total: MARKER_COUNT,
    }
}

fn full_sensor(sensor: SensorSize) -> AnchoredRect {
    AnchoredRect::from(sensor.full_rect())
}

#[derive(Clone, Debug)]
pub struct DisplaySession {
    geometry: DisplayGeometry,
    panel: Size,
    zoom_rect: AnchoredRect,
    viewport: Option<ViewportFit>,
    roi: AnchoredRect,
    markers: [AnchoredPoint; MARKER_COUNT],
    proj_markers: [AnchoredPoint; MARKER_COUNT],
    cursor: AnchoredPoint,
    mode: SpecialMouseMode,
    proj_h_mode: Option<usize>,
    proj_v_mode: Option<usize>,
    roi_drag: RoiDrag,
    pan_drag: PanDrag,
}

impl DisplaySession {
    /// New session showing the whole sensor. No fit exists until the panel
    /// reports a positive size.
    pub fn new(sensor: SensorSize) -> Self {
        let (w, h) = sensor.as_f64();
        Self {
            geometry: DisplayGeometry::new(Orientation::Identity, sensor),
            panel: Size::ZERO,
            zoom_rect: full_sensor(sensor),
            viewport: None,
            roi: full_sensor(sensor),
            markers: parked_markers(sensor),
            proj_markers: default_proj_markers(),
            cursor: AnchoredPoint::from_absolute(w, h),
            mode: SpecialMouseMode::None,
            proj_h_mode: None,
            proj_v_mode: None,
            roi_drag: RoiDrag::default(),
            pan_drag: PanDrag::default(),
        }
    }

    // -----------------------------------------------------------------------
    // Geometry inputs
    // -----------------------------------------------------------------------

    pub fn geometry(&self) -> &DisplayGeometry {
        &self.geometry
    }

    pub fn orientation(&self) -> Orientation {
        self.geometry.orientation
    }

    pub fn sensor(&self) -> SensorSize {
        self.geometry.sensor
    }

    pub fn panel(&self) -> Size {
        self.panel
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.geometry.orientation == orientation {
            return;
        }
        info!(from = %self.geometry.orientation, to = %orientation, "Orientation changed");
        self.geometry.orientation = orientation;
        self.end_drags();
        self.refit();
    }

    /// Adopt a new sensor size reported by the device.
    ///
    /// With `reset`, the zoom rectangle and ROI go back to the full sensor and
    /// both marker sets to their defaults; otherwise the absolute values are
    /// kept as they are.
    pub fn set_sensor_size(&mut self, width: u32, height: u32, reset: bool) -> Result<()> {
        let sensor = SensorSize::new(width, height)?;
        info!(sensor = %sensor, reset, "Sensor size changed");
        self.geometry.sensor = sensor;
        if reset {
            self.zoom_rect = full_sensor(sensor);
            self.roi = full_sensor(sensor);
            self.markers = parked_markers(sensor);
            self.proj_markers = default_proj_markers();
        }
        self.end_drags();
        self.refit();
        Ok(())
    }

    /// Panel resize notification, in display pixels.
    pub fn resize_panel(&mut self, width: f64, height: f64) {
        self.panel = Size::new(width, height);
        self.refit();
    }

    fn refit(&mut self) {
        match fit(&mut self.zoom_rect, &self.geometry, self.panel) {
            Ok(viewport) => self.viewport = Some(viewport),
            Err(err) => {
                debug!(%err, "Fit deferred");
                self.viewport = None;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Viewport read-outs
    // -----------------------------------------------------------------------

    pub fn viewport(&self) -> Option<&ViewportFit> {
        self.viewport.as_ref()
    }

    pub fn zoom_rect(&self) -> &AnchoredRect {
        &self.zoom_rect
    }

    pub fn zoom_factor(&self) -> Option<f64> {
        self.viewport.as_ref().map(|v| v.zoom_factor)
    }

    pub fn draw_rect(&self) -> Option<Rect> {
        self.viewport.as_ref().map(|v| v.draw_rect)
    }

    pub fn visible_display(&self) -> Option<Rect> {
        self.viewport
            .as_ref()
            .map(|v| v.visible.display(&self.geometry))
    }

    /// Mapper for the current fit, or `PanelNotReady`.
    pub fn mapper(&self) -> Result<ScreenMapper> {
        let viewport = self.viewport.as_ref().ok_or(CamviewError::PanelNotReady {
            width: self.panel.width,
            height: self.panel.height,
        })?;
        Ok(ScreenMapper::new(
            viewport.visible.display(&self.geometry),
            viewport.draw_rect,
        ))
    }

    pub fn render_view(&self) -> Result<RenderView> {
        let mapper = self.mapper()?;
        let zoom_factor = self.zoom_factor().unwrap_or_default();
        let markers = std::array::from_fn(|i| {
            mapper.sensor_to_panel(self.markers[i].display(&self.geometry))
        });
        let proj_markers = std::array::from_fn(|i| {
            mapper.sensor_to_panel(self.proj_markers[i].display(&self.geometry))
        });
        Ok(RenderView {
            source: mapper.visible(),
            target: mapper.draw(),
            zoom_factor,
            markers,
            proj_markers,
            roi: mapper.sensor_rect_to_panel(self.roi.display(&self.geometry)),
            cursor: mapper.sensor_to_panel(self.cursor.display(&self.geometry)),
        })
    }

    // -----------------------------------------------------------------------
    // Zoom rectangle
    // -----------------------------------------------------------------------

    pub fn set_zoom_rect_absolute(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.zoom_rect.set_absolute(x, y, w, h);
        self.refit();
    }

    pub fn set_zoom_rect_display(&mut self, r: Rect) {
        self.zoom_rect.set_display_rect(&self.geometry, r);
        self.refit();
    }

    /// Shrink (`factor > 1`) or grow the visible rectangle about its centre.
    pub fn zoom_by_factor(&mut self, factor: f64) -> Result<()> {
        let visible = self.mapper()?.visible();
        let size = visible.size() / factor;
        let origin = visible.center() - size.to_vec2() * 0.5;
        self.set_zoom_rect_display(Rect::from_origin_size(origin, size));
        Ok(())
    }

    pub fn zoom_in(&mut self) -> Result<()> {
        self.zoom_by_factor(ZOOM_IN_FACTOR)
    }

    pub fn zoom_out(&mut self) -> Result<()> {
        self.zoom_by_factor(ZOOM_OUT_FACTOR)
    }

    /// Zoom so one sensor pixel covers one panel pixel, keeping the centre.
    pub fn zoom_reset(&mut self) -> Result<()> {
        let zoom_factor = self
            .zoom_factor()
            .ok_or(CamviewError::PanelNotReady {
                width: self.panel.width,
                height: self.panel.height,
            })?;
        self.zoom_by_factor(1.0 / zoom_factor)
    }

    pub fn zoom_to_roi(&mut self) {
        self.zoom_rect = AnchoredRect::from(self.roi.absolute());
        self.refit();
    }

    /// Zoom about a panel position so the sensor point under it stays put.
    ///
    /// A negative delta zooms out, a positive one zooms in; zero is ignored.
    pub fn wheel(&mut self, pos: Point, delta: f64) -> Result<PointerOutcome> {
        let mapper = self.mapper()?;
        self.update_cursor(&mapper, pos);
        if delta == 0.0 {
            return Ok(PointerOutcome::CursorMoved);
        }
        let factor = if delta < 0.0 {
            WHEEL_ZOOM_STEP
        } else {
            1.0 / WHEEL_ZOOM_STEP
        };

        // Scale the requested rect about the cursor. The refit grows it about
        // its centre, which keeps the cursor point fixed as well.
        let cursor = mapper.panel_to_sensor(pos);
        let requested = self.zoom_rect.display(&self.geometry);
        let fraction = Vec2::new(
            (cursor.x - requested.x0) / requested.width(),
            (cursor.y - requested.y0) / requested.height(),
        );
        let size = requested.size() * factor;
        let origin = Point::new(
            cursor.x - size.width * fraction.x,
            cursor.y - size.height * fraction.y,
        );
        self.set_zoom_rect_display(Rect::from_origin_size(origin, size));
        Ok(PointerOutcome::Zoomed)
    }

    fn pan_by(&mut self, mapper: &ScreenMapper, panel_delta: Vec2) {
        if panel_delta == Vec2::ZERO {
            return;
        }
        let delta = mapper.panel_delta_to_sensor(panel_delta);
        let requested = self.zoom_rect.display(&self.geometry);
        self.set_zoom_rect_display(requested - delta);
    }

    // -----------------------------------------------------------------------
    // ROI and markers
    // -----------------------------------------------------------------------

    pub fn roi(&self) -> &AnchoredRect {
        &self.roi
    }

    pub fn set_roi_absolute(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.roi.set_absolute(x, y, w, h);
    }

    pub fn set_roi_display(&mut self, r: Rect) {
        self.roi.set_display_rect(&self.geometry, r);
    }

    /// ROI back to the whole sensor. Leaves any special mouse mode.
    pub fn roi_reset(&mut self) {
        self.set_mode(SpecialMouseMode::None);
        self.roi = full_sensor(self.geometry.sensor);
    }

    pub fn markers(&self) -> &[AnchoredPoint; MARKER_COUNT] {
        &self.markers
    }

    pub fn marker(&self, index: usize) -> Result<&AnchoredPoint> {
        self.markers.get(index).ok_or(out_of_range(index))
    }

    fn marker_mut(&mut self, index: usize) -> Result<&mut AnchoredPoint> {
        self.markers.get_mut(index).ok_or(out_of_range(index))
    }

    pub fn set_marker_absolute(&mut self, index: usize, x: f64, y: f64) -> Result<()> {
        self.marker_mut(index)?.set_absolute(x, y);
        Ok(())
    }

    pub fn set_marker_display(&mut self, index: usize, x: f64, y: f64) -> Result<()> {
        let geometry = self.geometry;
        self.marker_mut(index)?.set_display(&geometry, x, y);
        Ok(())
    }

    pub fn set_markers_absolute(&mut self, points: [Point; MARKER_COUNT]) {
        self.markers = points.map(AnchoredPoint::from);
    }

    pub fn marker_reset(&mut self) {
        self.markers = parked_markers(self.geometry.sensor);
    }

    // -----------------------------------------------------------------------
    // Projection markers
    // -----------------------------------------------------------------------

    pub fn proj_markers(&self) -> &[AnchoredPoint; MARKER_COUNT] {
        &self.proj_markers
    }

    pub fn proj_marker(&self, index: usize) -> Result<&AnchoredPoint> {
        self.proj_markers.get(index).ok_or(out_of_range(index))
    }

    fn proj_marker_mut(&mut self, index: usize) -> Result<&mut AnchoredPoint> {
        self.proj_markers.get_mut(index).ok_or(out_of_range(index))
    }

    /// Move projection marker `index` to display column `x`, keeping its
    /// display row.
    pub fn set_proj_marker_x(&mut self, index: usize, x: f64) -> Result<()> {
        let geometry = self.geometry;
        let marker = self.proj_marker_mut(index)?;
        let p = marker.display(&geometry);
        marker.set_display(&geometry, x, p.y);
        Ok(())
    }

    /// Move projection marker `index` to display row `y`, keeping its
    /// display column.
    pub fn set_proj_marker_y(&mut self, index: usize, y: f64) -> Result<()> {
        let geometry = self.geometry;
        let marker = self.proj_marker_mut(index)?;
        let p = marker.display(&geometry);
        marker.set_display(&geometry, p.x, y);
        Ok(())
    }

    pub fn set_proj_markers_absolute(&mut self, points: [Point; MARKER_COUNT]) {
        self.proj_markers = points.map(AnchoredPoint::from);
    }

    pub fn proj_marker_reset(&mut self) {
        self.proj_markers = default_proj_markers();
    }

    /// Projection marker moved by drags on the `axis` strip, if any.
    pub fn projection_mode(&self, axis: ProjectionAxis) -> Option<usize> {
        match axis {
            ProjectionAxis::Horizontal => self.proj_h_mode,
            ProjectionAxis::Vertical => self.proj_v_mode,
        }
    }

    /// Select the projection marker the `axis` strip moves. Independent of
    /// the image's mouse mode and of the other strip.
    pub fn set_projection_mode(&mut self, axis: ProjectionAxis, index: Option<usize>) -> Result<()> {
        if let Some(i) = index {
            if i >= MARKER_COUNT {
                return Err(out_of_range(i));
            }
        }
        debug!(%axis, ?index, "Projection mode changed");
        match axis {
            ProjectionAxis::Horizontal => self.proj_h_mode = index,
            ProjectionAxis::Vertical => self.proj_v_mode = index,
        }
        Ok(())
    }

    /// Checkbox-style selection: unchecking clears the strip's mode.
    pub fn toggle_projection_mode(
        &mut self,
        axis: ProjectionAxis,
        index: usize,
        checked: bool,
    ) -> Result<()> {
        self.set_projection_mode(axis, checked.then_some(index))
    }

    /// Press on the `axis` projection strip. `pos` is in panel coordinates;
    /// only the coordinate along `axis` is used.
    pub fn projection_press(&mut self, axis: ProjectionAxis, pos: Point) -> Result<PointerOutcome> {
        let Some(index) = self.projection_mode(axis) else {
            return Ok(PointerOutcome::Unchanged);
        };
        let sensor = self.mapper()?.panel_to_sensor(pos);
        match axis {
            ProjectionAxis::Horizontal => self.set_proj_marker_x(index, sensor.x)?,
            ProjectionAxis::Vertical => self.set_proj_marker_y(index, sensor.y)?,
        }
        Ok(PointerOutcome::ProjMarkerMoved(index))
    }

    /// Motion on the `axis` projection strip. Only acts while the primary
    /// button is held.
    pub fn projection_move(
        &mut self,
        axis: ProjectionAxis,
        pos: Point,
        primary_held: bool,
    ) -> Result<PointerOutcome> {
        if !primary_held {
            return Ok(PointerOutcome::Unchanged);
        }
        self.projection_press(axis, pos)
    }

    /// Last pointer position over the panel, in sensor coordinates.
    pub fn cursor(&self) -> &AnchoredPoint {
        &self.cursor
    }

    // -----------------------------------------------------------------------
    // Interaction
    // -----------------------------------------------------------------------

    pub fn mode(&self) -> SpecialMouseMode {
        self.mode
    }

    pub fn roi_drag(&self) -> RoiDrag {
        self.roi_drag
    }

    pub fn set_mode(&mut self, mode: SpecialMouseMode) {
        if self.mode != mode {
            debug!(from = %self.mode, to = %mode, "Mouse mode changed");
        }
        self.mode = mode;
        self.end_drags();
    }

    /// Checkbox-style mode selection: checking activates `mode`, unchecking
    /// returns to panning.
    pub fn toggle_mode(&mut self, mode: SpecialMouseMode, checked: bool) {
        if checked {
            self.set_mode(mode);
        } else {
            self.set_mode(SpecialMouseMode::None);
        }
    }

    fn end_drags(&mut self) {
        self.pan_drag.end();
        self.roi_drag.begin();
    }

    fn update_cursor(&mut self, mapper: &ScreenMapper, pos: Point) -> Point {
        let sensor = mapper.panel_to_sensor(pos);
        self.cursor.set_display(&self.geometry, sensor.x, sensor.y);
        sensor
    }

    /// Apply a special-mode drag at display-space sensor position `sensor`.
    fn apply_mode(&mut self, sensor: Point) -> PointerOutcome {
        let geometry = self.geometry;
        match self.mode {
            SpecialMouseMode::None => PointerOutcome::CursorMoved,
            SpecialMouseMode::Roi => {
                self.roi_drag.drag_to(&mut self.roi, &geometry, sensor);
                PointerOutcome::RoiChanged
            }
            mode => match mode.marker_index() {
                Some(index) => {
                    self.markers[index].set_display(&geometry, sensor.x, sensor.y);
                    PointerOutcome::MarkerMoved(index)
                }
                None => PointerOutcome::CursorMoved,
            },
        }
    }

    pub fn pointer_press(&mut self, pos: Point, button: PointerButton) -> Result<PointerOutcome> {
        let mapper = self.mapper()?;
        let sensor = self.update_cursor(&mapper, pos);
        let geometry = self.geometry;

        let outcome = match self.mode {
            SpecialMouseMode::None => {
                self.pan_drag.start(pos);
                PointerOutcome::CursorMoved
            }
            SpecialMouseMode::Roi => {
                self.roi_drag.begin();
                match button {
                    PointerButton::Secondary => {
                        // Pressing past the top-left corner moves that corner,
                        // so the drag continues from the pointer's edge.
                        self.roi_drag.anchor_right = sensor.x < self.roi.left(&geometry);
                        self.roi_drag.anchor_bottom = sensor.y < self.roi.top(&geometry);
                        self.roi.set_right(&geometry, sensor.x);
                        self.roi.set_bottom(&geometry, sensor.y);
                    }
                    PointerButton::Primary => {
                        self.roi.set_display(&geometry, sensor.x, sensor.y, 1.0, 1.0);
                    }
                }
                PointerOutcome::RoiChanged
            }
            _ => self.apply_mode(sensor),
        };
        Ok(outcome)
    }

    /// Pointer motion. Only acts on the view while the primary button is held.
    pub fn pointer_move(&mut self, pos: Point, primary_held: bool) -> Result<PointerOutcome> {
        let mapper = self.mapper()?;
        let sensor = self.update_cursor(&mapper, pos);
        if !primary_held {
            return Ok(PointerOutcome::CursorMoved);
        }

        if self.mode.is_special() {
            return Ok(self.apply_mode(sensor));
        }
        match self.pan_drag.update(pos) {
            Some(delta) => {
                self.pan_by(&mapper, delta);
                Ok(PointerOutcome::Panned)
            }
            None => Ok(PointerOutcome::CursorMoved),
        }
    }

    /// Pointer release: a final move in special modes, the end of a pan otherwise.
    pub fn pointer_release(&mut self, pos: Point) -> Result<PointerOutcome> {
        let outcome = self.pointer_move(pos, true);
        self.pan_drag.end();
        outcome
    }
}

impl Default for DisplaySession {
    fn default() -> Self {
        Self::new(SensorSize::default())
    }
}
