use kurbo::{Point, Rect, Vec2};

/// Converts between panel pixels and display-space sensor coordinates.
///
/// Built from the fitted visible rectangle (display space) and the draw
/// rectangle it is painted into. Positions outside the draw rectangle are
/// extrapolated linearly; callers that need sensor bounds clamp themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMapper {
    visible: Rect,
    draw: Rect,
}

impl ScreenMapper {
    pub fn new(visible: Rect, draw: Rect) -> Self {
        Self { visible, draw }
    }

    pub fn visible(&self) -> Rect {
        self.visible
    }

    pub fn draw(&self) -> Rect {
        self.draw
    }

    /// Sensor pixels per panel pixel along each axis.
    pub fn scale(&self) -> Vec2 {
        Vec2::new(
            self.visible.width() / self.draw.width(),
            self.visible.height() / self.draw.height(),
        )
    }

    /// Position of a panel point as a fraction of the draw rectangle.
    pub fn fraction(&self, panel: Point) -> Vec2 {
        Vec2::new(
            (panel.x - self.draw.x0) / self.draw.width(),
            (panel.y - self.draw.y0) / self.draw.height(),
        )
    }

    pub fn panel_to_sensor(&self, panel: Point) -> Point {
        let s = self.scale();
        Point::new(
            (panel.x - self.draw.x0) * s.x + self.visible.x0,
            (panel.y - self.draw.y0) * s.y + self.visible.y0,
        )
    }

    pub fn sensor_to_panel(&self, sensor: Point) -> Point {
        let s = self.scale();
        Point::new(
            (sensor.x - self.visible.x0) / s.x + self.draw.x0,
            (sensor.y - self.visible.y0) / s.y + self.draw.y0,
        )
    }

    pub fn sensor_rect_to_panel(&self, sensor: Rect) -> Rect {
        let s = self.scale();
        let origin = self.sensor_to_panel(sensor.origin());
        Rect::from_origin_size(
            origin,
            (sensor.width() / s.x, sensor.height() / s.y),
        )
    }

    /// Convert a pointer movement in panel pixels into a sensor-space delta.
    pub fn panel_delta_to_sensor(&self, delta: Vec2) -> Vec2 {
        let s = self.scale();
        Vec2::new(delta.x * s.x, delta.y * s.y)
    }
}
