use kurbo::{Rect, Size};
use tracing::debug;

use crate::anchored::AnchoredRect;
use crate::consts::ASPECT_TOLERANCE;
use crate::error::{CamviewError, Result};
use crate::orientation::DisplayGeometry;

/// Result of fitting a requested zoom rectangle into a panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportFit {
    /// Requested rectangle grown to the panel aspect ratio.
    pub visible: AnchoredRect,
    /// Display pixels per sensor pixel.
    pub zoom_factor: f64,
    /// Part of the panel covered by the image, centred.
    pub draw_rect: Rect,
}

impl ViewportFit {
    /// Recompute the draw rectangle for a resized panel without refitting.
    pub fn redraw(&mut self, geometry: &DisplayGeometry, panel: Size) {
        let visible = self.visible.display(geometry);
        self.draw_rect = centered_draw_rect(visible.size(), self.zoom_factor, panel);
    }
}

fn ensure_ready(panel: Size) -> Result<()> {
    let ok = panel.width.is_finite()
        && panel.height.is_finite()
        && panel.width > 0.0
        && panel.height > 0.0;
    if ok {
        Ok(())
    } else {
        Err(CamviewError::PanelNotReady {
            width: panel.width,
            height: panel.height,
        })
    }
}

/// Grow a display-space rectangle so it matches the panel aspect ratio.
///
/// Returns the visible rectangle and the zoom factor. Non-positive sizes are
/// clamped to 1 first. Growth is centred on the adjusted axis and the input
/// is never shrunk.
pub fn fit_display(requested: Rect, panel: Size) -> Result<(Rect, f64)> {
    ensure_ready(panel)?;

    let mut x = requested.x0;
    let mut y = requested.y0;
    let mut w = requested.width();
    let mut h = requested.height();
    if w <= 0.0 {
        w = 1.0;
    }
    if h <= 0.0 {
        h = 1.0;
    }

    let width_ratio = panel.width / w;
    let height_ratio = panel.height / h;

    if ((width_ratio - height_ratio) / width_ratio).abs() < ASPECT_TOLERANCE {
        return Ok((Rect::from_origin_size((x, y), (w, h)), width_ratio));
    }

    if width_ratio > height_ratio {
        let new_w = w * width_ratio / height_ratio;
        x += (w - new_w) * 0.5;
        w = new_w;
    } else {
        let new_h = h * height_ratio / width_ratio;
        y += (h - new_h) * 0.5;
        h = new_h;
    }

    Ok((Rect::from_origin_size((x, y), (w, h)), panel.width / w))
}

/// Centre an image of `visible` sensor size scaled by `zoom_factor` in the panel.
pub fn centered_draw_rect(visible: Size, zoom_factor: f64, panel: Size) -> Rect {
    let size = visible * zoom_factor;
    let x = (panel.width - size.width) * 0.5;
    let y = (panel.height - size.height) * 0.5;
    Rect::from_origin_size((x, y), size)
}

/// Fit the requested zoom rectangle into a panel of the given display size.
///
/// A degenerate zoom rectangle (zero width or height in display space) is
/// repaired in place before fitting. Fails with
/// [`CamviewError::PanelNotReady`] while the panel has no positive area.
pub fn fit(
    zoom_rect: &mut AnchoredRect,
    geometry: &DisplayGeometry,
    panel: Size,
) -> Result<ViewportFit> {
    ensure_ready(panel)?;

    let requested = zoom_rect.display(geometry);
    if requested.width() <= 0.0 {
        zoom_rect.set_width(geometry, 1.0);
    }
    if requested.height() <= 0.0 {
        zoom_rect.set_height(geometry, 1.0);
    }

    let (visible, zoom_factor) = fit_display(zoom_rect.display(geometry), panel)?;
    let draw_rect = centered_draw_rect(visible.size(), zoom_factor, panel);

    debug!(
        zoom_factor,
        visible = ?visible,
        draw = ?draw_rect,
        "Viewport fitted"
    );

    Ok(ViewportFit {
        visible: AnchoredRect::from_display_rect(geometry, visible),
        zoom_factor,
        draw_rect,
    })
}
