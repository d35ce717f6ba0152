pub mod camera;
pub mod config;
pub mod fit;
pub mod map;
pub mod replay;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use camview_core::config::ViewConfig;
use camview_core::orientation::{Orientation, SensorSize};
use camview_core::session::DisplaySession;
use clap::{Args, ValueEnum};
use kurbo::{Point, Rect};
use tracing::debug;

#[derive(Clone, Copy, ValueEnum)]
pub enum OrientationArg {
    #[value(name = "0")]
    Identity,
    #[value(name = "0m")]
    MirrorH,
    #[value(name = "90")]
    Rot90,
    #[value(name = "90m")]
    Rot90MirrorH,
    #[value(name = "180")]
    Rot180,
    #[value(name = "180m")]
    Rot180MirrorH,
    #[value(name = "270")]
    Rot270,
    #[value(name = "270m")]
    Rot270MirrorH,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Identity => Orientation::Identity,
            OrientationArg::MirrorH => Orientation::MirrorH,
            OrientationArg::Rot90 => Orientation::Rot90,
            OrientationArg::Rot90MirrorH => Orientation::Rot90MirrorH,
            OrientationArg::Rot180 => Orientation::Rot180,
            OrientationArg::Rot180MirrorH => Orientation::Rot180MirrorH,
            OrientationArg::Rot270 => Orientation::Rot270,
            OrientationArg::Rot270MirrorH => Orientation::Rot270MirrorH,
        }
    }
}

/// View setup shared by `fit` and `map`.
#[derive(Args)]
pub struct ViewArgs {
    /// Sensor size as WIDTHxHEIGHT
    #[arg(long, default_value = "640x480")]
    pub sensor: String,

    /// Display orientation in degrees, "m" suffix for mirrored
    #[arg(long, value_enum)]
    pub orientation: Option<OrientationArg>,

    /// Requested zoom rectangle in sensor pixels as x,y,w,h
    #[arg(long)]
    pub zoom: Option<String>,

    /// Panel size as WIDTHxHEIGHT
    #[arg(long, default_value = "640x480")]
    pub panel: String,

    /// Saved view config (TOML) to start from
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ViewArgs {
    /// Build a fitted session. Command-line values override the config file.
    pub fn session(&self) -> Result<DisplaySession> {
        let (w, h) = parse_dims(&self.sensor).context("Invalid --sensor")?;
        let sensor = SensorSize::new(w, h)?;
        let mut session = DisplaySession::new(sensor);

        if let Some(ref path) = self.config {
            load_view_config(path)?.apply(&mut session);
        }
        if let Some(orientation) = self.orientation {
            session.set_orientation(orientation.into());
        }
        if let Some(ref zoom) = self.zoom {
            let r = parse_rect(zoom).context("Invalid --zoom")?;
            session.set_zoom_rect_absolute(r.x0, r.y0, r.width(), r.height());
        }

        let (pw, ph) = parse_dims(&self.panel).context("Invalid --panel")?;
        session.resize_panel(pw as f64, ph as f64);
        Ok(session)
    }
}

pub fn load_view_config(path: &Path) -> Result<ViewConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: ViewConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    debug!(path = %path.display(), orientation = %config.orientation, "Loaded view config");
    Ok(config)
}

/// Parse comma-separated numbers, requiring exactly `N` of them.
fn parse_numbers<const N: usize>(s: &str) -> Result<[f64; N]> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("Expected numbers, got '{s}'"))?;
    match <[f64; N]>::try_from(values) {
        Ok(arr) => Ok(arr),
        Err(values) => bail!("Expected {N} values, got {}", values.len()),
    }
}

/// Parse `WIDTHxHEIGHT`.
pub fn parse_dims(s: &str) -> Result<(u32, u32)> {
    let (w, h) = s
        .split_once(|c: char| c.eq_ignore_ascii_case(&'x'))
        .with_context(|| format!("Expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse::<u32>().with_context(|| format!("Invalid width '{w}'"))?;
    let h = h.trim().parse::<u32>().with_context(|| format!("Invalid height '{h}'"))?;
    Ok((w, h))
}

/// Parse `x,y,w,h`.
pub fn parse_rect(s: &str) -> Result<Rect> {
    let [x, y, w, h] = parse_numbers::<4>(s)?;
    Ok(Rect::from_origin_size((x, y), (w, h)))
}

/// Parse `x,y`.
pub fn parse_point(s: &str) -> Result<Point> {
    let [x, y] = parse_numbers::<2>(s)?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dims() {
        assert_eq!(parse_dims("640x480").unwrap(), (640, 480));
        assert_eq!(parse_dims(" 1024 X 768 ").unwrap(), (1024, 768));
        assert!(parse_dims("640").is_err());
        assert!(parse_dims("axb").is_err());
    }

    #[test]
    fn test_parse_rect_and_point() {
        assert_eq!(
            parse_rect("1, 2.5, 30, 40").unwrap(),
            Rect::new(1.0, 2.5, 31.0, 42.5)
        );
        assert!(parse_rect("1,2,3").is_err());
        assert_eq!(parse_point("-3,4").unwrap(), Point::new(-3.0, 4.0));
        assert!(parse_point("3;4").is_err());
    }
}
