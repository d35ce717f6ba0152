//! Camera kinds and their capability table.
//!
//! A camera is classified once when it is connected, from its configured
//! type tag, its flag string and (for GigE devices) the number of colour
//! planes it reports. Everything the viewer needs to know about the kind is
//! then a method on [`CameraProfile`] instead of a string test.

use std::fmt;

use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::consts::FALLBACK_BIT_DEPTH;
use crate::orientation::SensorSize;

/// Bit depth of 8-bit compressor and zoomed-projection IC cameras.
const IC_COMPRESSED_BITS: u32 = 8;
/// Bit depth of IC cameras exporting a raw ROI.
const IC_ROI_BITS: u32 = 12;
/// Bit depth assumed for a GigE colour camera that does not report one.
const GIGE_COLOR_FALLBACK_BITS: u32 = 10;
/// Bit depth assumed for a GigE mono camera with no numeric flag.
const GIGE_MONO_FALLBACK_BITS: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraKind {
    /// Image compressor IOC with a shift control.
    IcCompressor,
    /// IC with zoomed projections (`Z` flag).
    IcZoomed,
    /// IC exporting a raw ROI (`R` flag).
    IcRoi,
    /// IC whose bit depth is monitored on the device (`M` flag).
    IcMonitored,
    GigeMono,
    GigeColor,
    Mcc,
    /// Pulnix-style cameras and anything unrecognised.
    Generic,
    /// `LI`/`LIO` line cameras, reported at twice the display resolution.
    LineScaled,
}

/// PV suffixes carrying a device-side ROI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceRoiPvs {
    pub x: &'static str,
    pub y: &'static str,
    pub width: &'static str,
    pub height: &'static str,
}

impl CameraKind {
    /// Classify a camera.
    ///
    /// `color_planes` is the first array dimension a GigE camera reports;
    /// a value of 3 means colour. It is ignored for every other type tag.
    pub fn resolve(type_tag: &str, flags: &str, color_planes: Option<u32>) -> Self {
        match type_tag {
            "IC" => {
                if flags.contains('Z') {
                    Self::IcZoomed
                } else if flags.contains('R') {
                    Self::IcRoi
                } else if flags.contains('M') {
                    Self::IcMonitored
                } else {
                    Self::IcCompressor
                }
            }
            "GE" => {
                if color_planes == Some(3) {
                    Self::GigeColor
                } else {
                    Self::GigeMono
                }
            }
            "MCC" => Self::Mcc,
            "LI" | "LIO" => Self::LineScaled,
            _ => Self::Generic,
        }
    }

    pub fn is_color(self) -> bool {
        self == Self::GigeColor
    }

    /// Factor the reported row/column counts are divided by.
    pub fn image_scale(self) -> u32 {
        match self {
            Self::LineScaled => 2,
            _ => 1,
        }
    }

    /// PV suffix holding the number of image rows.
    pub fn rows_pv(self) -> &'static str {
        match self {
            Self::IcZoomed => ":IMAGE:DoPrj.NOVA",
            Self::IcRoi | Self::Mcc => ":ROI_YNP",
            Self::IcMonitored => ":IC_YNP",
            Self::IcCompressor => ":COMPRESSOR.VALF",
            Self::GigeMono => ":ArraySize1_RBV",
            Self::GigeColor => ":ArraySize2_RBV",
            Self::Generic | Self::LineScaled => ":N_OF_ROW",
        }
    }

    /// PV suffix holding the number of image columns.
    pub fn cols_pv(self) -> &'static str {
        match self {
            Self::IcZoomed => ":IMAGE:DoPrj.NOVB",
            Self::IcRoi | Self::Mcc => ":ROI_XNP",
            Self::IcMonitored => ":IC_XNP",
            Self::IcCompressor => ":COMPRESSOR.VALE",
            Self::GigeMono => ":ArraySize0_RBV",
            Self::GigeColor => ":ArraySize1_RBV",
            Self::Generic | Self::LineScaled => ":N_OF_COL",
        }
    }

    pub fn shift_pv(self) -> Option<&'static str> {
        match self {
            Self::IcCompressor => Some(":SHIFT"),
            _ => None,
        }
    }

    /// PV suffix the bit depth is read from, if the device reports it.
    pub fn bit_depth_pv(self) -> Option<&'static str> {
        match self {
            Self::IcMonitored => Some(":ROI_BITS"),
            Self::GigeMono | Self::GigeColor => Some(":BIT_DEPTH"),
            Self::Mcc | Self::Generic | Self::LineScaled => Some(":N_OF_BITS"),
            Self::IcCompressor | Self::IcZoomed | Self::IcRoi => None,
        }
    }

    pub fn device_roi_pvs(self) -> Option<DeviceRoiPvs> {
        let pvs = match self {
            Self::IcZoomed => DeviceRoiPvs {
                x: ":ROI_X_Start",
                y: ":ROI_Y_Start",
                width: ":ROI_X_End",
                height: ":ROI_Y_End",
            },
            Self::IcRoi | Self::IcCompressor => DeviceRoiPvs {
                x: ":ROI_X",
                y: ":ROI_Y",
                width: ":ROI_XNP",
                height: ":ROI_YNP",
            },
            Self::IcMonitored => DeviceRoiPvs {
                x: ":ROI_X_SET",
                y: ":ROI_Y_SET",
                width: ":ROI_XNP_SET",
                height: ":ROI_YNP_SET",
            },
            _ => return None,
        };
        Some(pvs)
    }
}

impl fmt::Display for CameraKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::IcCompressor => "IC (compressor)",
            Self::IcZoomed => "IC (zoomed projections)",
            Self::IcRoi => "IC (ROI)",
            Self::IcMonitored => "IC (monitored depth)",
            Self::GigeMono => "GigE mono",
            Self::GigeColor => "GigE colour",
            Self::Mcc => "MCC",
            Self::Generic => "Generic",
            Self::LineScaled => "Line (scaled)",
        };
        f.write_str(name)
    }
}

/// A classified camera plus the per-connection details taken from its flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraProfile {
    pub kind: CameraKind,
    /// `D` flag: droplet analysis parameters are available.
    pub droplet: bool,
    flags: String,
}

impl CameraProfile {
    pub fn new(type_tag: &str, flags: &str, color_planes: Option<u32>) -> Self {
        Self {
            kind: CameraKind::resolve(type_tag, flags, color_planes),
            droplet: flags.contains('D'),
            flags: flags.to_string(),
        }
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Bit depth used when the device does not report one.
    pub fn fallback_bit_depth(&self) -> u32 {
        match self.kind {
            CameraKind::IcCompressor | CameraKind::IcZoomed => IC_COMPRESSED_BITS,
            CameraKind::IcRoi => IC_ROI_BITS,
            CameraKind::GigeColor => GIGE_COLOR_FALLBACK_BITS,
            // Mono GigE entries may carry their depth as the whole flag string.
            CameraKind::GigeMono => self
                .flags
                .parse()
                .unwrap_or(GIGE_MONO_FALLBACK_BITS),
            CameraKind::IcMonitored
            | CameraKind::Mcc
            | CameraKind::Generic
            | CameraKind::LineScaled => FALLBACK_BIT_DEPTH,
        }
    }

    /// Effective bit depth given what the device reported, if anything.
    ///
    /// Kinds without a bit-depth PV always use their fixed depth.
    pub fn bit_depth(&self, reported: Option<u32>) -> u32 {
        match (self.kind.bit_depth_pv(), reported) {
            (Some(_), Some(bits)) if bits > 0 => bits,
            _ => self.fallback_bit_depth(),
        }
    }

    pub fn max_value(&self, reported: Option<u32>) -> u64 {
        max_pixel_value(self.bit_depth(reported))
    }

    /// PV suffixes of the droplet parameter records, when enabled.
    pub fn droplet_pvs(&self) -> Option<[&'static str; 2]> {
        self.droplet.then_some([":PARAMS1", ":PARAMS2"])
    }

    /// Sensor size from the row and column counts the device reports.
    pub fn sensor_size(&self, rows: u32, cols: u32) -> Option<SensorSize> {
        let scale = self.kind.image_scale();
        SensorSize::new(cols / scale, rows / scale).ok()
    }
}

/// Largest pixel value representable in `bits` bits.
pub fn max_pixel_value(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Centre-based ROI box as exchanged with the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRoi {
    pub center_x: i64,
    pub center_y: i64,
    pub width: i64,
    pub height: i64,
}

impl DeviceRoi {
    /// Convert an absolute ROI, clamped to the sensor first.
    pub fn from_rect(sensor: SensorSize, roi: Rect) -> Self {
        let r = sensor.clamp_rect(roi);
        let (w, h) = (r.width(), r.height());
        Self {
            center_x: (r.x0 + w / 2.0 + 0.5).floor() as i64,
            center_y: (r.y0 + h / 2.0 + 0.5).floor() as i64,
            width: w as i64,
            height: h as i64,
        }
    }

    /// Absolute rectangle described by this box.
    pub fn to_rect(self) -> Rect {
        let (w, h) = (self.width as f64, self.height as f64);
        let x = self.center_x as f64 - w / 2.0;
        let y = self.center_y as f64 - h / 2.0;
        Rect::from_origin_size((x, y), (w, h))
    }
}
