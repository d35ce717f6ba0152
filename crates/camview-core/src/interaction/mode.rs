use std::fmt;

use serde::{Deserialize, Serialize};

/// Which entity a primary-button drag mutates.
///
/// Exactly one mode is active at a time. `None` pans the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialMouseMode {
    #[default]
    None,
    Marker1,
    Marker2,
    Marker3,
    Marker4,
    Roi,
}

impl SpecialMouseMode {
    pub const ALL: &[Self] = &[
        Self::None,
        Self::Marker1,
        Self::Marker2,
        Self::Marker3,
        Self::Marker4,
        Self::Roi,
    ];

    /// Mode placing the marker at `index` (0-based).
    pub fn marker(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Marker1),
            1 => Some(Self::Marker2),
            2 => Some(Self::Marker3),
            3 => Some(Self::Marker4),
            _ => None,
        }
    }

    /// 0-based marker index for the marker modes.
    pub fn marker_index(self) -> Option<usize> {
        match self {
            Self::Marker1 => Some(0),
            Self::Marker2 => Some(1),
            Self::Marker3 => Some(2),
            Self::Marker4 => Some(3),
            Self::None | Self::Roi => None,
        }
    }

    pub fn is_special(self) -> bool {
        self != Self::None
    }
}

impl fmt::Display for SpecialMouseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "Pan"),
            Self::Marker1 => write!(f, "Marker 1"),
            Self::Marker2 => write!(f, "Marker 2"),
            Self::Marker3 => write!(f, "Marker 3"),
            Self::Marker4 => write!(f, "Marker 4"),
            Self::Roi => write!(f, "ROI"),
        }
    }
}

/// Projection strip a projection-marker drag comes from.
///
/// Each strip profiles the image along one display axis, so a drag on it
/// moves a projection marker along that axis only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionAxis {
    /// Moves the display x coordinate.
    Horizontal,
    /// Moves the display y coordinate.
    Vertical,
}

impl fmt::Display for ProjectionAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "Horizontal"),
            Self::Vertical => write!(f, "Vertical"),
        }
    }
}
