/// Relative difference between the width and height zoom ratios below which a
/// rectangle is considered to already match the panel aspect.
pub const ASPECT_TOLERANCE: f64 = 0.01;

/// Size multiplier applied to the requested zoom rectangle per wheel notch
/// when zooming out. Zooming in uses the reciprocal.
pub const WHEEL_ZOOM_STEP: f64 = 1.5;

/// Magnification applied by the discrete zoom-in command.
pub const ZOOM_IN_FACTOR: f64 = 2.0;

/// Magnification applied by the discrete zoom-out command.
pub const ZOOM_OUT_FACTOR: f64 = 0.5;

/// Number of operator-placed markers.
pub const MARKER_COUNT: usize = 4;

/// Distance (in sensor pixels) outside the sensor where reset markers park.
pub const MARKER_PARK_OFFSET: f64 = 100.0;

/// Spacing along the sensor diagonal between the default projection markers,
/// which start at the origin and step up and to the left.
pub const PROJ_MARKER_STEP: f64 = 10.0;

/// Sensor width used before a device reports its real size.
pub const DEFAULT_SENSOR_WIDTH: u32 = 640;

/// Sensor height used before a device reports its real size.
pub const DEFAULT_SENSOR_HEIGHT: u32 = 480;

/// Bit depth assumed when a camera does not report one.
pub const FALLBACK_BIT_DEPTH: u32 = 12;
