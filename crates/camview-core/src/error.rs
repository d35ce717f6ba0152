use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CamviewError {
    #[error("Panel not ready: {width}x{height}")]
    PanelNotReady { width: f64, height: f64 },

    #[error("Invalid orientation code: {0}")]
    InvalidOrientation(u8),

    #[error("Invalid sensor dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Marker index {index} out of range (total: {total})")]
    MarkerIndexOutOfRange { index: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, CamviewError>;
