pub mod error;
pub mod consts;
pub mod orientation;
pub mod anchored;
pub mod viewport;
pub mod interaction;
pub mod session;
pub mod camera;
pub mod config;
pub mod replay;
