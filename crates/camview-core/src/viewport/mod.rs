pub mod fit;
pub mod mapper;

pub use fit::{centered_draw_rect, fit, fit_display, ViewportFit};
pub use mapper::ScreenMapper;
