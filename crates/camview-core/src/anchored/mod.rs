//! Positions stored in absolute sensor space and read back in display space.
//!
//! Both entities keep a one-slot cache of their display-space value tagged
//! with the [`DisplayGeometry`](crate::orientation::DisplayGeometry) it was
//! computed under. Reading with a different geometry recomputes and retags;
//! nothing ever has to invalidate caches eagerly.

pub mod point;
pub mod rect;

pub use point::AnchoredPoint;
pub use rect::AnchoredRect;
