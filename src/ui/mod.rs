//! Screen-space geometry and overlay layout

mod rect;
pub mod overlay;

pub use rect::Rect;
pub use overlay::{OverlayLayout, restart_button};
