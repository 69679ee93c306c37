//! egui host adapter for the dragmove controller.
//!
//! Provides [`EguiSurface`], an immediate-mode
//! [`ElementSurface`](dragmove_core::ElementSurface) implementation, and
//! [`DragArea`], a widget that feeds egui pointer input through a
//! [`DragController`](dragmove_core::DragController) and paints the element
//! at its current offsets.

pub mod area;

pub use area::{DragArea, EguiSurface};

/// Standard colors used by the drag area.
pub mod theme {
    use egui::Color32;

    /// Element fill
    pub const FILL: Color32 = Color32::from_rgb(245, 245, 245);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
}
