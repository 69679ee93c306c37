//! Drag area widget and its element surface.

use dragmove_core::{DragController, ElementSurface, MouseButton, PointerEvent, Position};
use egui::{
    Color32, CornerRadius, CursorIcon, Pos2, Rect, Response, Sense, Stroke, StrokeKind, Ui, vec2,
};
use kurbo::Point;

use crate::theme;

/// Immediate-mode element surface backed by egui.
///
/// egui has no retained element to style, so the surface records what the
/// controller asked for and [`DragArea`] derives all painting from it each
/// frame. The pointer capture is a routing flag: while held, the widget
/// forwards every global pointer move/release to the controller, wherever
/// the pointer is.
#[derive(Debug, Clone, Default)]
pub struct EguiSurface {
    position: Position,
    selected: bool,
    captured: bool,
}

impl EguiSurface {
    /// Create an unprepared surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last offsets applied by the controller.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether the "selected" highlight is on.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the controller holds the pointer capture.
    pub fn is_captured(&self) -> bool {
        self.captured
    }
}

impl ElementSurface for EguiSurface {
    fn prepare(&mut self, initial: Position) {
        // Absolute placement, move cursor and selection suppression are
        // properties of the widget pass; only the offsets need recording.
        self.position = initial;
    }

    fn apply_position(&mut self, position: Position) {
        self.position = position;
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn capture_pointer(&mut self) {
        self.captured = true;
    }

    fn release_pointer(&mut self) {
        self.captured = false;
    }
}

/// A draggable rectangle driven by a [`DragController`].
///
/// The positioning origin is the top-left of the region the widget is shown
/// in; the element rect sits at `origin + (left, top)` and pointer positions
/// handed to the controller are in that same space.
pub struct DragArea {
    size: egui::Vec2,
    fill: Color32,
    corner_radius: u8,
}

impl DragArea {
    /// Create a drag area with the given element size.
    pub fn new(size: egui::Vec2) -> Self {
        Self {
            size,
            fill: theme::FILL,
            corner_radius: 4,
        }
    }

    /// Set the element fill color.
    pub fn fill(mut self, fill: Color32) -> Self {
        self.fill = fill;
        self
    }

    /// Set the corner radius.
    pub fn corner_radius(mut self, corner_radius: u8) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Show the element and pump this frame's pointer input through the
    /// controller.
    pub fn show(self, ui: &mut Ui, controller: &mut DragController<EguiSurface>) -> Response {
        let origin = ui.max_rect().min;
        let rect = self.element_rect(origin, controller.position());

        // Claim the rect so widgets underneath don't react to the press;
        // the controller, not egui, owns the drag state.
        let response = ui.allocate_rect(rect, Sense::click_and_drag());

        pump_input(ui, origin, rect, controller);

        // The controller may have moved the element this frame; paint from
        // its position, not the rect reserved above.
        let rect = self.element_rect(origin, controller.position());
        let stroke = if controller.surface().is_selected() {
            Stroke::new(2.0, theme::ACCENT)
        } else {
            Stroke::new(1.0, theme::BORDER)
        };
        ui.painter().rect(
            rect,
            CornerRadius::same(self.corner_radius),
            self.fill,
            stroke,
            StrokeKind::Inside,
        );

        response.on_hover_cursor(CursorIcon::Move)
    }

    fn element_rect(&self, origin: Pos2, position: Position) -> Rect {
        Rect::from_min_size(
            origin + vec2(position.left as f32, position.top as f32),
            self.size,
        )
    }
}

/// Translate egui pointer state into the controller's event vocabulary:
/// element-scoped presses, and global moves/releases while the capture is
/// held (egui input already covers the whole viewport).
fn pump_input(
    ui: &Ui,
    origin: Pos2,
    rect: Rect,
    controller: &mut DragController<EguiSurface>,
) {
    let (latest, press_origin, pressed, released, delta) = ui.input(|i| {
        (
            i.pointer.latest_pos(),
            i.pointer.press_origin(),
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.delta(),
        )
    });

    let to_element_space =
        |pos: Pos2| Point::new(f64::from(pos.x - origin.x), f64::from(pos.y - origin.y));

    if pressed {
        if let Some(pos) = press_origin.or(latest) {
            if rect.contains(pos) {
                controller.handle_pointer_event(PointerEvent::Down {
                    position: to_element_space(pos),
                    button: MouseButton::Left,
                });
            }
        }
    }

    if controller.surface().is_captured() {
        if delta != egui::Vec2::ZERO {
            if let Some(pos) = latest {
                controller.handle_pointer_event(PointerEvent::Move {
                    position: to_element_space(pos),
                });
            }
        }
        if released {
            // The release position is not used by the controller.
            let pos = latest.map(to_element_space).unwrap_or(Point::ZERO);
            controller.handle_pointer_event(PointerEvent::Up {
                position: pos,
                button: MouseButton::Left,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_records_controller_effects() {
        let mut surface = EguiSurface::new();

        surface.prepare(Position::new(50.0, 20.0));
        assert_eq!(surface.position(), Position::new(50.0, 20.0));

        surface.apply_position(Position::new(70.0, 30.0));
        assert_eq!(surface.position(), Position::new(70.0, 30.0));

        surface.set_selected(true);
        assert!(surface.is_selected());
        surface.set_selected(false);
        assert!(!surface.is_selected());
    }

    #[test]
    fn test_surface_release_is_idempotent() {
        let mut surface = EguiSurface::new();

        surface.capture_pointer();
        assert!(surface.is_captured());

        surface.release_pointer();
        surface.release_pointer();
        assert!(!surface.is_captured());
    }
}
