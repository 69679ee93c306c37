//! Host styling and event-wiring seam.

use crate::position::Position;

/// Presentation and wiring effects on the element a controller is bound to.
///
/// The drag state machine performs every styling side effect through this
/// trait, which separates UI concerns from the interaction logic: a surface
/// can be a retained widget tree, an immediate-mode UI, or a stub in tests.
pub trait ElementSurface {
    /// One-time setup at controller creation: place the element under
    /// absolute positioning at `initial`, set the "move" cursor affordance,
    /// and suppress text selection. These are fixed side effects, not
    /// reconfigurable afterwards.
    fn prepare(&mut self, initial: Position);

    /// Set the element's visual offsets. Called synchronously on every
    /// position change, one call per pointer-move event.
    fn apply_position(&mut self, position: Position);

    /// Toggle the "selected" presentation marker shown during an active
    /// drag.
    fn set_selected(&mut self, selected: bool);

    /// Begin delivering global pointer-move and pointer-release events to
    /// the controller. Global, not element-scoped: the pointer can move
    /// faster than the element and leave its bounds during a drag.
    fn capture_pointer(&mut self);

    /// Stop delivering global pointer events. Must be idempotent: teardown
    /// calls it unconditionally, whatever the session state.
    fn release_pointer(&mut self);
}
