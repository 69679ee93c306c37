//! The drag controller: session state machine and transitions.
//!
//! ## State transitions
//!
//! ```text
//! Idle     -> Dragging    (primary press on the element)
//! Dragging -> Dragging    (pointer move; element tracks 1:1)
//! Dragging -> Idle        (primary release anywhere)
//! Any      -> Idle        (detach - session abandoned, no moveend)
//! ```

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::event::{MoveEmitter, MoveEvent, MoveEventKind, Subscription};
use crate::input::PointerEvent;
use crate::position::Position;
use crate::surface::ElementSurface;

/// Construction-time configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DragOptions {
    /// Starting offsets; `None` places the element at the origin.
    pub initial_position: Option<Position>,
}

/// State of the drag session owned by a controller.
///
/// The anchor lives inside the `Dragging` variant, so it cannot exist
/// outside an active session: it is recomputed on every press and discarded
/// on release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragSession {
    /// No active session.
    #[default]
    Idle,
    /// Primary button held down; the element tracks the pointer.
    Dragging {
        /// Offset from the pointer to the element, fixed at press time.
        anchor: Vec2,
    },
}

impl DragSession {
    /// Returns true if no session is active.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while a session is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Get the session anchor, if dragging.
    pub fn anchor(&self) -> Option<Vec2> {
        match self {
            Self::Dragging { anchor } => Some(*anchor),
            Self::Idle => None,
        }
    }
}

/// Drag-to-move controller bound to a single element surface.
///
/// Owns the element position for its whole attached lifetime. The host
/// feeds pointer events in arrival order; every transition, style mutation
/// and notification runs synchronously inside
/// [`handle_pointer_event`](DragController::handle_pointer_event).
///
/// Invariant: the surface's pointer capture is held iff the session is
/// `Dragging`. Capture is acquired on press, released on release, and
/// released unconditionally by [`detach`](DragController::detach).
pub struct DragController<S: ElementSurface> {
    surface: S,
    position: Position,
    session: DragSession,
    emitter: MoveEmitter,
}

impl<S: ElementSurface> DragController<S> {
    /// Bind a controller to an element surface and apply the fixed
    /// presentation setup (absolute positioning, initial offsets, cursor,
    /// selection suppression).
    pub fn new(mut surface: S, options: DragOptions) -> Self {
        let position = options.initial_position.unwrap_or_default();
        surface.prepare(position);
        Self {
            surface,
            position,
            session: DragSession::Idle,
            emitter: MoveEmitter::new(),
        }
    }

    /// Current element offsets.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current session state.
    pub fn session(&self) -> DragSession {
        self.session
    }

    /// Returns true while a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// The bound surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The bound surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Subscribe a handler to one notification kind. Any number of
    /// independent subscribers per kind; delivery is synchronous, in
    /// subscription order.
    pub fn on(
        &mut self,
        kind: MoveEventKind,
        handler: impl FnMut(&MoveEvent) + 'static,
    ) -> Subscription {
        self.emitter.on(kind, handler)
    }

    /// Remove a subscriber. Returns false if it was already removed.
    pub fn off(&mut self, subscription: Subscription) -> bool {
        self.emitter.off(subscription)
    }

    /// Process one pointer event.
    ///
    /// Non-primary buttons are ignored, as are moves and releases while
    /// idle (the host may deliver a few after a session ends, before its
    /// capture teardown takes effect).
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, button } if button.is_primary() => {
                self.press(position);
            }
            PointerEvent::Move { position } => self.drag_to(position),
            PointerEvent::Up { button, .. } if button.is_primary() => self.release(),
            _ => {}
        }
    }

    /// Tear down the controller's global wiring.
    ///
    /// Releases the pointer capture unconditionally, whatever the session
    /// state, so no capture survives the controller. A session in progress
    /// is abandoned: no `moveend` is emitted and the selected marker is left
    /// as-is. Press delivery is not torn down - that wiring belongs to the
    /// host and lives as long as the element, so a later press starts a new
    /// session. Callable repeatedly.
    pub fn detach(&mut self) {
        self.surface.release_pointer();
        if self.session.is_dragging() {
            log::debug!("drag session abandoned by detach");
        }
        self.session = DragSession::Idle;
    }

    fn press(&mut self, pointer: Point) {
        if self.session.is_dragging() {
            // Unreachable under single-pointer input; keep the existing
            // session rather than re-anchoring.
            return;
        }

        self.surface.set_selected(true);
        let anchor = self.position.anchor(pointer);
        self.session = DragSession::Dragging { anchor };
        self.surface.capture_pointer();
        log::debug!(
            "drag start: left={} top={} anchor=({}, {})",
            self.position.left,
            self.position.top,
            anchor.x,
            anchor.y
        );
        self.emit(MoveEventKind::MoveStart);
    }

    fn drag_to(&mut self, pointer: Point) {
        let DragSession::Dragging { anchor } = self.session else {
            return;
        };

        self.position = Position::tracking(pointer, anchor);
        self.surface.apply_position(self.position);
        log::trace!("moving: left={} top={}", self.position.left, self.position.top);
        self.emit(MoveEventKind::Moving);
    }

    fn release(&mut self) {
        if !self.session.is_dragging() {
            return;
        }

        self.surface.set_selected(false);
        self.surface.release_pointer();
        self.session = DragSession::Idle;
        log::debug!(
            "drag end: left={} top={}",
            self.position.left,
            self.position.top
        );
        self.emit(MoveEventKind::MoveEnd);
    }

    fn emit(&mut self, kind: MoveEventKind) {
        self.emitter.emit(kind, MoveEvent::from(self.position));
    }
}
