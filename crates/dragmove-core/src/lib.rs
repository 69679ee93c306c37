//! Drag-to-move interaction core.
//!
//! Platform-agnostic press/drag/release state machine for moving a single
//! visual element with a pointing device. The host feeds pointer events in
//! arrival order; the controller owns the element position and reports every
//! change through a typed notification channel (`movestart` / `moving` /
//! `moveend`).
//!
//! All styling and event wiring go through the [`ElementSurface`] seam, so
//! the core has no dependency on any concrete UI toolkit and can be driven
//! entirely with a stub surface in tests.

pub mod controller;
pub mod event;
pub mod input;
pub mod position;
pub mod surface;

pub use controller::{DragController, DragOptions, DragSession};
pub use event::{MoveEmitter, MoveEvent, MoveEventKind, Subscription};
pub use input::{MouseButton, PointerEvent};
pub use position::Position;
pub use surface::ElementSurface;
