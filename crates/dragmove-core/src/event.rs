//! Move notifications and the multi-subscriber emitter.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// The three notification kinds of a drag session.
///
/// Per session the delivery order is always one `MoveStart`, zero or more
/// `Moving`, then exactly one `MoveEnd` (unless the session is abandoned by
/// teardown, which emits nothing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveEventKind {
    /// Session opened; fires before any `Moving` of the session.
    MoveStart,
    /// Position updated; one per pointer-move event, no coalescing.
    Moving,
    /// Session closed, carrying the final position.
    MoveEnd,
}

/// Notification payload: the element position at the moment of emission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveEvent {
    pub left: f64,
    pub top: f64,
}

impl MoveEvent {
    /// The payload as a [`Position`].
    pub fn position(&self) -> Position {
        Position::new(self.left, self.top)
    }
}

impl From<Position> for MoveEvent {
    fn from(position: Position) -> Self {
        Self {
            left: position.left,
            top: position.top,
        }
    }
}

/// Handle returned by [`MoveEmitter::on`]; pass it to [`MoveEmitter::off`]
/// to remove exactly that subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Handler = Box<dyn FnMut(&MoveEvent)>;

struct Subscriber {
    id: Subscription,
    kind: MoveEventKind,
    handler: Handler,
}

/// Typed fan-out channel for move notifications.
///
/// Any number of independent subscribers per event kind. Delivery is
/// synchronous and in subscription order, inside the transition that emits.
#[derive(Default)]
pub struct MoveEmitter {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

impl MoveEmitter {
    /// Create an emitter with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to one event kind.
    pub fn on(
        &mut self,
        kind: MoveEventKind,
        handler: impl FnMut(&MoveEvent) + 'static,
    ) -> Subscription {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            kind,
            handler: Box::new(handler),
        });
        id
    }

    /// Remove a subscriber. Returns false if it was already removed.
    pub fn off(&mut self, subscription: Subscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != subscription);
        self.subscribers.len() < before
    }

    /// Number of subscribers for an event kind.
    pub fn subscriber_count(&self, kind: MoveEventKind) -> usize {
        self.subscribers.iter().filter(|s| s.kind == kind).count()
    }

    /// Deliver an event to every subscriber of its kind, in subscription
    /// order.
    pub fn emit(&mut self, kind: MoveEventKind, event: MoveEvent) {
        for subscriber in self.subscribers.iter_mut().filter(|s| s.kind == kind) {
            (subscriber.handler)(&event);
        }
    }
}
