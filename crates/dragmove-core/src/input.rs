//! Typed pointer events fed to the drag controller by the host.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// The primary button is the only one that starts or ends a drag
    /// session.
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

/// Pointer event type for unified mouse/touch handling.
///
/// `Down` events are element-scoped: the host delivers one when a press
/// lands on the bound element. `Move` and `Up` are global and reach the
/// controller only while it holds the pointer capture, because the pointer
/// can outrun the element mid-drag and leave its bounds.
///
/// Positions are in the same coordinate space as
/// [`Position`](crate::Position).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
}

impl PointerEvent {
    /// The pointer position carried by the event.
    pub fn position(&self) -> Point {
        match self {
            Self::Down { position, .. } | Self::Up { position, .. } | Self::Move { position } => {
                *position
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_button() {
        assert!(MouseButton::Left.is_primary());
        assert!(!MouseButton::Right.is_primary());
        assert!(!MouseButton::Middle.is_primary());
    }

    #[test]
    fn test_event_position() {
        let position = Point::new(100.0, 100.0);

        let down = PointerEvent::Down {
            position,
            button: MouseButton::Left,
        };
        assert_eq!(down.position(), position);

        let moved = PointerEvent::Move {
            position: Point::new(120.0, 110.0),
        };
        assert_eq!(moved.position(), Point::new(120.0, 110.0));
    }
}
