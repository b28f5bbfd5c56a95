//! Pointer events delivered by the host window.
//!
//! Positions are always in scene coordinates; the host is responsible for
//! mapping from its own view transform before calling into the canvas.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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
    Scroll {
        position: Point,
        delta: Vec2,
    },
}

impl PointerEvent {
    /// Scene position carried by the event.
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Scroll { position, .. } => *position,
        }
    }

    /// Button involved in a press or release.
    pub fn button(&self) -> Option<MouseButton> {
        match self {
            PointerEvent::Down { button, .. } | PointerEvent::Up { button, .. } => Some(*button),
            PointerEvent::Move { .. } | PointerEvent::Scroll { .. } => None,
        }
    }
}
