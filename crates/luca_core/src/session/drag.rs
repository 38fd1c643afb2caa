//! Drag interaction state.
//!
//! A `DragSession` is created on pointer-down over a window header,
//! updated on every pointer-move, and discarded on pointer-up no
//! matter where the pointer is by then. Scoping the offsets to one
//! value object means there is no mutable drag state left over between
//! interactions and no way to end up "stuck dragging".

use crate::model::tool::{Position, ToolKind};

/// One in-flight header drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// The window being dragged.
    pub target: ToolKind,
    /// Pointer position at pointer-down.
    pointer_origin: Position,
    /// Window position at pointer-down.
    window_origin: Position,
}

impl DragSession {
    /// Starts a drag at the given pointer position.
    pub fn begin(target: ToolKind, pointer: Position, window: Position) -> Self {
        Self {
            target,
            pointer_origin: pointer,
            window_origin: window,
        }
    }

    /// Window position for the current pointer position.
    pub fn window_position_for(&self, pointer: Position) -> Position {
        self.window_origin.offset(
            pointer.x - self.pointer_origin.x,
            pointer.y - self.pointer_origin.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::DragSession;
    use crate::model::tool::{Position, ToolKind};

    #[test]
    fn window_follows_pointer_delta() {
        let drag = DragSession::begin(
            ToolKind::Notebook,
            Position::new(100, 100),
            Position::new(40, 80),
        );
        assert_eq!(
            drag.window_position_for(Position::new(130, 90)),
            Position::new(70, 70)
        );
        // Moving back to the origin restores the original position.
        assert_eq!(
            drag.window_position_for(Position::new(100, 100)),
            Position::new(40, 80)
        );
    }
}
