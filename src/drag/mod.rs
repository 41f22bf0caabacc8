//! Drag-and-drop interaction for the board.
//!
//! - [`resolve_drop_target`] normalizes the drag framework's collision result
//! - [`DragController`] turns a gesture (`start`, `over`, `end`, `cancel`)
//!   into at most one board intent, forwarded through
//!   [`crate::board::ports::BoardDispatcher`]

mod controller;
mod kind;
mod resolver;

pub use controller::{
    CardDrag, DiscardReason, DragController, DragOutcome, DragPhase, DragPreview, GestureEvent,
};
pub use kind::{DragKind, ParseDragKindError};
pub use resolver::{DragDescriptor, DropTarget, resolve_drop_target};

#[cfg(test)]
mod tests;
