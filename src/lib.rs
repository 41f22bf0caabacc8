//! Taskboard: the state engine behind a drag-and-drop task board.
//!
//! A board orders lists, lists order cards, and cards collect comments. This
//! crate owns that model, the pure transition function that mutates it, and
//! the logic that maps pointer-drag gestures onto board mutations. Rendering,
//! persistence transport and id generation are reached through ports.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure state and transitions with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage, ids and dispatch
//! - **Adapters**: Concrete implementations of ports (memory, filesystem, UUIDs)
//!
//! # Modules
//!
//! - [`board`]: Board snapshot, actions, transition function and session
//! - [`drag`]: Drop target resolution and the drag interaction controller

pub mod board;
pub mod drag;
