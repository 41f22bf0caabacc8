//! Domain model for the board state engine.
//!
//! Holds the entity types, the [`BoardState`] snapshot, the [`BoardAction`]
//! vocabulary and the pure transition function [`apply`]. Nothing here
//! touches storage, clocks or id generation.

mod action;
mod defaults;
mod entities;
mod error;
mod ids;
mod reducer;
mod schema;
mod state;
mod view;

pub use action::{BoardAction, Transition};
pub use defaults::default_board_state;
pub use entities::{Board, BoardList, Card, Comment};
pub use error::{IntegrityViolation, SnapshotSchemaError};
pub use ids::{BoardId, CardId, CommentId, ListId};
pub use reducer::{apply, apply_traced, insertion_index};
pub use schema::{parse_snapshot, validate_snapshot_value};
pub use state::BoardState;
pub use view::BoardView;
