//! Diagnostic types for board snapshots.
//!
//! The transition function itself never fails. These types describe why a
//! persisted snapshot was rejected at load time, or how a snapshot breaks
//! referential integrity.

use super::{CardId, ListId};
use thiserror::Error;

/// A referential-integrity breach found in a [`super::BoardState`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntegrityViolation {
    /// `board.listIds` names a list that does not exist.
    #[error("board references missing list {0}")]
    DanglingListId(ListId),

    /// `board.listIds` names the same list more than once.
    #[error("board lists {0} more than once")]
    DuplicateListId(ListId),

    /// A list exists but the board does not order it.
    #[error("list {0} is not referenced by the board")]
    OrphanedList(ListId),

    /// A list is stored under a key that differs from its own id.
    #[error("list stored under key {0} carries a different id")]
    MismatchedListKey(ListId),

    /// A list references a card that does not exist.
    #[error("list {list_id} references missing card {card_id}")]
    DanglingCardId {
        /// The list holding the dangling reference.
        list_id: ListId,
        /// The missing card.
        card_id: CardId,
    },

    /// A card id appears more than once across all lists.
    #[error("card {0} is placed in more than one position")]
    CardPlacedMoreThanOnce(CardId),

    /// A card exists but no list holds it.
    #[error("card {0} is not placed in any list")]
    OrphanedCard(CardId),

    /// A card is stored under a key that differs from its own id.
    #[error("card stored under key {0} carries a different id")]
    MismatchedCardKey(CardId),
}

/// Reasons a serialized snapshot fails the minimal load-time schema check.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapshotSchemaError {
    /// The blob is not valid JSON.
    #[error("snapshot is not valid JSON: {0}")]
    MalformedJson(String),

    /// The top-level value is not an object.
    #[error("snapshot must be a JSON object")]
    NotAnObject,

    /// A required object-valued field is missing or has another type.
    #[error("snapshot field '{0}' must be an object")]
    ExpectedObject(&'static str),

    /// A required string-valued field is missing or has another type.
    #[error("snapshot field '{0}' must be a string")]
    ExpectedString(&'static str),

    /// A required array-valued field is missing or has another type.
    #[error("snapshot field '{0}' must be an array")]
    ExpectedArray(&'static str),

    /// The value passed the shape check but does not decode as a snapshot.
    #[error("snapshot does not decode: {0}")]
    Undecodable(String),
}
