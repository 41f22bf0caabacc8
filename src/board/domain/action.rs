//! Board actions accepted by the transition function.

use super::{BoardState, CardId, Comment, ListId};
use serde::{Deserialize, Serialize};

/// A mutation request for [`super::apply`].
///
/// Actions carry every id they need; the engine never generates ids. An
/// action that references an id the snapshot does not hold is absorbed as a
/// no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardAction {
    /// Replaces the whole snapshot, typically with a validated persisted one.
    ReplaceAll {
        /// The snapshot to adopt.
        snapshot: Box<BoardState>,
    },
    /// Renames the board.
    SetBoardTitle {
        /// New title.
        title: String,
    },
    /// Appends an empty list after the last column.
    AddList {
        /// Pre-generated id for the new list.
        list_id: ListId,
        /// List title.
        title: String,
    },
    /// Removes a list together with every card it holds.
    RemoveList {
        /// List to remove.
        list_id: ListId,
    },
    /// Renames a list.
    SetListTitle {
        /// List to rename.
        list_id: ListId,
        /// New title.
        title: String,
    },
    /// Appends a new card to the end of a list.
    AddCard {
        /// Owning list.
        list_id: ListId,
        /// Pre-generated id for the new card.
        card_id: CardId,
        /// Card title.
        title: String,
    },
    /// Renames a card.
    SetCardTitle {
        /// Card to rename.
        card_id: CardId,
        /// New title.
        title: String,
    },
    /// Moves `active_id` to the column position currently held by `over_id`.
    ReorderLists {
        /// The list being dragged.
        active_id: ListId,
        /// The list whose position it takes.
        over_id: ListId,
    },
    /// Moves a card within a list or across lists.
    MoveCard {
        /// Card being moved.
        card_id: CardId,
        /// List currently holding the card.
        from_list_id: ListId,
        /// Destination list.
        to_list_id: ListId,
        /// Card to insert in front of; `None` appends.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        over_card_id: Option<CardId>,
    },
    /// Prepends a comment to a card.
    AddComment {
        /// Card receiving the comment.
        card_id: CardId,
        /// The comment, with a pre-generated id and timestamp.
        comment: Comment,
    },
}

impl BoardAction {
    /// Returns the short kind name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ReplaceAll { .. } => "replace_all",
            Self::SetBoardTitle { .. } => "set_board_title",
            Self::AddList { .. } => "add_list",
            Self::RemoveList { .. } => "remove_list",
            Self::SetListTitle { .. } => "set_list_title",
            Self::AddCard { .. } => "add_card",
            Self::SetCardTitle { .. } => "set_card_title",
            Self::ReorderLists { .. } => "reorder_lists",
            Self::MoveCard { .. } => "move_card",
            Self::AddComment { .. } => "add_comment",
        }
    }

    /// Builds a [`Self::MoveCard`] action.
    #[must_use]
    pub const fn move_card(
        card_id: CardId,
        from_list_id: ListId,
        to_list_id: ListId,
        over_card_id: Option<CardId>,
    ) -> Self {
        Self::MoveCard {
            card_id,
            from_list_id,
            to_list_id,
            over_card_id,
        }
    }

    /// Builds a [`Self::ReorderLists`] action.
    #[must_use]
    pub const fn reorder_lists(active_id: ListId, over_id: ListId) -> Self {
        Self::ReorderLists { active_id, over_id }
    }
}

/// Whether an applied action changed the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The returned snapshot differs from the input.
    Changed,
    /// The action was absorbed; the returned snapshot equals the input.
    Unchanged,
}

impl Transition {
    /// Returns `true` for [`Self::Changed`].
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}
