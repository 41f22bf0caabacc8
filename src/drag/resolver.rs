//! Drop target resolution.
//!
//! Maps the raw collision result reported by the drag framework onto a
//! normalized [`DropTarget`]. The resolver is pure, so resolving the same
//! descriptor twice yields value-equal targets; the controller relies on that
//! to suppress redundant work while the pointer moves.

use super::DragKind;
use crate::board::domain::{CardId, ListId};
use serde::{Deserialize, Serialize};

/// A drag element as reported by the drag framework.
///
/// Serialized with the framework's field names: `id`, `type` and `listId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragDescriptor {
    /// Element id. For cards and lists this is the entity id.
    pub id: String,
    /// Raw classification tag, see [`DragKind`].
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Owning-list annotation carried by cards and dropzones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
}

impl DragDescriptor {
    /// Creates a descriptor from raw parts.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: Option<&str>, list_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            kind: kind.map(str::to_owned),
            list_id: list_id.map(str::to_owned),
        }
    }

    /// Describes a card held by `list_id`.
    #[must_use]
    pub fn card(card_id: impl Into<String>, list_id: impl Into<String>) -> Self {
        Self {
            id: card_id.into(),
            kind: Some(DragKind::Card.as_str().to_owned()),
            list_id: Some(list_id.into()),
        }
    }

    /// Describes the dropzone at the foot of `list_id`.
    #[must_use]
    pub fn dropzone(list_id: impl Into<String>) -> Self {
        let owner: String = list_id.into();
        Self {
            id: format!("dropzone-{owner}"),
            kind: Some(DragKind::Dropzone.as_str().to_owned()),
            list_id: Some(owner),
        }
    }

    /// Describes a list's draggable region.
    #[must_use]
    pub fn list(list_id: impl Into<String>) -> Self {
        Self {
            id: list_id.into(),
            kind: Some(DragKind::List.as_str().to_owned()),
            list_id: None,
        }
    }

    /// Returns the parsed classification, if recognized.
    #[must_use]
    pub fn drag_kind(&self) -> Option<DragKind> {
        DragKind::from_tag(self.kind.as_deref())
    }

    /// Returns the owning-list annotation when present and non-empty.
    #[must_use]
    pub fn owning_list(&self) -> Option<ListId> {
        self.list_id
            .as_deref()
            .filter(|list_id| !list_id.is_empty())
            .map(ListId::from)
    }
}

/// Where a dragged card would land.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTarget {
    /// Destination list.
    pub to_list_id: ListId,
    /// Card to insert in front of; `None` means the end of the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_card_id: Option<CardId>,
}

impl DropTarget {
    /// Targets the end of `to_list_id`.
    #[must_use]
    pub const fn end_of(to_list_id: ListId) -> Self {
        Self {
            to_list_id,
            over_card_id: None,
        }
    }

    /// Targets the slot in front of `over_card_id` in `to_list_id`.
    #[must_use]
    pub const fn before(to_list_id: ListId, over_card_id: CardId) -> Self {
        Self {
            to_list_id,
            over_card_id: Some(over_card_id),
        }
    }
}

/// Resolves a raw "over" descriptor into a drop target.
///
/// - a **card** resolves to its owning list, inserting in front of it;
/// - a **dropzone** resolves to the end of its owning list;
/// - a **list** resolves to the end of that list.
///
/// Missing descriptors, unrecognized tags and missing list annotations
/// resolve to `None`.
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::{CardId, ListId};
/// use taskboard::drag::{DragDescriptor, DropTarget, resolve_drop_target};
///
/// let over = DragDescriptor::card("c2", "todo");
/// assert_eq!(
///     resolve_drop_target(Some(&over)),
///     Some(DropTarget::before(ListId::new("todo"), CardId::new("c2"))),
/// );
/// assert_eq!(resolve_drop_target(None), None);
/// ```
#[must_use]
pub fn resolve_drop_target(over: Option<&DragDescriptor>) -> Option<DropTarget> {
    let descriptor = over?;
    match descriptor.drag_kind()? {
        DragKind::Card => {
            let to_list_id = descriptor.owning_list()?;
            Some(DropTarget::before(
                to_list_id,
                CardId::new(descriptor.id.as_str()),
            ))
        }
        DragKind::Dropzone => descriptor.owning_list().map(DropTarget::end_of),
        DragKind::List => {
            if descriptor.id.is_empty() {
                return None;
            }
            Some(DropTarget::end_of(ListId::new(descriptor.id.as_str())))
        }
    }
}
